//! Deterministic simulation harness for Turnstile testing.
//!
//! Virtual-clock implementation of the Environment trait and a recording
//! Driver, so the same store and runtime code that pays real latency in
//! production runs synchronously and reproducibly in tests.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths,
//! not specific scenarios. Use [`InvariantRegistry::standard()`] for the
//! common navigation invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_driver;
pub mod sim_env;

pub use invariants::{
    FormFlightExclusive, GuardHoldsLocation, Invariant, InvariantRegistry, InvariantResult,
    NavSnapshot, ProtectedScreenAuthenticated, Violation,
};
pub use sim_driver::{DriverCommand, SimDriver, SimDriverError, SimDriverHandle};
pub use sim_env::{SimEnv, SimInstant};
