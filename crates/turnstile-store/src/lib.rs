//! Authentication store for Turnstile
//!
//! [`AuthStore`] is the single source of truth for "who is logged in". It
//! mediates between the (simulated) credential check, durable storage of the
//! last logged-in username, and observers, under a single-writer-at-a-time
//! discipline.
//!
//! # Components
//!
//! - [`AuthStore`]: bootstrap/login/logout operations and the observable
//!   state cell
//! - [`MemoryCredentials`]: in-memory credential storage for tests and
//!   simulation
//! - [`RedbCredentials`]: redb-backed durable credential storage
//! - [`SystemEnv`]: production environment (real time, real sleeps)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod storage;
mod store;
mod system_env;

pub use storage::{MemoryCredentials, RedbCredentials};
pub use store::{AuthStore, BOOTSTRAP_LATENCY, LOGIN_LATENCY};
pub use system_env::SystemEnv;
