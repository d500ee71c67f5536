//! Core domain types for Turnstile
//!
//! The vocabulary shared by the store and navigation layers: users and the
//! fixed catalog they come from, the authentication state cell value, typed
//! errors, and the abstractions that keep the rest of the workspace free of
//! direct system dependencies ([`Environment`] for time, [`CredentialStore`]
//! for durable credential storage).
//!
//! This crate is I/O-free. Production implementations of the abstractions
//! live in `turnstile-store`; deterministic ones live in `turnstile-harness`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod env;
mod error;
mod state;
mod user;

pub use credentials::{CredentialStore, LOGGED_IN_USERNAME_KEY};
pub use env::Environment;
pub use error::{AuthError, StorageError};
pub use state::AuthState;
pub use user::{User, UserCatalog};
