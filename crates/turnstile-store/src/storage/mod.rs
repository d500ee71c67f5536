//! Credential storage implementations.
//!
//! The [`CredentialStore`](turnstile_core::CredentialStore) trait lives in
//! `turnstile-core`; this module provides the two implementations: an
//! in-memory map for tests and simulation, and a redb-backed store whose
//! contents survive process restarts.

mod memory;
mod redb;

pub use memory::MemoryCredentials;

pub use self::redb::RedbCredentials;
