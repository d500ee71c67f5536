//! Credential storage abstraction.
//!
//! A single optional string (the last logged-in username) in a key-value
//! store. The trait is synchronous: credential mutations are rare and happen
//! inside the store's commit section, so there is nothing to gain from async
//! methods.

use crate::StorageError;

/// Key under which the last logged-in username is persisted.
///
/// Absence of the key means "no persisted login".
pub const LOGGED_IN_USERNAME_KEY: &str = "LOGGED_IN_USERNAME_KEY";

/// Durable store for the persisted credential.
///
/// Must be Clone (shared with recreated stores), Send + Sync, and
/// synchronous. Implementations typically share internal state via Arc, so
/// clones access the same underlying storage.
///
/// # Invariants
///
/// - A username is only ever written when it resolves against the user
///   catalog at write time. It may still become stale if the catalog
///   changes; readers treat an unresolvable username as absent.
pub trait CredentialStore: Clone + Send + Sync + 'static {
    /// Read the persisted username. `None` if no login is persisted.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist a username, replacing any previous value.
    fn store(&self, username: &str) -> Result<(), StorageError>;

    /// Remove the persisted username. A no-op if none is persisted.
    fn clear(&self) -> Result<(), StorageError>;
}
