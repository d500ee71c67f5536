//! In-memory credential storage for testing and simulation.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use turnstile_core::{CredentialStore, LOGGED_IN_USERNAME_KEY, StorageError};

/// In-memory credential storage.
///
/// A `HashMap` behind `Arc<Mutex<_>>` so clones share the same underlying
/// storage, the way a durable store shared between recreated
/// [`AuthStore`](crate::AuthStore)s would. All operations are infallible.
#[derive(Clone, Default)]
pub struct MemoryCredentials {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCredentials {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(LOGGED_IN_USERNAME_KEY).cloned())
    }

    fn store(&self, username: &str) -> Result<(), StorageError> {
        self.lock().insert(LOGGED_IN_USERNAME_KEY.to_string(), username.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.lock().remove(LOGGED_IN_USERNAME_KEY);
        Ok(())
    }
}
