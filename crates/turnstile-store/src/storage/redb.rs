//! Redb-backed durable credential storage.
//!
//! Uses redb's ACID transactions so the persisted credential survives
//! process restarts and is never observed half-written.

use std::{path::Path, sync::Arc};

use redb::{Database, TableDefinition};
use turnstile_core::{CredentialStore, LOGGED_IN_USERNAME_KEY, StorageError};

/// Table: credentials
/// Key: the credential key string (a single row under
/// [`LOGGED_IN_USERNAME_KEY`])
/// Value: UTF-8 username bytes
const CREDENTIALS: TableDefinition<&str, &[u8]> = TableDefinition::new("credentials");

/// Durable credential storage backed by redb.
///
/// Thread-safe through redb's internal locking. Clone is cheap (Arc).
#[derive(Clone)]
pub struct RedbCredentials {
    db: Arc<Database>,
}

impl RedbCredentials {
    /// Open or create a redb database at the given path.
    ///
    /// Creates the credentials table if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the database cannot be opened or
    /// created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path.as_ref()).map_err(|e| StorageError::Io(e.to_string()))?;

        let txn = db.begin_write().map_err(|e| StorageError::Io(e.to_string()))?;
        {
            let _ = txn.open_table(CREDENTIALS).map_err(|e| StorageError::Io(e.to_string()))?;
        }
        txn.commit().map_err(|e| StorageError::Io(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl CredentialStore for RedbCredentials {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let txn = self.db.begin_read().map_err(|e| StorageError::Io(e.to_string()))?;
        let table = txn.open_table(CREDENTIALS).map_err(|e| StorageError::Io(e.to_string()))?;

        let Some(value) =
            table.get(LOGGED_IN_USERNAME_KEY).map_err(|e| StorageError::Io(e.to_string()))?
        else {
            return Ok(None);
        };

        let username = String::from_utf8(value.value().to_vec())
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(Some(username))
    }

    fn store(&self, username: &str) -> Result<(), StorageError> {
        let txn = self.db.begin_write().map_err(|e| StorageError::Io(e.to_string()))?;
        {
            let mut table =
                txn.open_table(CREDENTIALS).map_err(|e| StorageError::Io(e.to_string()))?;
            table
                .insert(LOGGED_IN_USERNAME_KEY, username.as_bytes())
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        txn.commit().map_err(|e| StorageError::Io(e.to_string()))?;

        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let txn = self.db.begin_write().map_err(|e| StorageError::Io(e.to_string()))?;
        {
            let mut table =
                txn.open_table(CREDENTIALS).map_err(|e| StorageError::Io(e.to_string()))?;
            table
                .remove(LOGGED_IN_USERNAME_KEY)
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        txn.commit().map_err(|e| StorageError::Io(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("credentials.redb");

        {
            let store = RedbCredentials::open(&path).expect("open");
            assert!(store.store("megaZord123").is_ok());
            assert_eq!(store.load(), Ok(Some("megaZord123".to_string())));
        }

        // Reopen the database; the credential must have survived.
        let reopened = RedbCredentials::open(&path).expect("reopen");
        assert_eq!(reopened.load(), Ok(Some("megaZord123".to_string())));
        assert!(reopened.clear().is_ok());
        assert_eq!(reopened.load(), Ok(None));
    }

    #[test]
    fn absent_key_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = RedbCredentials::open(dir.path().join("empty.redb")).expect("open");

        assert_eq!(store.load(), Ok(None));
        assert!(store.clear().is_ok());
    }
}
