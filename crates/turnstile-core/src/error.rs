//! Error types for authentication and credential storage.
//!
//! Strongly-typed errors, returned rather than thrown. Conditions the
//! design treats as degradations (an unresolvable persisted username, a
//! storage read failure at bootstrap) never surface here; they fall back to
//! a valid [`AuthState`](crate::AuthState) instead.

use thiserror::Error;

/// Errors returned by login.
///
/// Login failures leave the authentication state exactly as it was before
/// the call; they never put the store into an ambiguous state and are never
/// process-fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The supplied username is not in the user catalog.
    #[error("no known user for username {username:?}")]
    UnknownUser {
        /// Username that failed to resolve.
        username: String,
    },

    /// The credential could not be persisted, so the login did not commit.
    #[error("credential storage failed: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur in a credential store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Underlying I/O failure (database open, read, write, commit).
    #[error("storage I/O error: {0}")]
    Io(String),

    /// Stored bytes could not be decoded as a username.
    #[error("serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_names_the_username() {
        let err = AuthError::UnknownUser { username: "nobody".to_string() };
        assert_eq!(err.to_string(), "no known user for username \"nobody\"");
    }

    #[test]
    fn storage_errors_convert_into_auth_errors() {
        let err: AuthError = StorageError::Io("disk full".to_string()).into();
        assert!(matches!(err, AuthError::Storage(StorageError::Io(_))));
    }
}
