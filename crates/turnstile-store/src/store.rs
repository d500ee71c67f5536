//! The authentication state authority.
//!
//! [`AuthStore`] owns the observable [`AuthState`] cell and performs the
//! three operations that may transition it: bootstrap, login, and logout.
//!
//! # Concurrency
//!
//! The latency simulation in bootstrap and login happens *before* any state
//! is touched. The read-modify-write of the state cell (persist + publish)
//! is a short synchronous critical section under a single writer lock, so
//! concurrent operations never interleave their commits and an abandoned
//! login future either fully committed or did nothing. Observers always see
//! a consistent snapshot, in commit order.
//!
//! Two concurrent logins with different outcomes race in the latency phase;
//! their commits are serialized and the last committed login wins. This
//! mirrors the original last-write-wins behavior and is accepted rather
//! than rejected.

use std::{
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::sync::watch;
use turnstile_core::{AuthError, AuthState, CredentialStore, Environment, User, UserCatalog};

/// Simulated cost of the credential/session check at bootstrap.
pub const BOOTSTRAP_LATENCY: Duration = Duration::from_secs(2);

/// Simulated network round-trip for a login attempt.
pub const LOGIN_LATENCY: Duration = Duration::from_secs(1);

/// Single authority for authentication state.
///
/// Created with state [`AuthState::Unknown`]; resolved once by
/// [`bootstrap`](AuthStore::bootstrap); thereafter transitions only through
/// [`login`](AuthStore::login) and [`logout`](AuthStore::logout).
///
/// Generic over [`Environment`] (so tests run without real delays) and
/// [`CredentialStore`] (in-memory or durable).
pub struct AuthStore<E: Environment, S: CredentialStore> {
    env: E,
    credentials: S,
    catalog: UserCatalog,
    state: watch::Sender<AuthState>,
    /// Serializes the persist + publish commit sections. Never held across
    /// an await point.
    writer: Mutex<()>,
}

impl<E: Environment, S: CredentialStore> AuthStore<E, S> {
    /// Create a store holding [`AuthState::Unknown`].
    ///
    /// Call [`bootstrap`](AuthStore::bootstrap) once afterwards to resolve
    /// the persisted credential.
    pub fn new(env: E, credentials: S, catalog: UserCatalog) -> Self {
        let (state, _) = watch::channel(AuthState::Unknown);
        Self { env, credentials, catalog, state, writer: Mutex::new(()) }
    }

    /// Snapshot of the current authentication state.
    pub fn current(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Subscribe to the authentication state.
    ///
    /// The receiver starts at the value current at subscription time and
    /// sees every subsequently committed value, in commit order. A slow
    /// reader may observe conflation (only the latest value), which is
    /// acceptable for rendering; no observer ever sees a partially updated
    /// state.
    pub fn observe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Resolve the persisted credential into an authentication state.
    ///
    /// Models the latency of a real credential check, then reads the
    /// persisted username. A username that resolves against the catalog
    /// yields [`AuthState::Authenticated`]; anything else, including a
    /// storage read failure or a stale username, degrades to
    /// [`AuthState::Unauthenticated`]. Bootstrap never surfaces an error.
    ///
    /// Only transitions when the state is still [`AuthState::Unknown`]; a
    /// repeated call is a logged no-op.
    pub async fn bootstrap(&self) {
        self.env.sleep(BOOTSTRAP_LATENCY).await;

        let persisted = match self.credentials.load() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "credential read failed at bootstrap, treating as absent");
                None
            },
        };

        let resolved =
            persisted.as_deref().and_then(|username| self.catalog.find(username).cloned());
        if let Some(username) = persisted.as_deref() {
            if resolved.is_none() {
                tracing::warn!(username, "persisted username no longer resolves, logging out");
            }
        }

        let _commit = self.lock_writer();
        if !matches!(*self.state.borrow(), AuthState::Unknown) {
            tracing::debug!("bootstrap skipped: state already resolved");
            return;
        }
        let next = match resolved {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::Unauthenticated,
        };
        tracing::debug!(state = ?next, "bootstrap resolved authentication state");
        self.state.send_replace(next);
    }

    /// Attempt to log in as `username`.
    ///
    /// Models a network round-trip, then resolves the username against the
    /// catalog (case-sensitive exact match).
    ///
    /// # Errors
    ///
    /// - [`AuthError::UnknownUser`] if the username is not in the catalog;
    ///   the state is left unchanged, not forced to unauthenticated.
    /// - [`AuthError::Storage`] if persisting the credential fails; the
    ///   state is left unchanged (the commit is all-or-nothing).
    pub async fn login(&self, username: &str) -> Result<User, AuthError> {
        self.env.sleep(LOGIN_LATENCY).await;

        let Some(user) = self.catalog.find(username).cloned() else {
            tracing::debug!(username, "login rejected: unknown user");
            return Err(AuthError::UnknownUser { username: username.to_string() });
        };

        let _commit = self.lock_writer();
        self.credentials.store(username)?;
        self.state.send_replace(AuthState::Authenticated(user.clone()));
        tracing::debug!(username, "login committed");
        Ok(user)
    }

    /// Log out unconditionally.
    ///
    /// Clears the persisted credential and transitions to
    /// [`AuthState::Unauthenticated`] regardless of the current state.
    /// Cannot fail: a storage failure while clearing is logged and the
    /// state transition still happens. Idempotent.
    pub fn logout(&self) {
        let _commit = self.lock_writer();
        if let Err(err) = self.credentials.clear() {
            tracing::warn!(%err, "failed to clear persisted credential at logout");
        }
        self.state.send_replace(AuthState::Unauthenticated);
        tracing::debug!("logged out");
    }

    /// The catalog this store resolves usernames against.
    pub fn catalog(&self) -> &UserCatalog {
        &self.catalog
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        // A poisoned lock only means another writer panicked mid-commit;
        // the cell itself is still a consistent snapshot.
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
