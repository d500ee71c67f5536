//! Session-to-navigation translation layer.
//!
//! The [`SessionBridge`] wraps the shared
//! [`AuthStore`](turnstile_store::AuthStore) and adapts it to the
//! navigation lifecycle: it executes the session actions the
//! [`Nav`](crate::Nav) machine produces and converts their results back
//! into [`NavEvent`](crate::NavEvent)s.

use std::sync::Arc;

use tokio::sync::watch;
use turnstile_core::{AuthState, CredentialStore, Environment};
use turnstile_store::AuthStore;

use crate::{NavAction, NavEvent};

/// Bridge between Nav and the authentication store.
///
/// Generic over [`Environment`] and [`CredentialStore`] to support both
/// production and simulation.
pub struct SessionBridge<E: Environment, S: CredentialStore> {
    store: Arc<AuthStore<E, S>>,
}

impl<E: Environment, S: CredentialStore> SessionBridge<E, S> {
    /// Create a bridge over a shared store.
    pub fn new(store: Arc<AuthStore<E, S>>) -> Self {
        Self { store }
    }

    /// The store this bridge drives.
    pub fn store(&self) -> &AuthStore<E, S> {
        &self.store
    }

    /// Resolve the persisted credential once at startup.
    pub async fn bootstrap(&self) {
        self.store.bootstrap().await;
    }

    /// Subscribe to committed authentication state transitions.
    pub fn observe(&self) -> watch::Receiver<AuthState> {
        self.store.observe()
    }

    /// Execute a session action and return resulting Nav events.
    ///
    /// Non-session actions (render, redirect, quit) are not this layer's
    /// concern and produce no events.
    pub async fn process_action(&self, action: NavAction) -> Vec<NavEvent> {
        match action {
            NavAction::PerformLogin { username } => match self.store.login(&username).await {
                Ok(user) => {
                    tracing::debug!(username = %user.username, "login settled");
                    vec![NavEvent::LoginSettled]
                },
                Err(error) => {
                    tracing::debug!(%error, "login failed");
                    vec![NavEvent::LoginFailed(error)]
                },
            },
            NavAction::PerformLogout => {
                self.store.logout();
                vec![]
            },
            NavAction::Render | NavAction::Redirect { .. } | NavAction::Quit => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use turnstile_core::{AuthError, UserCatalog};
    use turnstile_store::MemoryCredentials;

    use super::*;

    /// Latency-free environment local to these tests.
    #[derive(Clone)]
    struct TestEnv;

    impl Environment for TestEnv {
        type Instant = std::time::Instant;

        fn now(&self) -> Self::Instant {
            std::time::Instant::now()
        }

        fn sleep(&self, _duration: Duration) -> impl std::future::Future<Output = ()> + Send {
            std::future::ready(())
        }
    }

    fn bridge() -> SessionBridge<TestEnv, MemoryCredentials> {
        let store = AuthStore::new(TestEnv, MemoryCredentials::new(), UserCatalog::default());
        SessionBridge::new(Arc::new(store))
    }

    #[tokio::test]
    async fn successful_login_settles() {
        let bridge = bridge();
        bridge.bootstrap().await;

        let events = bridge
            .process_action(NavAction::PerformLogin { username: "megaZord123".into() })
            .await;

        assert_eq!(events, vec![NavEvent::LoginSettled]);
        assert!(bridge.store().current().is_authenticated());
    }

    #[tokio::test]
    async fn unknown_user_reports_a_typed_error() {
        let bridge = bridge();
        bridge.bootstrap().await;

        let events =
            bridge.process_action(NavAction::PerformLogin { username: "nobody".into() }).await;

        assert_eq!(
            events,
            vec![NavEvent::LoginFailed(AuthError::UnknownUser { username: "nobody".into() })]
        );
        assert_eq!(bridge.store().current(), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn logout_produces_no_events() {
        let bridge = bridge();
        bridge.bootstrap().await;
        let _ = bridge
            .process_action(NavAction::PerformLogin { username: "megaZord123".into() })
            .await;

        let events = bridge.process_action(NavAction::PerformLogout).await;

        assert_eq!(events, vec![]);
        assert_eq!(bridge.store().current(), AuthState::Unauthenticated);
    }
}
