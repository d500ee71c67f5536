//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`Nav`]: navigation state machine
//! - [`SessionBridge`]: bridge to the authentication store
//! - [`Driver`]: presentation-specific I/O

use std::sync::Arc;

use tokio::sync::watch;
use turnstile_core::{AuthState, CredentialStore, Environment};
use turnstile_store::AuthStore;

use crate::{Driver, Nav, NavAction, NavEvent, SessionBridge};

/// Generic runtime that orchestrates Nav, `SessionBridge`, and Driver.
///
/// # Type Parameters
///
/// - `D`: Presentation-specific I/O driver
/// - `E`: Environment for latency modeling
/// - `S`: Credential storage backend
pub struct Runtime<D, E, S>
where
    D: Driver,
    E: Environment,
    S: CredentialStore,
{
    driver: D,
    nav: Nav,
    bridge: SessionBridge<E, S>,
    auth_rx: watch::Receiver<AuthState>,
}

impl<D, E, S> Runtime<D, E, S>
where
    D: Driver,
    E: Environment,
    S: CredentialStore,
{
    /// Create a new runtime over a shared store.
    pub fn new(driver: D, store: Arc<AuthStore<E, S>>) -> Self {
        let bridge = SessionBridge::new(store);
        let auth_rx = bridge.observe();
        Self { driver, nav: Nav::new(), bridge, auth_rx }
    }

    /// Run the main event loop.
    ///
    /// Paints the initial waiting indicator, resolves the persisted
    /// credential, then loops:
    /// 1. Applies committed authentication transitions to the guard
    /// 2. Polls for input events from the driver
    /// 3. Executes the resulting actions (render/redirect through the
    ///    driver, session actions through the bridge)
    ///
    /// Returns when a [`NavEvent::Quit`] is processed.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.nav)?;
        self.bridge.bootstrap().await;

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        while self.auth_rx.has_changed().unwrap_or(false) {
            let state = self.auth_rx.borrow_and_update().clone();
            let actions = self.nav.handle(NavEvent::AuthChanged(state));
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }

        if let Some(event) = self.driver.poll_event().await? {
            let actions = self.nav.handle(event);
            if self.process_actions(actions).await? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Process actions returned by Nav.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, initial_actions: Vec<NavAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    NavAction::Render => self.driver.render(&self.nav)?,
                    NavAction::Redirect { to, clear_history } => {
                        tracing::debug!(?to, clear_history, "redirect");
                        self.driver.redirect(to, clear_history)?;
                    },
                    NavAction::Quit => return Ok(true),

                    // Session operations go through the bridge
                    NavAction::PerformLogin { .. } | NavAction::PerformLogout => {
                        let events = self.bridge.process_action(action).await;
                        for event in events {
                            pending_actions.extend(self.nav.handle(event));
                        }

                        // Fold in the transition the session action just
                        // committed, so its redirect lands before any
                        // queued input is processed.
                        while self.auth_rx.has_changed().unwrap_or(false) {
                            let state = self.auth_rx.borrow_and_update().clone();
                            pending_actions.extend(self.nav.handle(NavEvent::AuthChanged(state)));
                        }
                    },
                }
            }
        }
        Ok(false)
    }

    /// Get a reference to the Nav state machine.
    pub fn nav(&self) -> &Nav {
        &self.nav
    }
}
