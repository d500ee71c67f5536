//! Navigation input events.
//!
//! This module defines [`NavEvent`], the set of inputs that drive the
//! [`Nav`](crate::Nav) state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions forwarded by the presentation layer (typing, submit,
//!   navigation, logout).
//! - Session notifications: committed authentication state transitions and
//!   resolved login calls.

use turnstile_core::{AuthError, AuthState};

use crate::Destination;

/// Events processed by the Nav state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// A new authentication state was committed by the store.
    AuthChanged(AuthState),

    /// The user asked to move to a destination.
    NavigateTo(Destination),

    /// The username field changed.
    UsernameInput(String),

    /// The user submitted the login form.
    SubmitLogin,

    /// A login call resolved with an error.
    LoginFailed(AuthError),

    /// A login call resolved successfully.
    ///
    /// The redirect is driven by the subsequent
    /// [`AuthChanged`](NavEvent::AuthChanged) observation, not by this
    /// event.
    LoginSettled,

    /// The user asked to log out.
    LogoutRequested,

    /// Quit the application.
    Quit,
}
