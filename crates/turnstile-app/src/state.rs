//! Observable navigation state types.
//!
//! These structures are the "view model" of the application: the subset of
//! state a rendering technology needs to redraw on change, without exposing
//! the store underneath or mandating any particular rendering paradigm.

use turnstile_core::{AuthError, User};

/// Navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Landing screen after login. Protected.
    Home,
    /// Settings screen. Protected.
    Settings,
    /// Login flow. The only unprotected destination.
    Login,
}

impl Destination {
    /// Whether this destination may only render for an authenticated user.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Login)
    }
}

/// Login form sub-state.
///
/// Presented to, but not owned by, the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    /// Current contents of the username field.
    pub username_input: String,
    /// Inline error from the last resolved login attempt. Cleared by the
    /// very next edit.
    pub error: Option<AuthError>,
    /// A login call is in flight.
    pub in_progress: bool,
}

/// What the presentation layer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Neutral waiting indicator (authentication state unresolved, or a
    /// redirect in flight).
    Loading,
    /// The home screen for a logged-in user.
    Home {
        /// The authenticated user.
        user: User,
    },
    /// The settings screen for a logged-in user.
    Settings {
        /// The authenticated user.
        user: User,
    },
    /// The login form.
    Login {
        /// Current form sub-state.
        form: LoginForm,
    },
}
