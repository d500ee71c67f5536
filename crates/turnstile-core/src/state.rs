//! The authentication state cell value.

use crate::User;

/// Authentication state.
///
/// Exactly one value is held by the store at any instant. The state starts
/// as [`Unknown`](AuthState::Unknown), is resolved once by bootstrap, and
/// thereafter transitions only through explicit login/logout calls. There is
/// no state in which "logged in" and "logged out" are simultaneously true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Status not yet determined (persisted credential still being checked).
    #[default]
    Unknown,
    /// A specific user is logged in.
    Authenticated(User),
    /// No user is logged in.
    Unauthenticated,
}

impl AuthState {
    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The logged-in user. `None` unless authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unknown | Self::Unauthenticated => None,
        }
    }
}
