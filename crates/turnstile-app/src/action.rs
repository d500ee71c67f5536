//! Navigation side-effects and intents.
//!
//! This module defines the [`NavAction`] enum, which represents
//! instructions produced by the [`Nav`](crate::Nav) state machine for the
//! runtime to execute.

use crate::Destination;

/// Actions produced by the Nav state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Render the current screen.
    Render,

    /// Tell the presentation layer to navigate.
    Redirect {
        /// Destination to navigate to.
        to: Destination,
        /// Drop the history entries that led here, so back-navigation
        /// cannot return to the previous screen.
        clear_history: bool,
    },

    /// Start a login call through the session.
    PerformLogin {
        /// Username as currently entered in the form.
        username: String,
    },

    /// Log out through the session.
    PerformLogout,

    /// Quit the application.
    Quit,
}
