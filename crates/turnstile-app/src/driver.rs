//! Driver trait for abstracting presentation I/O.
//!
//! The [`Driver`] trait decouples the application runtime from specific
//! presentation implementations. Each frontend implements the trait to
//! provide its own input source and render/redirect handling, while the
//! generic [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use crate::{Destination, Nav, NavEvent};

/// Abstracts presentation I/O for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in production and simulation.
///
/// Rendering is pull-based: `render` receives the whole [`Nav`] and reads
/// [`Nav::screen`] for the current view model, so any rendering technology
/// can redraw on change.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input event.
    ///
    /// Returns the next available event, or `None` if no events are ready.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<NavEvent>, Self::Error>> + Send;

    /// Render the current screen.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, nav: &Nav) -> Result<(), Self::Error>;

    /// Navigate to a destination.
    ///
    /// With `clear_history` set, the presentation layer must drop the
    /// history entries that led here, so back-navigation cannot return to
    /// the previous screen.
    ///
    /// # Errors
    ///
    /// Returns an error if navigation fails.
    fn redirect(&mut self, to: Destination, clear_history: bool) -> Result<(), Self::Error>;

    /// Stop the presentation and clean up resources.
    fn stop(&mut self);
}
