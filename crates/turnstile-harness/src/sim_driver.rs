//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface a production frontend would, but
//! records every render and redirect as a [`DriverCommand`] and feeds the
//! runtime from an injected event queue, so tests can assert on the exact
//! command sequence the navigation guard produced.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use turnstile_app::{Destination, Driver, Nav, NavEvent, Screen};

/// Error type for the simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// A command the runtime issued to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCommand {
    /// The screen that was rendered.
    Rendered(Screen),
    /// A navigation the presentation layer was told to perform.
    Redirected {
        /// Destination navigated to.
        to: Destination,
        /// Whether the history entries leading here were dropped.
        clear_history: bool,
    },
}

#[derive(Default)]
struct SharedState {
    pending_events: VecDeque<NavEvent>,
    commands: Vec<DriverCommand>,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] so the same [`turnstile_app::Runtime`]
/// orchestration code runs in both production and simulation.
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a new simulation driver with an empty event queue.
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(SharedState::default())) }
    }

    /// Handle for injecting events and inspecting recorded commands after
    /// the driver has been moved into a runtime.
    pub fn handle(&self) -> SimDriverHandle {
        SimDriverHandle { state: Arc::clone(&self.state) }
    }

    /// Queue an event for the runtime to process.
    pub fn inject_event(&self, event: NavEvent) {
        self.handle().inject_event(event);
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shared handle over a [`SimDriver`]'s recorded state.
#[derive(Clone)]
pub struct SimDriverHandle {
    state: Arc<Mutex<SharedState>>,
}

impl SimDriverHandle {
    /// Queue an event for the runtime to process.
    pub fn inject_event(&self, event: NavEvent) {
        tracing::debug!(?event, "injecting event");
        self.lock().pending_events.push_back(event);
    }

    /// Commands recorded so far, in issue order.
    pub fn commands(&self) -> Vec<DriverCommand> {
        self.lock().commands.clone()
    }

    /// Whether the runtime stopped the driver.
    pub fn stopped(&self) -> bool {
        self.lock().stopped
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    fn poll_event(
        &mut self,
    ) -> impl std::future::Future<Output = Result<Option<NavEvent>, Self::Error>> + Send {
        let state = Arc::clone(&self.state);
        async move {
            let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
            Ok(guard.pending_events.pop_front())
        }
    }

    fn render(&mut self, nav: &Nav) -> Result<(), Self::Error> {
        let screen = nav.screen();
        self.lock().commands.push(DriverCommand::Rendered(screen));
        Ok(())
    }

    fn redirect(&mut self, to: Destination, clear_history: bool) -> Result<(), Self::Error> {
        self.lock().commands.push(DriverCommand::Redirected { to, clear_history });
        Ok(())
    }

    fn stop(&mut self) {
        self.lock().stopped = true;
    }
}
