//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties that must always hold during execution.
//! Unlike example-based tests that check specific scenarios, invariants
//! verify behavioral properties across all possible event sequences.
//!
//! The system extracts observable state from a [`Nav`](turnstile_app::Nav)
//! into a [`NavSnapshot`], then runs registered [`Invariant`] checks
//! against it.

use turnstile_app::{Destination, LoginForm, Nav, Screen};
use turnstile_core::AuthState;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// Observable navigation state extracted for invariant checking.
#[derive(Debug, Clone)]
pub struct NavSnapshot {
    /// Latest committed authentication state.
    pub auth: AuthState,
    /// Current destination.
    pub location: Destination,
    /// What would be rendered right now.
    pub screen: Screen,
    /// Login form sub-state.
    pub form: LoginForm,
}

impl NavSnapshot {
    /// Extract a snapshot from a Nav state machine.
    pub fn of(nav: &Nav) -> Self {
        Self {
            auth: nav.auth().clone(),
            location: nav.location(),
            screen: nav.screen(),
            form: nav.form().clone(),
        }
    }
}

/// An invariant that can be checked against navigation state.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against the current state.
    fn check(&self, state: &NavSnapshot) -> InvariantResult;
}

/// A protected screen is only ever rendered for an authenticated user.
pub struct ProtectedScreenAuthenticated;

impl Invariant for ProtectedScreenAuthenticated {
    fn name(&self) -> &'static str {
        "ProtectedScreenAuthenticated"
    }

    fn check(&self, state: &NavSnapshot) -> InvariantResult {
        let protected = matches!(state.screen, Screen::Home { .. } | Screen::Settings { .. });
        if protected && !state.auth.is_authenticated() {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "screen {:?} rendered while auth state is {:?}",
                    state.screen, state.auth
                ),
            });
        }
        Ok(())
    }
}

/// The guard never leaves the location on a protected destination while
/// the committed state is unauthenticated.
pub struct GuardHoldsLocation;

impl Invariant for GuardHoldsLocation {
    fn name(&self) -> &'static str {
        "GuardHoldsLocation"
    }

    fn check(&self, state: &NavSnapshot) -> InvariantResult {
        if state.location.requires_auth() && state.auth == AuthState::Unauthenticated {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "location {:?} requires auth but state is Unauthenticated",
                    state.location
                ),
            });
        }
        Ok(())
    }
}

/// The login form never reports an error while a call is in flight.
pub struct FormFlightExclusive;

impl Invariant for FormFlightExclusive {
    fn name(&self) -> &'static str {
        "FormFlightExclusive"
    }

    fn check(&self, state: &NavSnapshot) -> InvariantResult {
        if state.form.in_progress && state.form.error.is_some() {
            return Err(Violation {
                invariant: self.name(),
                message: format!("form in flight with error {:?}", state.form.error),
            });
        }
        Ok(())
    }
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against navigation
/// state. Use [`InvariantRegistry::standard()`] for the common set.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Registry with the standard navigation invariants.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ProtectedScreenAuthenticated));
        registry.register(Box::new(GuardHoldsLocation));
        registry.register(Box::new(FormFlightExclusive));
        registry
    }

    /// Add an invariant to the registry.
    pub fn register(&mut self, invariant: Box<dyn Invariant>) {
        self.invariants.push(invariant);
    }

    /// Check all registered invariants against a snapshot.
    ///
    /// Returns the first violation, if any.
    pub fn check_all(&self, state: &NavSnapshot) -> InvariantResult {
        for invariant in &self.invariants {
            invariant.check(state)?;
        }
        Ok(())
    }
}
