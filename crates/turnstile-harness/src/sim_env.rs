//! Simulation environment with a virtual clock.
//!
//! `SimEnv` implements the Environment trait over a virtual monotonic
//! clock: `sleep` advances the clock by the requested duration and resolves
//! immediately, so code that models latency runs synchronously in tests
//! while the elapsed virtual time remains observable.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use turnstile_core::Environment;

/// Virtual instant: time elapsed since the environment was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SimInstant(Duration);

impl std::ops::Sub for SimInstant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

/// Simulation environment using a virtual clock.
///
/// Clones share the same clock, so a store under test and the test itself
/// observe the same virtual time.
#[derive(Clone, Default)]
pub struct SimEnv {
    clock: Arc<Mutex<Duration>>,
}

impl SimEnv {
    /// Create an environment with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time elapsed.
    pub fn elapsed(&self) -> Duration {
        *self.lock()
    }

    /// Manually advance the clock.
    pub fn advance(&self, duration: Duration) {
        *self.lock() += duration;
    }

    fn lock(&self) -> MutexGuard<'_, Duration> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Environment for SimEnv {
    type Instant = SimInstant;

    fn now(&self) -> SimInstant {
        SimInstant(self.elapsed())
    }

    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        let clock = Arc::clone(&self.clock);
        async move {
            let mut guard = clock.lock().unwrap_or_else(PoisonError::into_inner);
            *guard += duration;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero_and_advances() {
        let env = SimEnv::new();
        assert_eq!(env.elapsed(), Duration::ZERO);

        env.advance(Duration::from_secs(3));
        assert_eq!(env.elapsed(), Duration::from_secs(3));
    }

    #[test]
    fn now_is_monotonic_across_advances() {
        let env = SimEnv::new();
        let a = env.now();
        env.advance(Duration::from_millis(1));
        let b = env.now();

        assert!(b > a);
        assert_eq!(b - a, Duration::from_millis(1));
    }

    #[test]
    fn clones_share_the_clock() {
        let env = SimEnv::new();
        let clone = env.clone();

        env.advance(Duration::from_secs(1));
        assert_eq!(clone.elapsed(), Duration::from_secs(1));
    }
}
