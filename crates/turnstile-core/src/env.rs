//! Environment abstraction for deterministic testing.
//!
//! Decouples latency modeling from system time. The store's bootstrap and
//! login operations sleep through an [`Environment`] instead of calling the
//! runtime directly, so production code pays real wall-clock delays while
//! tests run against a virtual clock without waiting.

use std::time::Duration;

/// Abstract environment providing monotonic time and async sleep.
///
/// Implementations MUST guarantee that `now()` never goes backwards within a
/// single execution context.
pub trait Environment: Clone + Send + Sync + 'static {
    /// The specific instant type used by this environment.
    ///
    /// Production environments use `std::time::Instant`, while simulation
    /// environments use virtual time.
    type Instant: Copy + Ord + Send + Sync + std::ops::Sub<Output = Duration>;

    /// Current time (monotonic).
    fn now(&self) -> Self::Instant;

    /// Sleeps for the specified duration.
    ///
    /// This is the only async method in the trait. Simulation environments
    /// may advance a virtual clock and resolve immediately.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}
