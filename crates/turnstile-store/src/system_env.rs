//! Production Environment implementation using system time.
//!
//! `SystemEnv` is the production implementation of the Environment trait:
//! real monotonic time that advances naturally, and tokio sleeps that cost
//! actual wall-clock delay. Production behavior is therefore
//! non-deterministic; deterministic tests use the harness environment
//! instead.

use std::time::Duration;

use turnstile_core::Environment;

/// Production environment using system time and tokio sleep.
#[derive(Clone, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    type Instant = std::time::Instant;

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }

    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic() {
        let env = SystemEnv::new();
        let a = env.now();
        let b = env.now();
        assert!(b >= a);
    }

    #[tokio::test(start_paused = true)]
    async fn sleep_uses_the_tokio_clock() {
        let env = SystemEnv::new();
        let before = tokio::time::Instant::now();

        // Paused tokio time auto-advances, so this returns immediately in
        // tests while still going through the real sleep path.
        env.sleep(Duration::from_secs(2)).await;

        assert!(before.elapsed() >= Duration::from_secs(2));
    }
}
