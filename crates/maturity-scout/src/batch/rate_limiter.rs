//! Fixed-interval pacing between outbound requests.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::Instant;

/// Releases one request slot at a time, spaced `interval` apart.
///
/// The interval is measured from the moment the previous guard was dropped,
/// so the wait sits between items and never before the first one. With
/// `max_concurrent > 1` the same limiter bounds a concurrent fetcher.
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    interval: Duration,
    last_release: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_concurrent: usize, interval: Duration) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            interval,
            last_release: Arc::new(Mutex::new(None)),
        }
    }

    /// One request at a time, `interval` apart.
    pub fn sequential(interval: Duration) -> Self {
        Self::new(1, interval)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next request may start.
    pub async fn acquire(&self) -> RateLimitGuard {
        // The semaphore is never closed, so this only yields `None` in theory.
        let permit = self.semaphore.clone().acquire_owned().await.ok();

        let last = *self.last_release.lock().await;
        if let Some(last) = last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }

        RateLimitGuard {
            _permit: permit,
            last_release: Arc::clone(&self.last_release),
        }
    }
}

/// Holds a request slot; dropping it starts the next interval.
pub struct RateLimitGuard {
    _permit: Option<OwnedSemaphorePermit>,
    last_release: Arc<Mutex<Option<Instant>>>,
}

impl Drop for RateLimitGuard {
    fn drop(&mut self) {
        if let Ok(mut last) = self.last_release.try_lock() {
            *last = Some(Instant::now());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_acquire_is_immediate() {
        let limiter = RateLimiter::sequential(Duration::from_secs(5));
        let start = Instant::now();
        let _g = limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_interval_between_items() {
        let limiter = RateLimiter::sequential(Duration::from_millis(50));
        let start = Instant::now();
        drop(limiter.acquire().await);
        drop(limiter.acquire().await);
        drop(limiter.acquire().await);
        // Two gaps for three items.
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_zero_interval_never_waits() {
        let limiter = RateLimiter::new(2, Duration::ZERO);
        let _g1 = limiter.acquire().await;
        let _g2 = limiter.acquire().await;
    }
}
