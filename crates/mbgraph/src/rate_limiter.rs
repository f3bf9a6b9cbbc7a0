// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::time::{sleep, Duration, Instant};

/// Rate limiter for MusicBrainz API calls.
///
/// MusicBrainz rate limit: 1 request per second for non-commercial use.
/// This implementation uses a semaphore and enforces a minimum delay between requests.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    min_interval: Duration,
    last_request: Arc<tokio::sync::Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified minimum interval between requests.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(1)),
            min_interval,
            last_request: Arc::new(tokio::sync::Mutex::new(None)),
        }
    }

    /// Create a rate limiter with MusicBrainz defaults (1 request per second).
    pub fn musicbrainz_default() -> Self {
        Self::new(Duration::from_secs(1))
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a request can be made according to the rate limit.
    pub async fn acquire(&self) {
        // The semaphore is never closed, so a failed acquire cannot happen.
        let _permit = self.semaphore.acquire().await.ok();

        let mut last = self.last_request.lock().await;
        if let Some(wait_time) = self.wait_time(*last) {
            sleep(wait_time).await;
        }
        *last = Some(Instant::now());
    }

    /// Blocking counterpart of [`acquire`](Self::acquire) for synchronous transports.
    ///
    /// Must not be called from inside an async runtime.
    pub fn acquire_blocking(&self) {
        let mut last = self.last_request.blocking_lock();
        if let Some(wait_time) = self.wait_time(*last) {
            std::thread::sleep(wait_time);
        }
        *last = Some(Instant::now());
    }

    fn wait_time(&self, last: Option<Instant>) -> Option<Duration> {
        let elapsed = last?.elapsed();
        if elapsed >= self.min_interval {
            return None;
        }
        let wait_time = self.min_interval - elapsed;
        tracing::trace!(
            target: "musicbrainz",
            "rate limiting: waiting {:?}",
            wait_time
        );
        Some(wait_time)
    }
}
