use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Semaphore, SemaphorePermit};
use tokio::time::Instant;

/// Outbound limiter shared by every pipeline talking to the upstream host.
///
/// Bounds concurrent requests and, once any request is told to back off with a
/// 429, holds every other request until that cooldown has elapsed.
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    cooldown_until: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(max_concurrent: usize) -> Self {
        RateLimiter {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
            cooldown_until: Mutex::new(None),
        }
    }

    /// A permit is only handed out while no cooldown is running, including one
    /// published while this caller was queued on the semaphore.
    pub async fn acquire(&self) -> SemaphorePermit<'_> {
        loop {
            self.wait_for_cooldown().await;
            let permit = self.semaphore.acquire().await.expect("Semaphore closed");
            if self.cooldown_remaining().await.is_zero() {
                return permit;
            }
            drop(permit);
        }
    }

    /// Publishes a backoff to all pipelines. A shorter wait never shortens an
    /// already running cooldown.
    pub async fn cool_down(&self, wait: Duration) {
        let Some(until) = Instant::now().checked_add(wait) else {
            log::warn!("Ignoring unrepresentable cooldown of {:?}", wait);
            return;
        };
        let mut current = self.cooldown_until.lock().await;
        if current.map_or(true, |c| c < until) {
            *current = Some(until);
        }
    }

    pub async fn cooldown_remaining(&self) -> Duration {
        match *self.cooldown_until.lock().await {
            Some(until) => until.saturating_duration_since(Instant::now()),
            None => Duration::ZERO,
        }
    }

    async fn wait_for_cooldown(&self) {
        let until = *self.cooldown_until.lock().await;
        if let Some(until) = until {
            if until > Instant::now() {
                log::debug!("Waiting out shared upstream cooldown");
                tokio::time::sleep_until(until).await;
            }
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_delays_acquire() {
        let limiter = RateLimiter::new(2);
        limiter.cool_down(Duration::from_secs(5)).await;

        let start = Instant::now();
        let _permit = limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_secs(5));
        assert_eq!(limiter.cooldown_remaining().await, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shorter_cooldown_does_not_shrink_longer_one() {
        let limiter = RateLimiter::new(1);
        limiter.cool_down(Duration::from_secs(10)).await;
        limiter.cool_down(Duration::from_secs(2)).await;
        assert!(limiter.cooldown_remaining().await > Duration::from_secs(9));
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_acquire_waits_for_cooldown_published_later() {
        let limiter = Arc::new(RateLimiter::new(1));
        let held = limiter.acquire().await;

        let queued = {
            let limiter = limiter.clone();
            let start = Instant::now();
            tokio::spawn(async move {
                let _permit = limiter.acquire().await;
                start.elapsed()
            })
        };
        tokio::task::yield_now().await;

        limiter.cool_down(Duration::from_secs(5)).await;
        drop(held);

        assert!(queued.await.unwrap() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrepresentable_cooldown_does_not_panic() {
        let limiter = RateLimiter::new(1);
        limiter.cool_down(Duration::MAX).await;
        assert_eq!(limiter.cooldown_remaining().await, Duration::ZERO);
        let _permit = limiter.acquire().await;
    }

    #[tokio::test]
    async fn test_permits_bound_concurrency() {
        let limiter = RateLimiter::new(1);
        let _held = limiter.acquire().await;
        let second = tokio::time::timeout(Duration::from_millis(50), limiter.acquire()).await;
        assert!(second.is_err());
    }
}
