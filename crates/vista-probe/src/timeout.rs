//! Timeout race for probes
//!
//! Bounds how long a missing file can stall a gallery. The probe is raced
//! against a deadline; when the deadline wins the probe future is dropped,
//! which abandons the load. A slow real file lost this way is reported as
//! not found.

use crate::prober::{ExistenceProber, ProbeResult};
use async_trait::async_trait;
use std::time::Duration;
use tracing::trace;

/// Deadline for generic probes
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(300);

/// Deadline for project thumbnails and slides
pub const PROJECT_PROBE_TIMEOUT: Duration = Duration::from_millis(250);

/// Race a probe against `deadline`
///
/// Resolves with the probe result if it settles first, otherwise with
/// [`ProbeResult::NotFound`].
pub async fn probe_with_timeout(
    prober: &dyn ExistenceProber,
    url: &str,
    deadline: Duration,
) -> ProbeResult {
    match tokio::time::timeout(deadline, prober.probe(url)).await {
        Ok(result) => result,
        Err(_) => {
            trace!(url, ?deadline, "probe deadline elapsed");
            ProbeResult::NotFound
        }
    }
}

/// Probe with an optional deadline
///
/// `None` waits for the prober itself to settle.
pub async fn probe_within(
    prober: &dyn ExistenceProber,
    url: &str,
    deadline: Option<Duration>,
) -> ProbeResult {
    match deadline {
        Some(deadline) => probe_with_timeout(prober, url, deadline).await,
        None => prober.probe(url).await,
    }
}

/// Prober adapter applying a fixed deadline to every probe
#[derive(Debug, Clone)]
pub struct TimeoutProber<P> {
    inner: P,
    deadline: Duration,
}

impl<P: ExistenceProber> TimeoutProber<P> {
    /// Wrap `inner` with `deadline`
    #[inline]
    #[must_use]
    pub fn new(inner: P, deadline: Duration) -> Self {
        Self { inner, deadline }
    }

    /// Configured deadline
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Unwrap the inner prober
    #[inline]
    pub fn into_inner(self) -> P {
        self.inner
    }
}

#[async_trait]
impl<P: ExistenceProber> ExistenceProber for TimeoutProber<P> {
    async fn probe(&self, url: &str) -> ProbeResult {
        probe_with_timeout(&self.inner, url, self.deadline).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    /// Prober that settles after a fixed delay
    struct DelayedProber {
        delay: Duration,
        hit: bool,
    }

    #[async_trait]
    impl ExistenceProber for DelayedProber {
        async fn probe(&self, url: &str) -> ProbeResult {
            tokio::time::sleep(self.delay).await;
            if self.hit {
                ProbeResult::found(url)
            } else {
                ProbeResult::NotFound
            }
        }
    }

    /// Prober that never settles
    struct HangingProber {
        dropped: Arc<AtomicBool>,
    }

    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl ExistenceProber for HangingProber {
        async fn probe(&self, _url: &str) -> ProbeResult {
            let _flag = DropFlag(self.dropped.clone());
            std::future::pending::<()>().await;
            ProbeResult::NotFound
        }
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_probe_resolves_not_found_at_deadline() {
        let dropped = Arc::new(AtomicBool::new(false));
        let prober = HangingProber {
            dropped: dropped.clone(),
        };

        let started = Instant::now();
        let result = probe_with_timeout(&prober, "a/1.jpg", PROJECT_PROBE_TIMEOUT).await;

        assert_eq!(result, ProbeResult::NotFound);
        let elapsed = started.elapsed();
        assert!(elapsed >= PROJECT_PROBE_TIMEOUT);
        assert!(elapsed < PROJECT_PROBE_TIMEOUT + Duration::from_millis(5));
        assert!(dropped.load(Ordering::SeqCst), "losing probe must be dropped");
    }

    #[tokio::test(start_paused = true)]
    async fn fast_probe_wins_the_race() {
        let prober = DelayedProber {
            delay: Duration::from_millis(40),
            hit: true,
        };

        let started = Instant::now();
        let result = probe_with_timeout(&prober, "a/1.jpg", DEFAULT_PROBE_TIMEOUT).await;

        assert_eq!(result, ProbeResult::found("a/1.jpg"));
        assert!(started.elapsed() < DEFAULT_PROBE_TIMEOUT);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_real_file_is_lost() {
        let prober = DelayedProber {
            delay: Duration::from_millis(400),
            hit: true,
        };

        let result = probe_with_timeout(&prober, "a/1.jpg", DEFAULT_PROBE_TIMEOUT).await;
        assert_eq!(result, ProbeResult::NotFound);
    }

    #[tokio::test(start_paused = true)]
    async fn no_deadline_waits_for_prober() {
        let prober = DelayedProber {
            delay: Duration::from_secs(5),
            hit: true,
        };

        let result = probe_within(&prober, "a/1.jpg", None).await;
        assert!(result.is_found());
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_prober_adapter() {
        let prober = TimeoutProber::new(
            DelayedProber {
                delay: Duration::from_secs(1),
                hit: true,
            },
            Duration::from_millis(100),
        );

        assert_eq!(prober.deadline(), Duration::from_millis(100));
        assert_eq!(prober.probe("x.png").await, ProbeResult::NotFound);
    }
}
