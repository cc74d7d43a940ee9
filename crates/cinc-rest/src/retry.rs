//! Bounded exponential backoff

use crate::config::ClientConfig;
use cinc_types::{CincError, CincResult};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry policy applied to every transport request
///
/// The delay before retry `n` (0-indexed) is `base_delay * 2^n`. Only the
/// attempt index matters; server hints such as `Retry-After` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Create a policy
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Build a policy from the retry settings of a config
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.retry_attempts, config.retry_delay)
    }

    /// Never retry
    pub fn disabled() -> Self {
        Self::new(0, Duration::from_millis(1))
    }

    /// Delay to wait after failed attempt `attempt` (0-indexed)
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Check if a failure at `attempt` should be retried
    pub fn should_retry(&self, attempt: u32, error: &CincError) -> bool {
        attempt < self.max_retries && error.is_retryable()
    }

    /// Run `operation` until it succeeds, fails with a non-retryable error,
    /// or the retry budget is spent
    pub async fn execute<T, F, Fut>(&self, mut operation: F) -> CincResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = CincResult<T>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 0 {
                        debug!(attempt = attempt + 1, "Request succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) if self.should_retry(attempt, &e) => {
                    let delay = self.delay_for_attempt(attempt);
                    warn!(
                        attempt = attempt + 1,
                        max_retries = self.max_retries,
                        delay_ms = %delay.as_millis(),
                        kind = %e.kind(),
                        error = %e,
                        "Request failed, retrying after delay"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    debug!(
                        attempt = attempt + 1,
                        kind = %e.kind(),
                        retryable = e.is_retryable(),
                        error = %e,
                        "Request failed, not retrying"
                    );
                    return Err(e);
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tokio::time::Instant;

    #[test]
    fn test_delay_calculation() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100));

        assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(400));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(800));

        // Saturates instead of overflowing
        assert_eq!(policy.delay_for_attempt(40), Duration::from_millis(100) * u32::MAX);
    }

    #[test]
    fn test_should_retry() {
        let policy = RetryPolicy::new(2, Duration::from_millis(10));
        let server = CincError::from_status(503, None, "unavailable");
        let missing = CincError::from_status(404, None, "missing");

        assert!(policy.should_retry(0, &server));
        assert!(policy.should_retry(1, &server));
        assert!(!policy.should_retry(2, &server));
        assert!(!policy.should_retry(0, &missing));

        let disabled = RetryPolicy::disabled();
        assert!(!disabled.should_retry(0, &CincError::network("offline")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_backoff_schedule() {
        let policy = RetryPolicy::new(3, Duration::from_millis(100));
        let calls = RefCell::new(Vec::new());

        let result: CincResult<()> = policy
            .execute(|| {
                calls.borrow_mut().push(Instant::now());
                async { Err(CincError::network("connection refused")) }
            })
            .await;

        assert_eq!(result.unwrap_err().kind(), cinc_types::ErrorKind::Network);

        let calls = calls.into_inner();
        assert_eq!(calls.len(), 4);

        let gaps: Vec<Duration> = calls.windows(2).map(|w| w[1] - w[0]).collect();
        assert_eq!(
            gaps,
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(400)
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_stops_on_success() {
        let policy = RetryPolicy::new(3, Duration::from_millis(50));
        let mut attempts = 0;

        let result = policy
            .execute(|| {
                attempts += 1;
                let outcome = if attempts < 3 {
                    Err(CincError::from_status(502, None, "bad gateway"))
                } else {
                    Ok(attempts)
                };
                async move { outcome }
            })
            .await;

        assert_eq!(result.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_execute_does_not_retry_client_errors() {
        let policy = RetryPolicy::new(5, Duration::from_millis(1));
        let mut attempts = 0;

        let result: CincResult<()> = policy
            .execute(|| {
                attempts += 1;
                async { Err(CincError::from_status(400, None, "bad input")) }
            })
            .await;

        assert_eq!(result.unwrap_err().status_code(), Some(400));
        assert_eq!(attempts, 1);
    }
}
