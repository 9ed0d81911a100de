//! Bounded exponential-backoff retry for delete operations.
//!
//! Delete is the only operation with automatic local recovery: it is
//! idempotent on the backend (404 counts as success), so replaying it after
//! a transient failure is safe. Create, update, list, count, and retrieve
//! surface their first failure immediately; retrying a non-idempotent
//! create could double-create a resource server-side.

use std::future::Future;
use std::time::Duration;

use crate::rest::errors::KongError;

/// Bounded retry policy applied at delete call sites.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Backoff before the first retry; doubles per attempt.
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_millis(250),
        }
    }
}

impl RetryPolicy {
    /// Decides whether another attempt should be scheduled.
    ///
    /// Only generic failures are retried: a conflict or a validation error
    /// will not resolve by replaying, and transport errors are the
    /// embedding application's timeout policy to handle.
    #[must_use]
    pub fn should_retry(&self, error: &KongError, attempt: u32) -> bool {
        if attempt.saturating_add(1) >= self.max_attempts {
            return false;
        }
        matches!(error, KongError::RequestFailed { .. })
    }

    /// Computes the backoff delay before the retry following `attempt`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.backoff_base
            .saturating_mul(2_u32.saturating_pow(attempt))
    }
}

/// Runs `operation` under the retry policy.
///
/// # Errors
///
/// Propagates the last error once attempts are exhausted, and any
/// non-retryable error immediately.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    what: &str,
    mut operation: F,
) -> Result<T, KongError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, KongError>>,
{
    let mut attempt: u32 = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if policy.should_retry(&error, attempt) => {
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    "retrying {what} in {delay:?} after attempt {} failed: {error}",
                    attempt + 1
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
