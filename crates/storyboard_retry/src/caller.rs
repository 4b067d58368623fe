//! Retry wrapper for remote calls.

use crate::RetryPolicy;
use std::fmt::Display;
use std::future::Future;
use storyboard_error::RetryableError;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, warn};

/// Executes a fallible remote call, retrying rate-limit failures with backoff.
///
/// Only errors whose [`RetryableError::is_retryable`] is true are retried;
/// anything else propagates at once. When every attempt is rate limited the
/// last error is returned.
#[derive(Debug, Clone, Default)]
pub struct RetryingCaller {
    policy: RetryPolicy,
}

impl RetryingCaller {
    /// Create a caller with the given policy.
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Run `operation`, retrying while it fails with a retryable error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let text = caller.call(|| backend.generate_structured(&request)).await?;
    /// ```
    pub async fn call<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: RetryableError + Display,
    {
        let delays = self.policy.delays();
        let max_attempts = delays.len() + 1;
        let mut attempt = 0usize;

        Retry::spawn(delays.clone(), || {
            attempt += 1;
            let current = attempt;
            let next_delay = delays.get(current - 1).copied();
            let pending = operation();
            async move {
                match pending.await {
                    Ok(value) => {
                        if current > 1 {
                            debug!(attempt = current, "Call succeeded after retry");
                        }
                        Ok(value)
                    }
                    Err(e) if e.is_retryable() => {
                        match next_delay {
                            Some(delay) => warn!(
                                attempt = current,
                                max_attempts,
                                delay_ms = delay.as_millis() as u64,
                                error = %e,
                                "Rate limited, will retry"
                            ),
                            None => warn!(
                                attempt = current,
                                max_attempts,
                                error = %e,
                                "Rate limited, retries exhausted"
                            ),
                        }
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    }
                    Err(e) => {
                        debug!(attempt = current, error = %e, "Permanent error, failing immediately");
                        Err(RetryError::Permanent(e))
                    }
                }
            }
        })
        .await
    }
}
