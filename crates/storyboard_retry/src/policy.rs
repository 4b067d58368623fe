//! Backoff schedule for rate-limited calls.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};

/// Bounded exponential backoff schedule.
///
/// The wait before retry `n` (starting at 1) is
/// `backoff_base^n * backoff_unit_ms`, capped at `max_delay_secs`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use storyboard_retry::RetryPolicy;
///
/// let delays = RetryPolicy::default().delays();
/// assert_eq!(delays, vec![Duration::from_millis(2000), Duration::from_millis(4000)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Exponent base of the schedule
    pub backoff_base: u64,
    /// Milliseconds per backoff unit
    pub backoff_unit_ms: u64,
    /// Upper bound on a single wait
    pub max_delay_secs: u64,
    /// Randomize each wait
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: 2,
            backoff_unit_ms: 1000,
            max_delay_secs: 60,
            jitter: false,
        }
    }
}

impl RetryPolicy {
    /// A policy that makes a single attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Waits between attempts, one fewer than `max_attempts`.
    ///
    /// No wait follows the final attempt.
    pub fn delays(&self) -> Vec<Duration> {
        let retries = self.max_attempts.saturating_sub(1) as usize;
        let schedule = ExponentialBackoff::from_millis(self.backoff_base.max(1))
            .factor(self.backoff_unit_ms)
            .max_delay(Duration::from_secs(self.max_delay_secs))
            .take(retries);

        if self.jitter {
            schedule.map(jitter).collect()
        } else {
            schedule.collect()
        }
    }
}
