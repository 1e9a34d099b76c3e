//! Retry budget and backoff arithmetic for one submission.
//!
//! The delay is anchored on the retries still *remaining* after the upcoming
//! retry has been taken from the budget, not on an attempt counter:
//!
//! ```text
//! delay = base_delay * 2^(max_retries - retries_remaining)
//! ```
//!
//! With the defaults (`max_retries = 3`, `base_delay = 1s`) the three retries
//! wait 2s, 4s and 8s.

use std::time::Duration;

pub const MAX_RETRIES: u32 = 3;
pub const BASE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            base_delay: BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait before a retry, given the retries left once it is taken.
    pub fn delay_for(&self, retries_remaining: u32) -> Duration {
        let exponent = self.max_retries.saturating_sub(retries_remaining);
        let factor = 2u32.checked_pow(exponent).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Total attempts a submission may make, the first one included.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Per-submission retry bookkeeping. Owned by a single retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RetryState {
    pub(crate) attempts_remaining: u32,
    pub(crate) next_delay: Duration,
}

impl RetryState {
    pub(crate) fn new(policy: &RetryPolicy) -> Self {
        Self {
            attempts_remaining: policy.max_retries,
            next_delay: policy.delay_for(policy.max_retries),
        }
    }

    /// Takes one retry from the budget and returns the delay to wait before it,
    /// or `None` when the budget is spent.
    pub(crate) fn advance(&mut self, policy: &RetryPolicy) -> Option<Duration> {
        if self.attempts_remaining == 0 {
            return None;
        }
        self.attempts_remaining -= 1;
        self.next_delay = policy.delay_for(self.attempts_remaining);
        Some(self.next_delay)
    }
}
