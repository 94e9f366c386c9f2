//! Reconnect delay policy.
//!
//! Exponential backoff with a ceiling and an optional attempt budget. Pure
//! arithmetic; the caller owns the clock and the sleeping.

use std::time::Duration;

/// Delay before the first reconnect attempt.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(500);

/// Upper bound on any single delay.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);

/// Growth factor between consecutive delays.
pub const DEFAULT_MULTIPLIER: u32 = 2;

/// Backoff configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackoffConfig {
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Ceiling for every delay
    pub max_delay: Duration,
    /// Factor applied per attempt (values below 1 behave as 1)
    pub multiplier: u32,
    /// Give up after this many consecutive failures. `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            multiplier: DEFAULT_MULTIPLIER,
            max_attempts: None,
        }
    }
}

/// Backoff state: how many consecutive failures have been seen.
#[derive(Debug, Clone)]
pub struct Backoff {
    config: BackoffConfig,
    attempt: u32,
}

impl Backoff {
    /// Fresh backoff with no recorded failures.
    pub fn new(config: BackoffConfig) -> Self {
        Self { config, attempt: 0 }
    }

    /// Consecutive failures recorded so far.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Record a failure and return how long to wait before retrying.
    ///
    /// `None` once the attempt budget is spent.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.config.max_attempts.is_some_and(|max| self.attempt >= max) {
            return None;
        }

        let factor = self.config.multiplier.max(1).saturating_pow(self.attempt);
        let delay = self.config.initial_delay.saturating_mul(factor).min(self.config.max_delay);
        self.attempt = self.attempt.saturating_add(1);
        Some(delay)
    }

    /// Forget past failures (call after a successful connection).
    pub fn reset(&mut self) {
        self.attempt = 0;
    }
}
