//! Backoff policy for throttled requests

use rand::Rng;
use std::time::Duration;

/// How long to wait between attempts after HTTP 429.
///
/// A server-supplied `Retry-After` hint is honoured as given (capped at
/// `max_delay`); without one the wait doubles from `base_delay` with up to
/// 10% jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
    max_delay: Duration,
    jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            jitter: true,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    /// Wait before retry number `retry` (1-based).
    pub fn delay(&self, retry: u32, hint: Option<Duration>) -> Duration {
        if let Some(hint) = hint {
            return hint.min(self.max_delay);
        }

        let exponent = retry.saturating_sub(1).min(16);
        let mut delay = self.base_delay.saturating_mul(1u32 << exponent);
        if self.jitter && !delay.is_zero() {
            let max_jitter = (delay.as_millis() / 10) as u64;
            if max_jitter > 0 {
                let extra = rand::rng().random_range(0..=max_jitter);
                delay = delay.saturating_add(Duration::from_millis(extra));
            }
        }
        delay.min(self.max_delay)
    }
}

/// Parse a `Retry-After` header given in whole seconds.
///
/// HTTP-date values are not interpreted and yield `None`.
pub fn parse_retry_after(value: &str) -> Option<Duration> {
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}
