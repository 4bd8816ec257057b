use std::time::Duration;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Waits `step * attempt` before retry number `attempt` (1-based).
    Linear(Duration),
}

impl Backoff {
    /// The delay to observe after the given 1-based attempt failed.
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Backoff::Fixed(d) => *d,
            Backoff::Linear(step) => step.saturating_mul(attempt),
        }
    }
}

/// Configuration for the automatic retry mechanism.
///
/// Rate-limit responses (`429`) and transport failures (connect errors, timeouts,
/// truncated bodies) share one attempt budget. Every other non-success status is
/// terminal and returned without retrying.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism. When disabled, exactly one attempt is made.
    pub enabled: bool,
    /// The total number of attempts, including the first one.
    pub max_attempts: u32,
    /// The backoff applied after a `429 Too Many Requests` response.
    pub rate_limit_backoff: Backoff,
    /// The backoff applied after a transport failure.
    pub error_backoff: Backoff,
}

impl RetryConfig {
    pub(crate) fn attempts(&self) -> u32 {
        if self.enabled {
            self.max_attempts.max(1)
        } else {
            1
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 3,
            rate_limit_backoff: Backoff::Linear(Duration::from_secs(12)),
            error_backoff: Backoff::Fixed(Duration::from_secs(5)),
        }
    }
}

/// Unconditional courtesy delays observed against the rate-limited upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Delay between consecutive requests made while processing one fund.
    pub request_gap: Duration,
    /// Delay between finishing one fund and starting the next.
    pub fund_gap: Duration,
}

impl Pacing {
    /// No delays at all. Useful against local mock servers.
    pub const fn none() -> Self {
        Self {
            request_gap: Duration::ZERO,
            fund_gap: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            request_gap: Duration::from_millis(150),
            fund_gap: Duration::from_millis(500),
        }
    }
}
