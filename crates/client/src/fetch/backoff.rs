//! Delay schedule between failed fetch attempts.

use std::time::Duration;

use arcade_core::BackoffKind;

/// Upper bound for exponential delays.
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// How long to wait after a failed attempt before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Same pause after every failure.
    Fixed(Duration),
    /// `initial`, then doubled per failure, never above `max`.
    Exponential { initial: Duration, max: Duration },
}

impl Default for Backoff {
    fn default() -> Self {
        Backoff::Fixed(Duration::from_millis(1000))
    }
}

impl Backoff {
    pub fn from_kind(kind: BackoffKind, delay: Duration) -> Self {
        match kind {
            BackoffKind::Fixed => Backoff::Fixed(delay),
            BackoffKind::Exponential => Backoff::Exponential { initial: delay, max: MAX_BACKOFF.max(delay) },
        }
    }

    /// Delay after the given failed attempt (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match *self {
            Backoff::Fixed(delay) => delay,
            Backoff::Exponential { initial, max } => {
                let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
                initial.saturating_mul(factor).min(max)
            }
        }
    }
}
