use crate::RETRY_ATTEMPTS;
use crate::RETRY_BASE_DELAY;
use crate::RETRY_MAX_DELAY;
use crate::RETRY_MIN_DELAY;
use rand::Rng;
use std::time::Duration;

/// Bounded exponential backoff with uniform jitter.
///
/// Attempt `i` (zero-based) that fails transiently sleeps for a uniform draw
/// from `[min(floor, cap), cap]` with `cap = min(base * 2^i, max)` before
/// attempt `i + 1`. No sleep follows the final attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backoff {
    attempts: usize,
    base: Duration,
    max: Duration,
    floor: Duration,
}

impl Backoff {
    pub fn new(attempts: usize, base: Duration, max: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            base,
            max,
            floor: RETRY_MIN_DELAY,
        }
    }
    /// Retries immediately; for tests and scripted remotes.
    pub fn immediate(attempts: usize) -> Self {
        Self {
            attempts: attempts.max(1),
            base: Duration::ZERO,
            max: Duration::ZERO,
            floor: Duration::ZERO,
        }
    }
    pub fn attempts(&self) -> usize {
        self.attempts
    }
    /// Upper bound of the sleep after failed attempt `attempt`.
    pub fn ceiling(&self, attempt: usize) -> Duration {
        let factor = 2u32.saturating_pow(attempt.min(31) as u32);
        self.base.saturating_mul(factor).min(self.max)
    }
    /// Jittered sleep after failed attempt `attempt`.
    pub fn delay(&self, attempt: usize) -> Duration {
        let hi = self.ceiling(attempt);
        let lo = self.floor.min(hi);
        if hi.is_zero() || lo == hi {
            hi
        } else {
            rand::rng().random_range(lo..=hi)
        }
    }
    pub async fn pause(&self, attempt: usize) {
        let delay = self.delay(attempt);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(RETRY_ATTEMPTS, RETRY_BASE_DELAY, RETRY_MAX_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_doubles_then_caps() {
        let backoff = Backoff::default();
        assert_eq!(backoff.ceiling(0), Duration::from_secs(2));
        assert_eq!(backoff.ceiling(1), Duration::from_secs(4));
        assert_eq!(backoff.ceiling(2), Duration::from_secs(8));
        assert_eq!(backoff.ceiling(3), Duration::from_secs(15));
        assert_eq!(backoff.ceiling(40), Duration::from_secs(15));
    }

    #[test]
    fn jitter_stays_in_range() {
        let backoff = Backoff::default();
        for attempt in 0..6 {
            let delay = backoff.delay(attempt);
            assert!(delay >= RETRY_MIN_DELAY);
            assert!(delay <= backoff.ceiling(attempt));
        }
    }

    #[test]
    fn immediate_never_sleeps() {
        let backoff = Backoff::immediate(3);
        assert_eq!(backoff.attempts(), 3);
        assert!((0..5).all(|i| backoff.delay(i).is_zero()));
    }

    #[test]
    fn at_least_one_attempt() {
        assert_eq!(Backoff::immediate(0).attempts(), 1);
    }
}
