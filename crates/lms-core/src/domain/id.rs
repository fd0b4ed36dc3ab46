//! Lead Identifiers
//!
//! Ids are derived from the wall clock in milliseconds and never repeat
//! within one generator, even when the clock stalls or steps backwards.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh lead ids
pub trait IdSource {
    fn next_id(&self) -> u64;
}

/// Millisecond clock id generator
#[derive(Debug, Default)]
pub struct ClockIdGenerator {
    last: AtomicU64,
}

impl ClockIdGenerator {
    pub const fn new() -> Self {
        Self { last: AtomicU64::new(0) }
    }

    fn now_millis() -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }

    /// Next id given an explicit clock reading
    fn next_after(&self, now: u64) -> u64 {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

impl IdSource for ClockIdGenerator {
    fn next_id(&self) -> u64 {
        self.next_after(Self::now_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_the_clock() {
        let ids = ClockIdGenerator::new();
        assert_eq!(ids.next_after(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(ids.next_after(1_700_000_000_500), 1_700_000_000_500);
    }

    #[test]
    fn test_stalled_clock_still_increases() {
        let ids = ClockIdGenerator::new();
        let a = ids.next_after(1_000);
        let b = ids.next_after(1_000);
        let c = ids.next_after(900);
        assert_eq!((a, b, c), (1_000, 1_001, 1_002));
    }

    #[test]
    fn test_real_clock_is_monotonic() {
        let ids = ClockIdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert!(second > first);
    }
}
