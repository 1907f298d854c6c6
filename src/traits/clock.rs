//! Time source for deadline checks.
//!
//! The pool reads its [`Clock`] once at the entry of each state-changing
//! operation and compares the result with the caller's deadline.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;

/// Source of the current time.
pub trait Clock {
    /// Returns the current time.
    #[must_use]
    fn now(&self) -> Timestamp;
}

/// Wall-clock time in Unix seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // A clock set before 1970 reads as the epoch.
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        Timestamp::from_secs(secs)
    }
}

/// A clock that only moves when told to.
///
/// Shareable across threads: [`set`](Self::set) and
/// [`advance`](Self::advance) take `&self`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Timestamp;
/// use simple_swap::traits::{Clock, ManualClock};
///
/// let clock = ManualClock::new(Timestamp::from_secs(100));
/// clock.advance(5);
/// assert_eq!(clock.now(), Timestamp::from_secs(105));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock(AtomicU64);

impl ManualClock {
    /// Creates a clock reading `start`.
    #[must_use]
    pub const fn new(start: Timestamp) -> Self {
        Self(AtomicU64::new(start.as_secs()))
    }

    /// Moves the clock to `at`.
    pub fn set(&self, at: Timestamp) {
        self.0.store(at.as_secs(), Ordering::SeqCst);
    }

    /// Moves the clock forward by `secs`, saturating at the end of time.
    pub fn advance(&self, secs: u64) {
        let mut current = self.0.load(Ordering::SeqCst);
        loop {
            let next = current.saturating_add(secs);
            match self
                .0
                .compare_exchange(current, next, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return,
                Err(actual) => current = actual,
            }
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.0.load(Ordering::SeqCst))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_set_and_advance() {
        let clock = ManualClock::new(Timestamp::from_secs(10));
        clock.set(Timestamp::from_secs(50));
        clock.advance(7);
        assert_eq!(clock.now(), Timestamp::from_secs(57));
    }

    #[test]
    fn advance_saturates() {
        let clock = ManualClock::new(Timestamp::from_secs(u64::MAX - 1));
        clock.advance(10);
        assert_eq!(clock.now(), Timestamp::from_secs(u64::MAX));
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now() > Timestamp::from_secs(1_577_836_800));
    }

    #[test]
    fn shared_clock_reads_through() {
        let clock = std::sync::Arc::new(ManualClock::new(Timestamp::from_secs(3)));
        let handle = std::sync::Arc::clone(&clock);
        clock.advance(1);
        assert_eq!(handle.now(), Timestamp::from_secs(4));
    }
}
