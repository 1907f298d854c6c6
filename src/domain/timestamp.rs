//! Points in time for deadline checks.

use core::fmt;

/// A point in time in whole seconds since the Unix epoch.
///
/// Used both for the pool clock's current time and for caller-supplied
/// deadlines.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Timestamp;
///
/// let deadline = Timestamp::from_secs(1_754_084_582);
/// assert!(!deadline.has_passed(Timestamp::from_secs(1_754_084_582)));
/// assert!(deadline.has_passed(Timestamp::from_secs(1_754_084_583)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from Unix seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the Unix seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Treating `self` as a deadline, returns `true` once `now` is past it.
    ///
    /// A deadline equal to `now` is still open.
    #[must_use]
    pub const fn has_passed(&self, now: Self) -> bool {
        now.0 > self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
