//! Pool ownership shares.

use core::fmt;

/// Units of proportional ownership over a pool's reserves.
///
/// A holder of `s` out of `T` outstanding shares can redeem `s / T` of
/// each reserve. Shares are not an asset amount and do not mix with
/// [`Amount`](super::Amount) arithmetic.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Shares;
///
/// let minted = Shares::new(1_000);
/// assert_eq!(minted.checked_sub(&Shares::new(400)), Some(Shares::new(600)));
/// assert_eq!(minted.checked_sub(&Shares::new(1_001)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares outstanding.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw share count.
    pub const fn new(count: u128) -> Self {
        Self(count)
    }

    /// Returns the raw share count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` for [`Shares::ZERO`].
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
