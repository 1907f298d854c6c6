//! Token quantities.

use core::fmt;

use super::Rounding;
use crate::error::AmmError;
use crate::math::mul_div;

/// A quantity of one asset in its smallest indivisible unit.
///
/// The pool never looks at decimals: `1 ether` is simply
/// `1_000_000_000_000_000_000`. Addition and subtraction are checked and
/// return `None` instead of wrapping; ratio scaling goes through 256-bit
/// intermediates so `a × b` never overflows before the division.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Rounding};
///
/// let reserve = Amount::new(4_000);
/// assert_eq!(reserve.checked_sub(&Amount::new(1_000)), Some(Amount::new(3_000)));
///
/// // A quarter of the reserve.
/// assert_eq!(reserve.scale(1, 4, Rounding::Down), Ok(Amount::new(1_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Nothing.
    pub const ZERO: Self = Self(0);

    /// The largest representable quantity.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw unit count.
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    /// Returns the raw unit count.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` for [`Amount::ZERO`].
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `self + other`, or `None` past [`Amount::MAX`].
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// `self - other`, or `None` below zero.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// `self × numerator / denominator` with the product held in 256 bits.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
    pub fn scale(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        mul_div(self.0, numerator, denominator, rounding).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(units: u128) -> Self {
        Self(units)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
