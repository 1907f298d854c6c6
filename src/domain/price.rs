//! Fixed-point spot price.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::mul_div;

/// A spot price as an 18-decimal fixed-point ratio.
///
/// The raw value is `quote_reserve × SCALE / base_reserve`, matching the
/// smallest-unit precision of 18-decimal asset ledgers. No floating point
/// is involved.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Price, Rounding};
///
/// let p = Price::from_reserves(Amount::new(200), Amount::new(100), Rounding::Down)
///     .expect("non-zero base");
/// assert_eq!(p.get(), 2 * Price::SCALE);
/// assert_eq!(p.to_string(), "2.000000000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Price(u128);

impl Price {
    /// Fixed-point scale: 10^18.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// A price of exactly one.
    pub const ONE: Self = Self(Self::SCALE);

    /// Wraps a raw scaled value.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Computes `quote × SCALE / base`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if `base` is zero.
    /// - [`AmmError::Overflow`] if the ratio does not fit in `u128`.
    pub fn from_reserves(quote: Amount, base: Amount, rounding: Rounding) -> Result<Self, AmmError> {
        if base.is_zero() {
            return Err(AmmError::EmptyPool);
        }
        mul_div(quote.get(), Self::SCALE, base.get(), rounding).map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}
