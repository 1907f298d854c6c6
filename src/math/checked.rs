//! `?`-friendly sums and differences for [`Amount`] and [`Shares`].
//!
//! # Examples
//!
//! ```
//! use simple_swap::domain::Amount;
//! use simple_swap::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//! assert!(Amount::new(1).safe_sub(&Amount::new(2)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Sums and differences of reserves and share balances that fail with
/// an [`AmmError`] instead of returning `None`.
pub trait CheckedArithmetic: Sized {
    /// `self + other`.
    ///
    /// # Errors
    ///
    /// [`AmmError::Overflow`] past `u128::MAX`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// `self - other`.
    ///
    /// # Errors
    ///
    /// [`AmmError::Underflow`] below zero.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

macro_rules! impl_checked_arithmetic {
    ($ty:ty, $add:literal, $sub:literal) => {
        impl CheckedArithmetic for $ty {
            #[inline]
            fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
                self.checked_add(other).ok_or(AmmError::Overflow($add))
            }

            #[inline]
            fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
                self.checked_sub(other).ok_or(AmmError::Underflow($sub))
            }
        }
    };
}

impl_checked_arithmetic!(Amount, "amount exceeds u128", "amount below zero");
impl_checked_arithmetic!(Shares, "share supply exceeds u128", "shares below zero");
