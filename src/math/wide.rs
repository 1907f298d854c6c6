//! 256-bit widened arithmetic.
//!
//! Reserve and share products routinely exceed `u128` (two 100-token
//! deposits at 18 decimals already multiply to 10^40), so every
//! `a × b / c` in the pool is evaluated in [`U256`] and narrowed back.

use primitive_types::U256;

use crate::domain::Rounding;
use crate::error::AmmError;

/// Computes `a × b / denominator` without intermediate overflow.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Rounding;
/// use simple_swap::math::mul_div;
///
/// let e20 = 100_000_000_000_000_000_000u128;
/// assert_eq!(mul_div(e20, e20, e20, Rounding::Down), Ok(e20));
/// assert_eq!(mul_div(7, 3, 2, Rounding::Up), Ok(11));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(AmmError::Overflow("mul_div product overflow"))?;
    let (quotient, remainder) = product.div_mod(U256::from(denominator));
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        quotient
            .checked_add(U256::one())
            .ok_or(AmmError::Overflow("mul_div rounding overflow"))?
    } else {
        quotient
    };
    narrow(quotient)
}

/// Floor square root of `a × b`.
///
/// The root of any product of two `u128` values fits in `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] only if the product cannot be formed.
pub fn isqrt_product(a: u128, b: u128) -> Result<u128, AmmError> {
    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(AmmError::Overflow("isqrt product overflow"))?;
    narrow(product.integer_sqrt())
}

fn narrow(value: U256) -> Result<u128, AmmError> {
    if value > U256::from(u128::MAX) {
        return Err(AmmError::Overflow("result exceeds u128"));
    }
    Ok(value.low_u128())
}
