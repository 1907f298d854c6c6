//! Outcome of a swap operation.

use core::fmt;

use super::Amount;
use crate::error::AmmError;

/// The amounts exchanged by a completed swap.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, SwapOutcome};
///
/// let outcome = SwapOutcome::new(Amount::new(1000), Amount::new(990));
/// assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome` with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientOutputAmount`] if `amount_out` is zero.
    pub const fn new(amount_in: Amount, amount_out: Amount) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        Ok(Self {
            amount_in,
            amount_out,
        })
    }

    /// Returns the input amount taken from the caller.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount delivered to the recipient.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome(in={}, out={})",
            self.amount_in, self.amount_out
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_input() {
        assert_eq!(
            SwapOutcome::new(Amount::ZERO, Amount::new(1)),
            Err(AmmError::ZeroAmount)
        );
    }

    #[test]
    fn rejects_zero_output() {
        assert_eq!(
            SwapOutcome::new(Amount::new(1), Amount::ZERO),
            Err(AmmError::InsufficientOutputAmount)
        );
    }

    #[test]
    fn display() {
        let Ok(o) = SwapOutcome::new(Amount::new(10), Amount::new(9)) else {
            panic!("valid outcome");
        };
        assert_eq!(o.to_string(), "SwapOutcome(in=10, out=9)");
    }
}
