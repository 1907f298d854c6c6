//! The pool's pair of distinct assets and caller-order normalization.

use super::TokenAddress;
use crate::error::AmmError;

/// How a caller-supplied asset pair lines up with a pool's pair.
///
/// Produced once at the validation boundary by [`TokenPair::orient`];
/// formulas downstream only ever see pool order `(A, B)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The caller passed `(A, B)`.
    Forward,
    /// The caller passed `(B, A)`.
    Reversed,
}

impl Orientation {
    /// Returns `true` if the caller passed the pair as `(B, A)`.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        matches!(self, Self::Reversed)
    }

    /// Reorders a value pair between caller order and pool order.
    ///
    /// The mapping is its own inverse, so the same call converts caller
    /// order to pool order and back.
    pub fn align<T>(self, first: T, second: T) -> (T, T) {
        match self {
            Self::Forward => (first, second),
            Self::Reversed => (second, first),
        }
    }
}

/// Two distinct assets, kept in the order the pool was created with.
///
/// The first asset is the pool's asset "A" and the second its asset "B";
/// reserve accessors follow this order.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Orientation, TokenAddress, TokenPair};
///
/// let a = TokenAddress::from_bytes([1u8; 32]);
/// let b = TokenAddress::from_bytes([2u8; 32]);
/// let pair = TokenPair::new(a, b).expect("distinct tokens");
///
/// assert_eq!(pair.orient(&b, &a), Ok(Orientation::Reversed));
/// assert!(pair.orient(&a, &TokenAddress::zero()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token_a: TokenAddress,
    token_b: TokenAddress,
}

impl TokenPair {
    /// Creates a new pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both addresses are equal or
    /// either is the null address.
    pub fn new(token_a: TokenAddress, token_b: TokenAddress) -> Result<Self, AmmError> {
        if token_a == token_b {
            return Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            ));
        }
        if token_a.is_zero() || token_b.is_zero() {
            return Err(AmmError::InvalidToken("null address cannot be pooled"));
        }
        Ok(Self { token_a, token_b })
    }

    /// Returns asset A.
    #[must_use]
    pub const fn first(&self) -> TokenAddress {
        self.token_a
    }

    /// Returns asset B.
    #[must_use]
    pub const fn second(&self) -> TokenAddress {
        self.token_b
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &TokenAddress) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Matches a caller-supplied `(x, y)` against the pair in either order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AssetNotFound`] unless `{x, y}` is exactly
    /// `{A, B}`.
    pub fn orient(&self, x: &TokenAddress, y: &TokenAddress) -> Result<Orientation, AmmError> {
        if *x == self.token_a && *y == self.token_b {
            Ok(Orientation::Forward)
        } else if *x == self.token_b && *y == self.token_a {
            Ok(Orientation::Reversed)
        } else {
            Err(AmmError::AssetNotFound)
        }
    }
}
