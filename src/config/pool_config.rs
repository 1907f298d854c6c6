//! Configuration for a SimpleSwap pool.

use crate::domain::{TokenAddress, TokenPair};
use crate::error::AmmError;

/// Immutable parameters of a pool: the asset pair it trades.
///
/// Pools start empty; reserves come from the first liquidity deposit, not
/// from configuration. Swaps follow the plain constant-product formula
/// with no fee.
///
/// # Validation
///
/// - The pair holds two distinct, non-null addresses.
///
/// # Examples
///
/// ```
/// use simple_swap::config::PoolConfig;
/// use simple_swap::domain::{TokenAddress, TokenPair};
///
/// let pair = TokenPair::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     TokenAddress::from_bytes([2u8; 32]),
/// )
/// .expect("distinct tokens");
///
/// let cfg = PoolConfig::new(pair);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    token_pair: TokenPair,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    #[must_use]
    pub const fn new(token_pair: TokenPair) -> Self {
        Self { token_pair }
    }

    /// Builds the pair from two addresses and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if the addresses are equal or
    /// either is null.
    pub fn for_tokens(token_a: TokenAddress, token_b: TokenAddress) -> Result<Self, AmmError> {
        TokenPair::new(token_a, token_b).map(Self::new)
    }

    /// Validates all configuration invariants.
    ///
    /// A deserialized config never went through [`TokenPair::new`], so the
    /// pair is checked again here.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if the pair is degenerate.
    pub fn validate(&self) -> Result<(), AmmError> {
        TokenPair::new(self.token_pair.first(), self.token_pair.second()).map(|_| ())
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }
}
