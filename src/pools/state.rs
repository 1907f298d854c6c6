//! Pool state: asset pair, reserves and the share ledger.
//!
//! # Invariants
//!
//! - Reserves are both zero (empty pool) or both strictly positive.
//! - Reserves are zero exactly when no shares are outstanding.
//! - The share ledger is internally consistent (see [`ShareLedger`]).
//!
//! `PoolState` has no behaviour of its own beyond reads and validation
//! helpers. The engine stages a whole [`Transition`] before moving any
//! tokens and commits it in one infallible step.

use super::share_ledger::ShareUpdate;
use super::ShareLedger;
use crate::domain::{Account, Amount, Orientation, Shares, TokenAddress, TokenPair};
use crate::error::AmmError;

/// A fully computed state change: the reserves after the operation and
/// the share-ledger update, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Transition {
    pub(crate) reserve_a: Amount,
    pub(crate) reserve_b: Amount,
    pub(crate) shares: Option<ShareUpdate>,
}

/// Reserves and ownership ledger of one two-asset pool.
///
/// Obtained read-only through
/// [`ConstantProductPool::snapshot`](super::ConstantProductPool::snapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    token_pair: TokenPair,
    reserve_a: Amount,
    reserve_b: Amount,
    shares: ShareLedger,
}

impl PoolState {
    /// Creates an empty pool state for `token_pair`.
    #[must_use]
    pub fn new(token_pair: TokenPair) -> Self {
        Self {
            token_pair,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            shares: ShareLedger::new(),
        }
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Returns the reserve held for `token`, or `None` if it is not pooled.
    #[must_use]
    pub fn reserve_of(&self, token: &TokenAddress) -> Option<Amount> {
        if *token == self.token_pair.first() {
            Some(self.reserve_a)
        } else if *token == self.token_pair.second() {
            Some(self.reserve_b)
        } else {
            None
        }
    }

    /// Returns the share ledger.
    #[must_use]
    pub const fn share_ledger(&self) -> &ShareLedger {
        &self.shares
    }

    /// Returns the outstanding shares.
    pub const fn total_shares(&self) -> Shares {
        self.shares.total()
    }

    /// Returns the shares held by `holder`.
    pub fn share_balance_of(&self, holder: &Account) -> Shares {
        self.shares.balance_of(holder)
    }

    /// Returns `true` if the pool holds no reserves.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// Matches a caller-supplied asset pair against the pool's pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::AssetNotFound`] unless `{x, y}` is the pool's
    /// pair in some order.
    pub fn orient(&self, x: &TokenAddress, y: &TokenAddress) -> Result<Orientation, AmmError> {
        self.token_pair.orient(x, y)
    }

    /// Returns `true` if every invariant of the module docs holds.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let reserves_agree = self.reserve_a.is_zero() == self.reserve_b.is_zero();
        let shares_agree = self.is_empty() == self.shares.total().is_zero();
        reserves_agree && shares_agree && self.shares.is_consistent()
    }

    pub(crate) fn commit(&mut self, transition: Transition) {
        self.reserve_a = transition.reserve_a;
        self.reserve_b = transition.reserve_b;
        if let Some(update) = transition.shares {
            self.shares.apply(update);
        }
        debug_assert!(self.is_consistent(), "pool state invariant violated");
    }
}
