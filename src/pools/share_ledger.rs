//! Ownership-share ledger.
//!
//! # Invariant
//!
//! `total` equals the sum of every holder balance at every observation
//! point. Changes are staged with [`ShareLedger::plan_mint`] /
//! [`ShareLedger::plan_burn`], which do all checked arithmetic up front,
//! and applied with an infallible [`ShareLedger::apply`]; a staged update
//! that is never applied leaves the ledger untouched.

use std::collections::HashMap;

use crate::domain::{Account, Shares};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// A fully computed change to one holder's balance and the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShareUpdate {
    holder: Account,
    balance: Shares,
    total: Shares,
}

/// Per-holder share balances plus the outstanding total.
///
/// A holder is implicitly at zero until first minted to; burning down to
/// zero keeps the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: HashMap<Account, Shares>,
    total: Shares,
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the balance of `holder`, zero if never minted to.
    pub fn balance_of(&self, holder: &Account) -> Shares {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    /// Returns the outstanding total.
    pub const fn total(&self) -> Shares {
        self.total
    }

    /// Iterates over every holder ever minted to, including zero balances.
    pub fn holders(&self) -> impl Iterator<Item = (&Account, Shares)> + '_ {
        self.balances.iter().map(|(holder, shares)| (holder, *shares))
    }

    /// Returns `true` if `total` equals the sum of all balances.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.holders()
            .try_fold(0u128, |acc, (_, shares)| acc.checked_add(shares.get()))
            .is_some_and(|sum| sum == self.total.get())
    }

    pub(crate) fn plan_mint(&self, to: &Account, shares: Shares) -> Result<ShareUpdate, AmmError> {
        Ok(ShareUpdate {
            holder: *to,
            balance: self.balance_of(to).safe_add(&shares)?,
            total: self.total.safe_add(&shares)?,
        })
    }

    /// # Errors
    ///
    /// [`AmmError::InsufficientShares`] if `shares` is zero or above the
    /// holder's balance.
    pub(crate) fn plan_burn(&self, from: &Account, shares: Shares) -> Result<ShareUpdate, AmmError> {
        if shares.is_zero() {
            return Err(AmmError::InsufficientShares);
        }
        let balance = self
            .balance_of(from)
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)?;
        Ok(ShareUpdate {
            holder: *from,
            balance,
            total: self.total.safe_sub(&shares)?,
        })
    }

    pub(crate) fn apply(&mut self, update: ShareUpdate) {
        self.balances.insert(update.holder, update.balance);
        self.total = update.total;
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> Account {
        Account::from_bytes([1; 32])
    }

    fn bob() -> Account {
        Account::from_bytes([2; 32])
    }

    fn mint(ledger: &mut ShareLedger, to: &Account, n: u128) {
        let Ok(update) = ledger.plan_mint(to, Shares::new(n)) else {
            panic!("mint plan");
        };
        ledger.apply(update);
    }

    #[test]
    fn unknown_holder_is_zero() {
        assert_eq!(ShareLedger::new().balance_of(&alice()), Shares::ZERO);
    }

    #[test]
    fn mint_updates_holder_and_total() {
        let mut ledger = ShareLedger::new();
        mint(&mut ledger, &alice(), 100);
        mint(&mut ledger, &bob(), 50);
        assert_eq!(ledger.balance_of(&alice()), Shares::new(100));
        assert_eq!(ledger.total(), Shares::new(150));
        assert!(ledger.is_consistent());
    }

    #[test]
    fn unapplied_plan_changes_nothing() {
        let mut ledger = ShareLedger::new();
        mint(&mut ledger, &alice(), 100);
        let before = ledger.clone();
        let Ok(_) = ledger.plan_burn(&alice(), Shares::new(40)) else {
            panic!("burn plan");
        };
        assert_eq!(ledger, before);
    }

    #[test]
    fn burn_to_zero_keeps_entry() {
        let mut ledger = ShareLedger::new();
        mint(&mut ledger, &alice(), 100);
        let Ok(update) = ledger.plan_burn(&alice(), Shares::new(100)) else {
            panic!("burn plan");
        };
        ledger.apply(update);
        assert_eq!(ledger.total(), Shares::ZERO);
        assert_eq!(ledger.holders().count(), 1);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn burn_rejects_zero_and_excess() {
        let mut ledger = ShareLedger::new();
        mint(&mut ledger, &alice(), 10);
        assert_eq!(
            ledger.plan_burn(&alice(), Shares::ZERO),
            Err(AmmError::InsufficientShares)
        );
        assert_eq!(
            ledger.plan_burn(&alice(), Shares::new(11)),
            Err(AmmError::InsufficientShares)
        );
        assert_eq!(
            ledger.plan_burn(&bob(), Shares::new(1)),
            Err(AmmError::InsufficientShares)
        );
    }

    #[test]
    fn mint_overflow_rejected() {
        let mut ledger = ShareLedger::new();
        mint(&mut ledger, &alice(), u128::MAX);
        assert!(matches!(
            ledger.plan_mint(&bob(), Shares::new(1)),
            Err(AmmError::Overflow(_))
        ));
    }
}
