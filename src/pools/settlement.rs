//! Token movements of one pool operation, unwound on failure.
//!
//! An operation performs its transfers through a [`Settlement`], which
//! records each completed leg. If a later leg fails, completed legs are
//! reversed newest-first before the error is returned, so the asset
//! ledgers end where they started and the caller sees a single rejection.
//!
//! Reversing a pull is a plain payout from custody. Reversing a push would
//! need the recipient's authorisation, so payouts are checked against
//! custody with [`Settlement::ensure_payable`] before the first leg moves.

use log::{error, trace};

use crate::domain::{Account, Amount};
use crate::error::{AmmError, LedgerError};
use crate::traits::TokenLedger;

/// One of the pool's two assets, in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    A,
    B,
}

#[derive(Debug, Clone, Copy)]
enum Leg {
    Pull { side: Side, from: Account, amount: Amount },
    Push { side: Side, to: Account, amount: Amount },
}

pub(crate) struct Settlement<'a, L> {
    ledger_a: &'a mut L,
    ledger_b: &'a mut L,
    completed: Vec<Leg>,
}

impl<'a, L: TokenLedger> Settlement<'a, L> {
    pub(crate) fn new(ledger_a: &'a mut L, ledger_b: &'a mut L) -> Self {
        Self {
            ledger_a,
            ledger_b,
            completed: Vec::with_capacity(2),
        }
    }

    fn ledger(&mut self, side: Side) -> &mut L {
        match side {
            Side::A => &mut *self.ledger_a,
            Side::B => &mut *self.ledger_b,
        }
    }

    /// Refuses a payout of `amount` on `side` that custody cannot cover.
    ///
    /// Call for every push before the first leg of the operation.
    pub(crate) fn ensure_payable(&self, side: Side, amount: Amount) -> Result<(), AmmError> {
        let held = match side {
            Side::A => self.ledger_a.custody_balance(),
            Side::B => self.ledger_b.custody_balance(),
        };
        if held < amount {
            trace!("payout of {amount} ({side:?}) exceeds custody {held}");
            return Err(LedgerError::InsufficientBalance.into());
        }
        Ok(())
    }

    /// Pulls `amount` of `side` from `from` into the pool.
    pub(crate) fn pull(&mut self, side: Side, from: &Account, amount: Amount) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        match self.ledger(side).transfer_from(from, amount) {
            Ok(()) => {
                self.completed.push(Leg::Pull {
                    side,
                    from: *from,
                    amount,
                });
                Ok(())
            }
            Err(e) => {
                self.unwind();
                Err(e.into())
            }
        }
    }

    /// Pushes `amount` of `side` from the pool to `to`.
    pub(crate) fn push(&mut self, side: Side, to: &Account, amount: Amount) -> Result<(), AmmError> {
        if amount.is_zero() {
            return Ok(());
        }
        match self.ledger(side).transfer(to, amount) {
            Ok(()) => {
                self.completed.push(Leg::Push {
                    side,
                    to: *to,
                    amount,
                });
                Ok(())
            }
            Err(e) => {
                self.unwind();
                Err(e.into())
            }
        }
    }

    fn unwind(&mut self) {
        while let Some(leg) = self.completed.pop() {
            let reversal = match leg {
                Leg::Pull { side, from, amount } => self.ledger(side).transfer(&from, amount),
                Leg::Push { side, to, amount } => self.ledger(side).transfer_from(&to, amount),
            };
            if let Err(e) = reversal {
                error!("settlement unwind failed for {leg:?}: {e}");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::TokenAddress;
    use crate::ledger::InMemoryLedger;

    fn pool() -> Account {
        Account::from_bytes([0xAA; 32])
    }

    fn alice() -> Account {
        Account::from_bytes([1; 32])
    }

    fn ledger(byte: u8, minted: u128, approved: u128) -> InMemoryLedger {
        let mut l = InMemoryLedger::new(TokenAddress::from_bytes([byte; 32]), pool());
        let Ok(()) = l.mint(&alice(), Amount::new(minted)) else {
            panic!("mint");
        };
        l.approve(&alice(), Amount::new(approved));
        l
    }

    #[test]
    fn both_pulls_succeed() {
        let (mut a, mut b) = (ledger(1, 100, 100), ledger(2, 100, 100));
        let mut s = Settlement::new(&mut a, &mut b);
        assert_eq!(s.pull(Side::A, &alice(), Amount::new(60)), Ok(()));
        assert_eq!(s.pull(Side::B, &alice(), Amount::new(70)), Ok(()));
        assert_eq!(a.balance_of(&pool()), Amount::new(60));
        assert_eq!(b.balance_of(&pool()), Amount::new(70));
    }

    #[test]
    fn failed_second_pull_refunds_first() {
        let (mut a, mut b) = (ledger(1, 100, 100), ledger(2, 100, 10));
        let mut s = Settlement::new(&mut a, &mut b);
        assert_eq!(s.pull(Side::A, &alice(), Amount::new(60)), Ok(()));
        assert_eq!(
            s.pull(Side::B, &alice(), Amount::new(70)),
            Err(AmmError::Transfer(LedgerError::InsufficientAllowance))
        );
        assert_eq!(a.balance_of(&alice()), Amount::new(100));
        assert_eq!(a.balance_of(&pool()), Amount::ZERO);
        assert_eq!(b.balance_of(&alice()), Amount::new(100));
    }

    #[test]
    fn failed_push_refunds_pull() {
        let (mut a, mut b) = (ledger(1, 100, 100), ledger(2, 0, 0));
        let mut s = Settlement::new(&mut a, &mut b);
        assert_eq!(s.pull(Side::A, &alice(), Amount::new(10)), Ok(()));
        assert_eq!(
            s.push(Side::B, &alice(), Amount::new(5)),
            Err(AmmError::Transfer(LedgerError::InsufficientBalance))
        );
        assert_eq!(a.balance_of(&alice()), Amount::new(100));
    }

    #[test]
    fn payout_beyond_custody_is_refused_up_front() {
        let (mut a, mut b) = (ledger(1, 100, 100), ledger(2, 100, 100));
        let Ok(()) = b.transfer_from(&alice(), Amount::new(30)) else {
            panic!("seed custody");
        };
        let s = Settlement::new(&mut a, &mut b);
        assert_eq!(s.ensure_payable(Side::B, Amount::new(30)), Ok(()));
        assert_eq!(
            s.ensure_payable(Side::B, Amount::new(31)),
            Err(AmmError::Transfer(LedgerError::InsufficientBalance))
        );
        assert_eq!(
            s.ensure_payable(Side::A, Amount::new(1)),
            Err(AmmError::Transfer(LedgerError::InsufficientBalance))
        );
        assert_eq!(s.ensure_payable(Side::A, Amount::ZERO), Ok(()));
    }

    #[test]
    fn zero_legs_are_skipped() {
        let (mut a, mut b) = (ledger(1, 0, 0), ledger(2, 0, 0));
        let mut s = Settlement::new(&mut a, &mut b);
        assert_eq!(s.pull(Side::A, &alice(), Amount::ZERO), Ok(()));
        assert_eq!(s.push(Side::B, &alice(), Amount::ZERO), Ok(()));
    }
}
