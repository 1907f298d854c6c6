//! Asset ledger collaborator consumed by the pool.
//!
//! A pool drives one [`TokenLedger`] per asset. The ledger owns the
//! balances (including the pool's own custodian balance) and decides
//! whether a transfer is authorised; the pool never inspects allowances
//! and relies on a refused transfer coming back as an error.
//!
//! # Contract
//!
//! - A transfer either moves exactly `amount` or moves nothing and
//!   returns `Err`.
//! - Calls are synchronous; the pool holds its lock across them.
//! - The pool checks [`TokenLedger::custody_balance`] before paying out,
//!   so a payout that would fail is refused before any leg moves.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{Account, Amount};
use crate::error::LedgerError;

/// The transfer surface of a fungible-asset ledger, as seen by one pool.
pub trait TokenLedger {
    /// Moves `amount` from `owner` into the pool's custody.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if `owner` lacks the balance or has not
    /// authorised the pool.
    fn transfer_from(&mut self, owner: &Account, amount: Amount) -> Result<(), LedgerError>;

    /// Moves `amount` out of the pool's custody to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if the pool's custody balance is short.
    fn transfer(&mut self, recipient: &Account, amount: Amount) -> Result<(), LedgerError>;

    /// Returns the balance held by `holder`.
    #[must_use]
    fn balance_of(&self, holder: &Account) -> Amount;

    /// Returns the balance held in the pool's custody, the most a
    /// [`transfer`](TokenLedger::transfer) can pay out.
    #[must_use]
    fn custody_balance(&self) -> Amount;
}

/// A ledger shared between the pool and other holders of the handle
/// (tests, a wallet front-end minting and approving between operations).
impl<L: TokenLedger> TokenLedger for Arc<Mutex<L>> {
    fn transfer_from(&mut self, owner: &Account, amount: Amount) -> Result<(), LedgerError> {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .transfer_from(owner, amount)
    }

    fn transfer(&mut self, recipient: &Account, amount: Amount) -> Result<(), LedgerError> {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .transfer(recipient, amount)
    }

    fn balance_of(&self, holder: &Account) -> Amount {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .balance_of(holder)
    }

    fn custody_balance(&self) -> Amount {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .custody_balance()
    }
}
