//! In-memory fungible-token ledger.

use std::collections::HashMap;

use crate::domain::{Account, Amount, TokenAddress};
use crate::error::LedgerError;
use crate::traits::TokenLedger;

/// Balances and pool allowances for a single asset, held in memory.
///
/// The ledger knows one privileged account, the pool's `custodian`:
/// [`TokenLedger::transfer_from`] moves tokens from an owner into custody
/// and consumes the allowance that owner granted with
/// [`approve`](Self::approve); [`TokenLedger::transfer`] pays out of
/// custody.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Account, Amount, TokenAddress};
/// use simple_swap::ledger::InMemoryLedger;
/// use simple_swap::traits::TokenLedger;
///
/// let pool = Account::from_bytes([0xAA; 32]);
/// let alice = Account::from_bytes([1; 32]);
/// let mut usdc = InMemoryLedger::new(TokenAddress::from_bytes([7; 32]), pool);
///
/// usdc.mint(&alice, Amount::new(500)).expect("mint");
/// usdc.approve(&alice, Amount::new(200));
/// usdc.transfer_from(&alice, Amount::new(200)).expect("authorised");
/// assert_eq!(usdc.balance_of(&pool), Amount::new(200));
/// assert!(usdc.transfer_from(&alice, Amount::new(1)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    token: TokenAddress,
    custodian: Account,
    balances: HashMap<Account, Amount>,
    allowances: HashMap<Account, Amount>,
    total_supply: Amount,
}

impl InMemoryLedger {
    /// Creates an empty ledger for `token` whose pool custody account is
    /// `custodian`.
    #[must_use]
    pub fn new(token: TokenAddress, custodian: Account) -> Self {
        Self {
            token,
            custodian,
            balances: HashMap::new(),
            allowances: HashMap::new(),
            total_supply: Amount::ZERO,
        }
    }

    /// Returns the asset this ledger tracks.
    #[must_use]
    pub const fn token(&self) -> TokenAddress {
        self.token
    }

    /// Returns the pool's custody account.
    #[must_use]
    pub const fn custodian(&self) -> Account {
        self.custodian
    }

    /// Returns the amount ever minted.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Creates `amount` new tokens owned by `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Rejected`] if the supply would overflow.
    pub fn mint(&mut self, to: &Account, amount: Amount) -> Result<(), LedgerError> {
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::Rejected("total supply overflow"))?;
        let balance = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Rejected("balance overflow"))?;
        self.total_supply = supply;
        self.balances.insert(*to, balance);
        Ok(())
    }

    /// Sets how much the custodian may pull from `owner`.
    pub fn approve(&mut self, owner: &Account, amount: Amount) {
        self.allowances.insert(*owner, amount);
    }

    /// Returns how much the custodian may still pull from `owner`.
    pub fn allowance(&self, owner: &Account) -> Amount {
        self.allowances.get(owner).copied().unwrap_or_default()
    }

    fn move_tokens(&mut self, from: &Account, to: &Account, amount: Amount) -> Result<(), LedgerError> {
        let from_balance = self
            .balance_of(from)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or(LedgerError::Rejected("balance overflow"))?;
        self.balances.insert(*from, from_balance);
        self.balances.insert(*to, to_balance);
        Ok(())
    }
}

impl TokenLedger for InMemoryLedger {
    fn transfer_from(&mut self, owner: &Account, amount: Amount) -> Result<(), LedgerError> {
        let remaining = self
            .allowance(owner)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance)?;
        let custodian = self.custodian;
        self.move_tokens(owner, &custodian, amount)?;
        self.allowances.insert(*owner, remaining);
        Ok(())
    }

    fn transfer(&mut self, recipient: &Account, amount: Amount) -> Result<(), LedgerError> {
        let custodian = self.custodian;
        self.move_tokens(&custodian, recipient, amount)
    }

    fn balance_of(&self, holder: &Account) -> Amount {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    fn custody_balance(&self) -> Amount {
        self.balance_of(&self.custodian)
    }
}
