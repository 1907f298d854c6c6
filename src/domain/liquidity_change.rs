//! Liquidity deposit and withdrawal requests and their outcomes.
//!
//! Amounts in requests and outcomes follow the order the caller named the
//! assets in (`token_a`, `token_b`), which need not be the pool's order.

use super::{Account, Amount, Shares, Timestamp, TokenAddress};

/// A request to deposit both assets and mint shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidity {
    /// First asset named by the caller.
    pub token_a: TokenAddress,
    /// Second asset named by the caller.
    pub token_b: TokenAddress,
    /// Most of `token_a` the caller is willing to deposit.
    pub amount_a_desired: Amount,
    /// Most of `token_b` the caller is willing to deposit.
    pub amount_b_desired: Amount,
    /// Least of `token_a` the caller accepts depositing.
    pub amount_a_min: Amount,
    /// Least of `token_b` the caller accepts depositing.
    pub amount_b_min: Amount,
    /// Receiver of the minted shares.
    pub recipient: Account,
    /// Last instant at which the request may execute.
    pub deadline: Timestamp,
}

/// Result of a successful [`AddLiquidity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidityOutcome {
    /// Shares credited to the recipient.
    pub minted: Shares,
    /// Amount of `token_a` actually deposited.
    pub amount_a: Amount,
    /// Amount of `token_b` actually deposited.
    pub amount_b: Amount,
}

/// A request to burn shares and withdraw both assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidity {
    /// First asset named by the caller.
    pub token_a: TokenAddress,
    /// Second asset named by the caller.
    pub token_b: TokenAddress,
    /// Shares to burn from the caller's balance.
    pub shares: Shares,
    /// Least of `token_a` the caller accepts receiving.
    pub amount_a_min: Amount,
    /// Least of `token_b` the caller accepts receiving.
    pub amount_b_min: Amount,
    /// Receiver of the withdrawn assets.
    pub recipient: Account,
    /// Last instant at which the request may execute.
    pub deadline: Timestamp,
}

/// Result of a successful [`RemoveLiquidity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidityOutcome {
    /// Amount of `token_a` paid out.
    pub amount_a: Amount,
    /// Amount of `token_b` paid out.
    pub amount_b: Amount,
}
