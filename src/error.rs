//! Unified error types for the SimpleSwap pool.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. The first group of variants are the admission rejections a
//! caller reacts to (re-quote on slippage, abort on deadline, ...); the
//! second group are engine or collaborator faults.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Every way a pool operation can be rejected.
///
/// A rejected operation never leaves the pool partially mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The caller-supplied deadline is already in the past.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// An asset identifier does not belong to the pool's pair.
    #[error("asset not found in pool pair")]
    AssetNotFound,

    /// A strictly positive amount was required.
    #[error("positive amount required")]
    ZeroAmount,

    /// A liquidity amount fell below the caller's minimum bound.
    #[error("insufficient amount")]
    InsufficientAmount,

    /// The caller does not hold enough shares for the withdrawal.
    #[error("insufficient shares")]
    InsufficientShares,

    /// The swap output fell below the caller's minimum bound.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// The pool holds no reserves.
    #[error("pool is empty")]
    EmptyPool,

    /// The deposit is too small to mint a single share.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// Invalid token identity (e.g. a pair of identical addresses).
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An asset ledger refused a transfer.
    #[error("transfer failed: {0}")]
    Transfer(#[from] LedgerError),
}

/// Failure reported by an asset ledger implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The source account does not hold enough tokens.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The owner has not authorised the pool for this amount.
    #[error("insufficient allowance")]
    InsufficientAllowance,

    /// The ledger rejected the transfer for another reason.
    #[error("rejected: {0}")]
    Rejected(&'static str),
}
