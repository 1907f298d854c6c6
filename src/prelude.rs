//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use simple_swap::prelude::*;
//! ```

pub use crate::domain::{
    Account, AddLiquidity, AddLiquidityOutcome, Amount, Price, RemoveLiquidity,
    RemoveLiquidityOutcome, Rounding, Shares, SwapExactIn, SwapOutcome, Timestamp, TokenAddress,
    TokenPair,
};

pub use crate::traits::{Clock, ManualClock, SystemClock, TokenLedger};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::error::{AmmError, LedgerError, Result};

pub use crate::ledger::InMemoryLedger;

pub use crate::pools::{ConstantProductPool, PoolState};
