//! Fundamental domain value types used throughout the pool.
//!
//! Newtypes with validated constructors for asset identities, amounts,
//! shares, prices and time, plus the request and outcome structs of the
//! four pool operations.

mod account;
mod amount;
mod liquidity_change;
mod price;
mod rounding;
mod shares;
mod swap_result;
mod swap_spec;
mod timestamp;
mod token_address;
mod token_pair;

pub use account::Account;
pub use amount::Amount;
pub use liquidity_change::{AddLiquidity, AddLiquidityOutcome, RemoveLiquidity, RemoveLiquidityOutcome};
pub use price::Price;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_result::SwapOutcome;
pub use swap_spec::SwapExactIn;
pub use timestamp::Timestamp;
pub use token_address::TokenAddress;
pub use token_pair::{Orientation, TokenPair};
