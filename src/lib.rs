//! # SimpleSwap
//!
//! A single-pair constant product pool (`x · y = k`): liquidity providers
//! deposit two assets and receive proportional ownership shares, traders
//! swap one asset for the other, and anyone can read the spot price.
//!
//! The pool keeps its own reserve and share accounting and moves tokens
//! through external asset ledgers ([`TokenLedger`](traits::TokenLedger)).
//! Every operation is atomic: it either completes with all token
//! movements and accounting updates, or is rejected with an
//! [`AmmError`](error::AmmError) and changes nothing.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for value types and [`PoolConfig`](config::PoolConfig) |
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//!
//! use simple_swap::prelude::*;
//!
//! let usdc = TokenAddress::from_bytes([1u8; 32]);
//! let weth = TokenAddress::from_bytes([2u8; 32]);
//! let custody = Account::from_bytes([0xAA; 32]);
//! let alice = Account::from_bytes([7u8; 32]);
//!
//! // 1. Two asset ledgers; alice holds and approves both assets
//! let usdc_ledger = Arc::new(Mutex::new(InMemoryLedger::new(usdc, custody)));
//! let weth_ledger = Arc::new(Mutex::new(InMemoryLedger::new(weth, custody)));
//! for ledger in [&usdc_ledger, &weth_ledger] {
//!     let mut l = ledger.lock().expect("ledger");
//!     l.mint(&alice, Amount::new(1_000_000)).expect("mint");
//!     l.approve(&alice, Amount::new(1_000_000));
//! }
//!
//! // 2. A pool over the pair
//! let pair = TokenPair::new(usdc, weth).expect("distinct tokens");
//! let pool = ConstantProductPool::new(
//!     PoolConfig::new(pair),
//!     Arc::clone(&usdc_ledger),
//!     Arc::clone(&weth_ledger),
//!     ManualClock::new(Timestamp::from_secs(1_000)),
//! )
//! .expect("valid config");
//!
//! // 3. Seed it
//! let deadline = Timestamp::from_secs(2_000);
//! pool.add_liquidity(&alice, &AddLiquidity {
//!     token_a: usdc,
//!     token_b: weth,
//!     amount_a_desired: Amount::new(100_000),
//!     amount_b_desired: Amount::new(400_000),
//!     amount_a_min: Amount::ZERO,
//!     amount_b_min: Amount::ZERO,
//!     recipient: alice,
//!     deadline,
//! })
//! .expect("deposit");
//! assert_eq!(pool.get_price(&usdc, &weth).expect("price").get(), 4 * Price::SCALE);
//!
//! // 4. Swap 1 000 USDC for WETH
//! let out = pool
//!     .swap_exact_tokens_for_tokens(&alice, &SwapExactIn {
//!         amount_in: Amount::new(1_000),
//!         amount_out_min: Amount::new(3_900),
//!         path: [usdc, weth],
//!         recipient: alice,
//!         deadline,
//!     })
//!     .expect("swap");
//! assert_eq!(out.amount_out(), Amount::new(3_960));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  AddLiquidity / RemoveLiquidity / SwapExactIn
//! └──────┬──────┘
//!        │ &ConstantProductPool (Mutex-serialized)
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  deadline, pair, amounts → staged transition
//! └──────┬──────┘
//!        │ Settlement (unwinds on failure)
//!        ▼
//! ┌─────────────┐
//! │  Ledgers     │  TokenLedger per asset, Clock for deadlines
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Price`](domain::Price), request and outcome structs |
//! | [`traits`] | Collaborators: [`TokenLedger`](traits::TokenLedger), [`Clock`](traits::Clock) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig): the traded pair |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) and its [`PoolState`](pools::PoolState) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) reference asset ledger |
//! | [`math`]   | Checked and 256-bit widened integer arithmetic |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
