//! The constant product pool and its state.
//!
//! | Type | Role |
//! |------|------|
//! | [`ConstantProductPool`] | Serialized engine: admission checks, pricing, settlement |
//! | [`PoolState`] | Reserves and share ledger, read through snapshots |
//! | [`ShareLedger`] | Per-holder share balances and total supply |

mod constant_product;
mod settlement;
mod share_ledger;
mod state;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
pub use share_ledger::ShareLedger;
pub use state::PoolState;
