//! Collaborator abstractions the pool engine is generic over.
//!
//! [`TokenLedger`] is the per-asset transfer surface the pool moves tokens
//! through, and [`Clock`] is the time source for deadline checks.

mod clock;
mod token_ledger;

pub use clock::{Clock, ManualClock, SystemClock};
pub use token_ledger::TokenLedger;
