//! Reference asset ledger.
//!
//! The real asset ledgers are external collaborators; [`InMemoryLedger`]
//! is a standard-token stand-in used by tests, demos and simulations.

mod memory;

pub use memory::InMemoryLedger;
