//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for one pool: the asset
//! pair it trades. With the `serde` feature it can be loaded from any
//! serde format.

mod pool_config;

pub use pool_config::PoolConfig;
