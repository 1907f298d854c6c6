//! Exact-input swap request.

use super::{Account, Amount, Timestamp, TokenAddress};

/// A request to sell exactly `amount_in` of `path[0]` for `path[1]`.
///
/// The path is always a two-element pair; routing across pools is not
/// modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapExactIn {
    /// Exact amount of the input asset to sell.
    pub amount_in: Amount,
    /// Least amount of the output asset the caller accepts.
    pub amount_out_min: Amount,
    /// `[input asset, output asset]`.
    pub path: [TokenAddress; 2],
    /// Receiver of the output asset.
    pub recipient: Account,
    /// Last instant at which the request may execute.
    pub deadline: Timestamp,
}

impl SwapExactIn {
    /// Returns the asset being sold.
    #[must_use]
    pub const fn token_in(&self) -> TokenAddress {
        self.path[0]
    }

    /// Returns the asset being bought.
    #[must_use]
    pub const fn token_out(&self) -> TokenAddress {
        self.path[1]
    }
}
