//! Asset identifier.

/// The address of a fungible asset's ledger.
///
/// Thirty-two opaque bytes. The all-zero address is the null asset: it can
/// be constructed but is refused by [`TokenPair::new`](super::TokenPair::new).
///
/// # Examples
///
/// ```
/// use simple_swap::domain::TokenAddress;
///
/// let addr = TokenAddress::from_bytes([1u8; 32]);
/// assert_eq!(addr.as_bytes(), [1u8; 32]);
/// assert!(TokenAddress::zero().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the null address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the null address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_its_bytes() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0xA1;
        let addr = TokenAddress::from_bytes(bytes);
        assert_eq!(addr.as_bytes(), bytes);
        assert!(!addr.is_zero());
    }

    #[test]
    fn null_address() {
        assert!(TokenAddress::zero().is_zero());
        assert_eq!(TokenAddress::zero(), TokenAddress::from_bytes([0u8; 32]));
    }
}
