//! Direction of integer division.

/// Which way a division that leaves a remainder resolves.
///
/// Every quantity the pool pays out (swap output, withdrawal, minted
/// shares, price) uses [`Down`](Rounding::Down), so the remainder stays in
/// the reserves. [`Up`](Rounding::Up) exists for callers computing what
/// they must put in.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Rounding;
/// use simple_swap::math::mul_div;
///
/// assert_eq!(mul_div(7, 1, 2, Rounding::Down), Ok(3));
/// assert_eq!(mul_div(7, 1, 2, Rounding::Up), Ok(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Toward positive infinity.
    Up,
    /// Toward zero.
    #[default]
    Down,
}

impl Rounding {
    /// Returns `true` for [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
