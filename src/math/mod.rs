//! Arithmetic utilities for pool calculations.
//!
//! All pool math is integer math. Products of two `u128` quantities are
//! widened to 256 bits ([`mul_div`], [`isqrt_product`]); sums and
//! differences go through [`CheckedArithmetic`].

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{isqrt_product, mul_div};
