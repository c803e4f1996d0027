//! p-adic valuations.
//!
//! The valuation of a nonzero integer `n` at a prime `p` is the exponent
//! of the largest power of `p` dividing `n`. Zero divides by every power
//! of `p`, so its valuation is unbounded; callers clamp it to whatever
//! sentinel their representation uses.

use num_traits::{One, Zero};

use crate::Integer;

/// Computes the p-adic valuation of `n`.
///
/// Returns `None` for `n = 0`, whose valuation is unbounded.
#[must_use]
pub fn valuation(n: &Integer, p: u64) -> Option<u32> {
    unit_part(n, p).map(|(_, v)| v)
}

/// Splits `n` into its unit part and valuation: `n = unit * p^v` with
/// `p` not dividing `unit`.
///
/// Returns `None` for `n = 0`.
#[must_use]
pub fn unit_part(n: &Integer, p: u64) -> Option<(Integer, u32)> {
    if n.is_zero() {
        return None;
    }

    let p = Integer::from(p);
    let mut unit = n.clone();
    let mut v = 0u32;

    loop {
        let (q, r) = unit.div_rem(&p);
        if !r.is_zero() {
            return Some((unit, v));
        }
        unit = q;
        v += 1;
    }
}

/// Computes `p^k` as an [`Integer`].
#[must_use]
pub fn prime_power(p: u64, k: u32) -> Integer {
    if k == 0 {
        return Integer::one();
    }
    Integer::from(p).pow(k)
}
