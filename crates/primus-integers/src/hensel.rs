//! Hensel-lifted modular inverses.
//!
//! Lifts the inverse of a unit from modulo `p` to modulo `p^k`, one
//! digit of precision per iteration. The base inverse modulo `p` comes
//! from the extended Euclidean algorithm; every lifting step reuses that
//! same first-order correction, so each iteration is a single multiply
//! and reduce.

use num_traits::One;

use crate::valuation::prime_power;
use crate::Integer;

/// Computes `b` with `a * b ≡ 1 (mod p^k)`.
///
/// Returns `None` when `a` is not a unit modulo `p`, i.e. when `p`
/// divides `a` (or, for composite `p`, when `gcd(a, p) != 1`).
///
/// # Panics
///
/// Panics if `k` is zero.
#[must_use]
pub fn mod_inverse(a: &Integer, p: u64, k: u32) -> Option<Integer> {
    assert!(k >= 1, "precision must be at least one digit");

    let c = Integer::from(inverse_mod_prime(a, p)?);
    if k == 1 {
        return Some(c);
    }

    // b is a valid inverse modulo p^(i-1) entering each iteration and
    // modulo p^i leaving it, anchored to the base correction c throughout.
    let one = Integer::one();
    let mut b = c.clone();
    for i in 2..=k {
        let modulus = prime_power(p, i);
        let residual = a * &b - &one;
        b = (&b - &(residual * &c)).rem_euclid(&modulus);
    }

    Some(b)
}

/// Computes `a^-1 mod p` via the extended Euclidean algorithm.
///
/// Returns `None` if `a` and `p` are not coprime.
fn inverse_mod_prime(a: &Integer, p: u64) -> Option<u64> {
    let reduced = a.rem_euclid(&Integer::from(p)).to_u64()?;
    if reduced == 0 {
        return None;
    }

    let mut t = 0i128;
    let mut new_t = 1i128;
    let mut r = i128::from(p);
    let mut new_r = i128::from(reduced);

    while new_r != 0 {
        let quotient = r / new_r;
        (t, new_t) = (new_t, t - quotient * new_t);
        (r, new_r) = (new_r, r - quotient * new_r);
    }

    if r > 1 {
        return None; // Not coprime
    }

    if t < 0 {
        t += i128::from(p);
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let inverse = t as u64;
    Some(inverse)
}
