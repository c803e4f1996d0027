//! The p-adic exponential.
//!
//! `pexp(t) = Σ_{n≥0} tⁿ/n!`. Division by `n!` eats `v(n!)` digits of
//! valuation, so convergence needs `v(t) > 1/(p-1)`: valuation at least
//! 2 when the prime is 2, at least 1 otherwise.

use num_traits::One;

use primus_integers::valuation::{prime_power, unit_part};
use primus_integers::{mod_inverse, Integer};
use primus_padic::params::{MAX_EXPONENT, PRECISION};
use primus_padic::{PadicError, PadicFloat};

/// Computes the p-adic exponential of `t`.
///
/// `pexp(0)` is one. Writing `t = u·pʳ` with `u` a unit, the n-th term
/// `tⁿ/n!` is assembled as a normalized product of the running unit
/// power `uⁿ`, the Hensel inverse of the unit part of `n!` (both
/// maintained incrementally modulo `prime^PRECISION`), and the scale
/// `p^(n·r - v(n!))` that re-inserts the prime power the unit
/// representation drops.
///
/// The iteration count is fixed up front from Legendre's bound
/// `v(n!) ≤ (n-1)/(p-1)`: the term exponent grows by at least
/// `r - 1/(p-1)` per step, so every term past the bound underflows. A
/// few of the final iterations are spent on terms that are already zero;
/// the trade buys a closed-form, always-terminating bound.
///
/// # Errors
///
/// Returns [`PadicError::Domain`] when `t` has valuation below 2 for
/// prime 2, below 1 otherwise, or is infinite or NaN.
pub fn pexp(t: &PadicFloat) -> Result<PadicFloat, PadicError> {
    let p = t.prime();
    let t = t.normalize();

    if t.is_zero() {
        return Ok(PadicFloat::from_integer(1, p));
    }
    let required = if p == 2 { 2 } else { 1 };
    if !t.is_finite() || t.exponent() < required {
        return Err(PadicError::Domain(format!(
            "exponential only defined for valuation at least {required}"
        )));
    }
    let vt = t.exponent();

    #[allow(clippy::cast_possible_wrap)]
    let p_minus_one = p as i64 - 1;
    let growth = i64::from(vt) * p_minus_one - 1;
    let steps = i64::from(MAX_EXPONENT) * p_minus_one / growth + 1;

    let modulus = prime_power(p, PRECISION);
    let mut sum = PadicFloat::from_integer(1, p);
    let mut unit_power = t.significand().clone();
    let mut factorial_unit = Integer::one();
    let mut factorial_valuation = 0i64;

    for n in 1..=steps {
        let (unit, vn) = match unit_part(&Integer::new(n), p) {
            Some(parts) => parts,
            None => break,
        };
        factorial_valuation += i64::from(vn);
        factorial_unit = (factorial_unit * unit).rem_euclid(&modulus);

        let inverse = mod_inverse(&factorial_unit, p, PRECISION).ok_or_else(|| {
            PadicError::InvalidInverse {
                value: factorial_unit.clone(),
                prime: p,
                power: PRECISION,
            }
        })?;
        let reciprocal = PadicFloat::from_raw(inverse, 0, p);

        #[allow(clippy::cast_possible_truncation)]
        let term_exponent = (n * i64::from(vt) - factorial_valuation) as i32;
        let scale = PadicFloat::from_raw(Integer::one(), term_exponent, p);
        let power = PadicFloat::from_raw(unit_power.clone(), 0, p);

        let term = power.checked_mul(reciprocal)?.checked_mul(scale)?.normalize();
        sum = sum.checked_add(term)?;

        unit_power = (unit_power * t.significand()).rem_euclid(&modulus);
    }

    Ok(sum.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::plog;

    fn int(n: i64, p: u64) -> PadicFloat {
        PadicFloat::from_integer(n, p)
    }

    #[test]
    fn test_exp_of_zero_is_one() {
        assert_eq!(pexp(&PadicFloat::zero(5)).unwrap(), 1);
    }

    #[test]
    fn test_exp_leading_digits() {
        // exp(5) = 1 + 5 + 25/2 + ... ≡ 1 + 5 (mod 25)
        let result = pexp(&int(5, 5)).unwrap();
        assert_eq!(result.exponent(), 0);
        assert_eq!(result.digits(2), vec![1, 1]);
    }

    #[test]
    fn test_exp_outside_domain() {
        // valuation 0
        assert!(matches!(pexp(&int(3, 5)), Err(PadicError::Domain(_))));
        // valuation 1 is not enough over p = 2
        assert!(matches!(pexp(&int(2, 2)), Err(PadicError::Domain(_))));
        // but valuation 2 is
        assert!(pexp(&int(4, 2)).is_ok());
    }

    #[test]
    fn test_exp_of_sentinels() {
        assert!(matches!(
            pexp(&PadicFloat::infinity(5)),
            Err(PadicError::Domain(_))
        ));
        assert!(matches!(
            pexp(&PadicFloat::nan(5)),
            Err(PadicError::Domain(_))
        ));
    }

    #[test]
    fn test_exp_is_a_homomorphism() {
        // exp(a + b) = exp(a) * exp(b), up to the representable precision
        let a = int(5, 5);
        let b = int(10, 5);
        let joint = pexp(&a.checked_add(&b).unwrap()).unwrap();
        let split = pexp(&a).unwrap().checked_mul(pexp(&b).unwrap()).unwrap();
        assert!(joint.checked_sub(split).unwrap().normalize().is_zero());
    }

    #[test]
    fn test_log_exp_roundtrip() {
        // log(exp(t)) = t, up to the representable precision
        for (n, p) in [(4i64, 2u64), (5, 5), (7, 7), (9, 3)] {
            let t = int(n, p);
            let roundtrip = plog(&pexp(&t).unwrap()).unwrap();
            assert!(
                roundtrip.checked_sub(&t).unwrap().normalize().is_zero(),
                "roundtrip failed for {n} over prime {p}"
            );
        }
    }

    #[test]
    fn test_exp_log_roundtrip() {
        // exp(log(x)) = x, up to the representable precision
        for (n, p) in [(5i64, 2u64), (6, 5), (8, 7)] {
            let x = int(n, p);
            let roundtrip = pexp(&plog(&x).unwrap()).unwrap();
            assert!(
                roundtrip.checked_sub(&x).unwrap().normalize().is_zero(),
                "roundtrip failed for {n} over prime {p}"
            );
        }
    }
}
