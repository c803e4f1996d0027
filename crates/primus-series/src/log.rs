//! The p-adic logarithm.
//!
//! `plog(x) = Σ_{n≥1} (-1)^(n-1) tⁿ/n` with `t = x - 1`. The series
//! converges exactly when `t` has valuation at least 1, i.e. on
//! `1 + prime·Z_p`.

use num_traits::One;

use primus_integers::valuation::{prime_power, unit_part};
use primus_integers::{mod_inverse, Integer};
use primus_padic::params::{MAX_EXPONENT, PRECISION};
use primus_padic::{PadicError, PadicFloat};

/// Computes the p-adic logarithm of `x`.
///
/// `plog(1)` is zero. Writing `t = u·pʳ` with `u` a unit, the n-th term
/// `±tⁿ/n` is assembled as a normalized product of three factors: the
/// running power `uⁿ` (kept as a bare unit, modulo `prime^PRECISION`),
/// the Hensel inverse of the unit part of `n`, and the scale `p^(n·r - v(n))`
/// that re-inserts the prime power the unit representation drops. Keeping
/// the prime power out of the running factor matters: `tⁿ` itself passes
/// the exponent ceiling long before division by `n` brings the term back
/// under it.
///
/// The loop stops once `n·r - ⌊log_p n⌋`, a monotone lower envelope of
/// the term exponent, passes `MAX_EXPONENT`: every later term underflows
/// to the zero sentinel.
///
/// # Errors
///
/// Returns [`PadicError::Domain`] when `x - 1` has valuation below 1,
/// including infinite and NaN arguments.
pub fn plog(x: &PadicFloat) -> Result<PadicFloat, PadicError> {
    let p = x.prime();
    let t = x.checked_sub(1)?.normalize();

    if t.is_zero() {
        return Ok(PadicFloat::zero(p));
    }
    if !t.is_finite() || t.exponent() < 1 {
        return Err(PadicError::Domain(
            "logarithm only defined on 1 + prime·Z_p".into(),
        ));
    }
    let vt = t.exponent();

    let modulus = prime_power(p, PRECISION);
    let mut sum = PadicFloat::zero(p);
    let mut unit_power = t.significand().clone();
    let mut n = 1i64;

    while projected_exponent(n, vt, p) <= i64::from(MAX_EXPONENT) {
        let (unit, vn) = match unit_part(&Integer::new(n), p) {
            Some(parts) => parts,
            None => break,
        };
        let inverse =
            mod_inverse(&unit, p, PRECISION).ok_or_else(|| PadicError::InvalidInverse {
                value: unit,
                prime: p,
                power: PRECISION,
            })?;
        let reciprocal = PadicFloat::from_raw(inverse, 0, p);

        #[allow(clippy::cast_possible_truncation)]
        let term_exponent = (n * i64::from(vt) - i64::from(vn)) as i32;
        let scale = PadicFloat::from_raw(Integer::one(), term_exponent, p);
        let power = PadicFloat::from_raw(unit_power.clone(), 0, p);

        let mut term = power.checked_mul(reciprocal)?.checked_mul(scale)?.normalize();
        if n % 2 == 0 {
            term = term.negate();
        }
        sum = sum.checked_add(term)?;

        unit_power = (unit_power * t.significand()).rem_euclid(&modulus);
        n += 1;
    }

    Ok(sum.normalize())
}

/// Lower bound `n·v(t) - ⌊log_p n⌋` on the exponent of the n-th term.
///
/// Monotone in `n` for `v(t) ≥ 1`, so once it passes the ceiling no
/// later term can come back under it.
fn projected_exponent(n: i64, vt: i32, p: u64) -> i64 {
    n * i64::from(vt) - i64::from(floor_log(n, p))
}

#[allow(clippy::cast_sign_loss)]
fn floor_log(n: i64, p: u64) -> u32 {
    let mut log = 0;
    let mut m = n as u64;
    while m >= p {
        m /= p;
        log += 1;
    }
    log
}
