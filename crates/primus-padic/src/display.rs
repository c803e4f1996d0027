//! Digit rendering for numerals.
//!
//! A finite numeral prints its first [`DISPLAY_DIGITS`] base-`prime`
//! digits, least significant first, followed by the prime-power scale:
//! `(1 0 0 0 0 0 0 0 0 0)5**3`. The sentinels print as `0`, `NaN` and
//! `∞` (`inf` with the `#` alternate flag).

use std::fmt;

use num_traits::Zero;

use primus_integers::Integer;

use crate::float::PadicFloat;
use crate::params::DISPLAY_DIGITS;

impl PadicFloat {
    /// Extracts the first `count` base-`prime` digits of the significand,
    /// least significant first.
    ///
    /// Digits are meaningful on normalized numerals; a non-canonical
    /// significand is read off as stored.
    #[must_use]
    pub fn digits(&self, count: usize) -> Vec<u64> {
        let mut out = vec![0u64; count];
        let mut n = self.significand.clone();
        let p = Integer::from(self.prime);

        for slot in &mut out {
            if n.is_zero() {
                break;
            }
            let (q, r) = n.div_rem(&p);
            // r < prime, so it always fits
            *slot = r.to_u64().unwrap_or(0);
            n = q;
        }
        out
    }
}

impl fmt::Display for PadicFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.is_nan() {
            return write!(f, "NaN");
        }
        if self.is_infinity() {
            return if f.alternate() {
                write!(f, "inf")
            } else {
                write!(f, "∞")
            };
        }

        let digits = self
            .digits(DISPLAY_DIGITS)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "({digits}){}**{}", self.prime, self.exponent)
    }
}

impl fmt::Debug for PadicFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})_{}", self.exponent, self.significand, self.prime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_finite() {
        let x = PadicFloat::from_integer(125, 5);
        assert_eq!(x.to_string(), "(1 0 0 0 0 0 0 0 0 0)5**3");
    }

    #[test]
    fn test_render_digit_order() {
        // 11 = 1101 in binary, least significant digit first
        let x = PadicFloat::from_integer(11, 2);
        assert_eq!(x.to_string(), "(1 1 0 1 0 0 0 0 0 0)2**0");
    }

    #[test]
    fn test_render_sentinels() {
        assert_eq!(PadicFloat::zero(5).to_string(), "0");
        assert_eq!(PadicFloat::nan(5).to_string(), "NaN");
        assert_eq!(PadicFloat::infinity(5).to_string(), "∞");
        assert_eq!(format!("{:#}", PadicFloat::infinity(5)), "inf");
    }

    #[test]
    fn test_debug_shows_raw_triple() {
        let x = PadicFloat::from_integer(125, 5);
        assert_eq!(format!("{x:?}"), "(3, 1)_5");
    }

    #[test]
    fn test_digits_of_unit() {
        let x = PadicFloat::from_integer(7, 5);
        assert_eq!(x.digits(4), vec![2, 1, 0, 0]);
    }
}
