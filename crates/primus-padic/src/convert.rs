//! Operand coercion at arithmetic boundaries.
//!
//! Every arithmetic operation accepts integers and fractions alongside
//! numerals. The supported source kinds are enumerated by [`Operand`],
//! and [`coerce`] maps an operand to a numeral exactly once at the
//! boundary; there is no fallback for anything else.

use num_traits::Zero;

use primus_integers::{Integer, Rational};

use crate::error::PadicError;
use crate::float::PadicFloat;

/// A source value accepted at an arithmetic boundary.
#[derive(Clone, Debug)]
pub enum Operand {
    /// An already-built numeral, passed through unchanged.
    Numeral(PadicFloat),
    /// An integer, converted exactly.
    Int(Integer),
    /// A fraction given as numerator and denominator, not yet validated.
    Ratio(Integer, Integer),
}

impl From<PadicFloat> for Operand {
    fn from(value: PadicFloat) -> Self {
        Self::Numeral(value)
    }
}

impl From<&PadicFloat> for Operand {
    fn from(value: &PadicFloat) -> Self {
        Self::Numeral(value.clone())
    }
}

impl From<Integer> for Operand {
    fn from(value: Integer) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Int(Integer::new(value))
    }
}

impl From<(Integer, Integer)> for Operand {
    fn from((numerator, denominator): (Integer, Integer)) -> Self {
        Self::Ratio(numerator, denominator)
    }
}

impl From<(i64, i64)> for Operand {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::Ratio(Integer::new(numerator), Integer::new(denominator))
    }
}

impl From<Rational> for Operand {
    fn from(value: Rational) -> Self {
        Self::Ratio(value.numerator(), value.denominator())
    }
}

impl From<&Rational> for Operand {
    fn from(value: &Rational) -> Self {
        Self::Ratio(value.numerator(), value.denominator())
    }
}

/// Coerces an operand into a numeral over `prime`.
///
/// Numerals pass through untouched, carrying their own prime; whether it
/// matches is the operator's concern, not the coercion's.
///
/// # Errors
///
/// Returns [`PadicError::TypeConversion`] when the operand has no value
/// over `prime`, e.g. a ratio with a zero denominator.
pub fn coerce(operand: Operand, prime: u64) -> Result<PadicFloat, PadicError> {
    match operand {
        Operand::Numeral(x) => Ok(x),
        Operand::Int(n) => Ok(PadicFloat::from_integer(n, prime)),
        Operand::Ratio(numerator, denominator) => {
            if denominator.is_zero() {
                return Err(PadicError::TypeConversion(format!(
                    "{numerator}/{denominator} is not a number"
                )));
            }
            PadicFloat::from_rational(numerator, denominator, prime)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_integer() {
        let x = coerce(5i64.into(), 5).unwrap();
        assert_eq!(x, PadicFloat::from_integer(5, 5));

        let y = coerce(Integer::new(125).into(), 5).unwrap();
        assert_eq!(y, PadicFloat::from_integer(125, 5));
    }

    #[test]
    fn test_coerce_integer_pair() {
        let x = coerce((Integer::new(3), Integer::new(4)).into(), 5).unwrap();
        let direct = PadicFloat::from_rational(Integer::new(3), Integer::new(4), 5).unwrap();
        assert_eq!(x, direct);
    }

    #[test]
    fn test_coerce_ratio() {
        let x = coerce((1i64, 3i64).into(), 5).unwrap();
        let direct = PadicFloat::from_rational(Integer::new(1), Integer::new(3), 5).unwrap();
        assert_eq!(x, direct);
    }

    #[test]
    fn test_coerce_rational_type() {
        let r = Rational::from_i64(4, 6);
        let x = coerce(r.into(), 5).unwrap();
        let direct = PadicFloat::from_rational(Integer::new(2), Integer::new(3), 5).unwrap();
        assert_eq!(x, direct);
    }

    #[test]
    fn test_coerce_numeral_keeps_its_prime() {
        let x = PadicFloat::from_integer(3, 7);
        let y = coerce((&x).into(), 5).unwrap();
        assert_eq!(y.prime(), 7);
    }

    #[test]
    fn test_coerce_zero_denominator() {
        let err = coerce((1i64, 0i64).into(), 5).unwrap_err();
        assert!(matches!(err, PadicError::TypeConversion(_)));
    }
}
