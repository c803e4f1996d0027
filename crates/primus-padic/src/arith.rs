//! Arithmetic over p-adic numerals.
//!
//! Every binary operation coerces its right operand, rejects mismatched
//! primes, normalizes both sides and then dispatches on the sentinel
//! states before touching the finite path. Overflow past either end of
//! the exponent range clamps silently: beyond `MAX_EXPONENT` to zero,
//! below `MIN_EXPONENT` to infinity.
//!
//! The checked methods are the primary surface; the `std::ops` impls are
//! sugar over them and panic on mismatched primes, the way mixing primes
//! in an expression is a programming error rather than a data error.

use std::ops::{Add, Div, Mul, Neg, Sub};

use primus_integers::valuation::{prime_power, valuation};
use primus_integers::mod_inverse;

use crate::convert::{coerce, Operand};
use crate::error::PadicError;
use crate::float::PadicFloat;
use crate::params::{MAX_EXPONENT, MIN_EXPONENT, PRECISION};

impl PadicFloat {
    /// Coerces `rhs`, checks the primes agree and normalizes both sides.
    fn prepare(&self, rhs: Operand) -> Result<(Self, Self), PadicError> {
        let rhs = coerce(rhs, self.prime)?;
        if self.prime != rhs.prime {
            return Err(PadicError::IncompatibleOperands {
                left: self.prime,
                right: rhs.prime,
            });
        }
        Ok((self.normalize(), rhs.normalize()))
    }

    /// Adds two numerals under the non-archimedean metric.
    ///
    /// With equal exponents the significands add directly and any
    /// cancellation migrates into the exponent; with unequal exponents
    /// the result keeps the smaller exponent and the other significand
    /// is scaled up by the prime power of the gap.
    ///
    /// NaN propagates; any infinite operand gives infinity.
    ///
    /// # Errors
    ///
    /// Returns [`PadicError::IncompatibleOperands`] on mismatched primes
    /// and [`PadicError::TypeConversion`] if `rhs` cannot be coerced.
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> Result<Self, PadicError> {
        let (a, b) = self.prepare(rhs.into())?;

        if a.is_nan() || b.is_nan() {
            return Ok(Self::nan(self.prime));
        }
        if a.is_infinity() || b.is_infinity() {
            return Ok(Self::infinity(self.prime));
        }

        if a.exponent == b.exponent {
            let sum = &a.significand + &b.significand;
            return Ok(match valuation(&sum, self.prime) {
                None => Self::zero(self.prime),
                #[allow(clippy::cast_possible_wrap)]
                Some(v) if v as i32 > MAX_EXPONENT - a.exponent => Self::zero(self.prime),
                Some(v) => {
                    let significand = &sum / &prime_power(self.prime, v);
                    #[allow(clippy::cast_possible_wrap)]
                    let exponent = a.exponent + v as i32;
                    Self::from_raw(significand, exponent, self.prime)
                }
            });
        }

        let (lo, hi) = if a.exponent < b.exponent {
            (a, b)
        } else {
            (b, a)
        };
        #[allow(clippy::cast_sign_loss)]
        let gap = (hi.exponent - lo.exponent) as u32;
        let scaled = &hi.significand * &prime_power(self.prime, gap);
        let significand = &lo.significand + &scaled;
        Ok(Self::from_raw(significand, lo.exponent, self.prime))
    }

    /// Subtracts `rhs`, as `self + (-rhs)`.
    ///
    /// # Errors
    ///
    /// Returns [`PadicError::IncompatibleOperands`] on mismatched primes
    /// and [`PadicError::TypeConversion`] if `rhs` cannot be coerced.
    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> Result<Self, PadicError> {
        let rhs = coerce(rhs.into(), self.prime)?;
        let negated = rhs.checked_mul(-1)?;
        self.checked_add(negated)
    }

    /// Multiplies two numerals.
    ///
    /// NaN propagates; infinity times zero is NaN; any other infinite
    /// operand gives infinity. An exponent sum past `MAX_EXPONENT`
    /// underflows to zero.
    ///
    /// # Errors
    ///
    /// Returns [`PadicError::IncompatibleOperands`] on mismatched primes
    /// and [`PadicError::TypeConversion`] if `rhs` cannot be coerced.
    pub fn checked_mul(&self, rhs: impl Into<Operand>) -> Result<Self, PadicError> {
        let (a, b) = self.prepare(rhs.into())?;

        if a.is_nan() || b.is_nan() {
            return Ok(Self::nan(self.prime));
        }
        if a.is_infinity() || b.is_infinity() {
            if a.is_zero() || b.is_zero() {
                return Ok(Self::nan(self.prime));
            }
            return Ok(Self::infinity(self.prime));
        }

        let exponent = a.exponent + b.exponent;
        if exponent > MAX_EXPONENT {
            return Ok(Self::zero(self.prime));
        }
        let product = &a.significand * &b.significand;
        let significand = product.rem_euclid(&prime_power(self.prime, PRECISION));
        Ok(Self::from_raw(significand, exponent, self.prime))
    }

    /// Divides by `rhs`.
    ///
    /// NaN propagates; `0/0` and `∞/∞` are NaN; division by zero gives
    /// infinity; an infinite dividend over a finite divisor gives
    /// infinity; a finite dividend over infinity gives zero. An exponent
    /// difference below `MIN_EXPONENT` overflows to infinity. Otherwise
    /// the divisor's significand is inverted by Hensel lifting.
    ///
    /// # Errors
    ///
    /// Returns [`PadicError::IncompatibleOperands`] on mismatched primes,
    /// [`PadicError::TypeConversion`] if `rhs` cannot be coerced, and
    /// [`PadicError::InvalidInverse`] if the divisor's significand is not
    /// a unit (possible only for composite primes).
    pub fn checked_div(&self, rhs: impl Into<Operand>) -> Result<Self, PadicError> {
        let (a, b) = self.prepare(rhs.into())?;

        if a.is_nan() || b.is_nan() {
            return Ok(Self::nan(self.prime));
        }
        if b.is_zero() {
            if a.is_zero() {
                return Ok(Self::nan(self.prime));
            }
            return Ok(Self::infinity(self.prime));
        }
        if a.is_infinity() {
            if b.is_infinity() {
                return Ok(Self::nan(self.prime));
            }
            return Ok(Self::infinity(self.prime));
        }
        if b.is_infinity() {
            return Ok(Self::zero(self.prime));
        }

        let exponent = a.exponent - b.exponent;
        if exponent < MIN_EXPONENT {
            return Ok(Self::infinity(self.prime));
        }
        let inverse = mod_inverse(&b.significand, self.prime, PRECISION).ok_or_else(|| {
            PadicError::InvalidInverse {
                value: b.significand.clone(),
                prime: self.prime,
                power: PRECISION,
            }
        })?;
        let significand =
            (&a.significand * &inverse).rem_euclid(&prime_power(self.prime, PRECISION));
        Ok(Self::from_raw(significand, exponent, self.prime))
    }

    /// Negates this numeral, as `self * (-1)`.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.checked_mul(-1)
            .expect("negation stays within one prime")
    }

    /// Inverts this numeral, as `1 / self`.
    ///
    /// Zero inverts to infinity and infinity to zero; NaN propagates.
    ///
    /// # Errors
    ///
    /// Returns [`PadicError::InvalidInverse`] if the significand is not a
    /// unit (possible only for composite primes).
    pub fn checked_inv(&self) -> Result<Self, PadicError> {
        Self::from_integer(1, self.prime).checked_div(self)
    }
}

impl Add for &PadicFloat {
    type Output = PadicFloat;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
            .expect("operands use different primes")
    }
}

impl Add for PadicFloat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<i64> for &PadicFloat {
    type Output = PadicFloat;

    fn add(self, rhs: i64) -> Self::Output {
        self.checked_add(rhs)
            .expect("coercing an integer cannot fail")
    }
}

impl Sub for &PadicFloat {
    type Output = PadicFloat;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .expect("operands use different primes")
    }
}

impl Sub for PadicFloat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<i64> for &PadicFloat {
    type Output = PadicFloat;

    fn sub(self, rhs: i64) -> Self::Output {
        self.checked_sub(rhs)
            .expect("coercing an integer cannot fail")
    }
}

impl Mul for &PadicFloat {
    type Output = PadicFloat;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .expect("operands use different primes")
    }
}

impl Mul for PadicFloat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<i64> for &PadicFloat {
    type Output = PadicFloat;

    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs)
            .expect("coercing an integer cannot fail")
    }
}

impl Div for &PadicFloat {
    type Output = PadicFloat;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
            .expect("operands use different primes")
    }
}

impl Div for PadicFloat {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<i64> for &PadicFloat {
    type Output = PadicFloat;

    fn div(self, rhs: i64) -> Self::Output {
        self.checked_div(rhs)
            .expect("coercing an integer cannot fail")
    }
}

impl Neg for &PadicFloat {
    type Output = PadicFloat;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for PadicFloat {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
