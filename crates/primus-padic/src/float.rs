//! The p-adic floating point numeral.
//!
//! A numeral is the triple `(significand, exponent, prime)` denoting
//! `significand * prime^exponent`, truncated to [`PRECISION`] base-`prime`
//! digits. Three field patterns are reserved as sentinels; they are
//! recognized by exact match, independent of the prime:
//!
//! | sentinel  | exponent            | significand |
//! |-----------|---------------------|-------------|
//! | zero      | `MAX_EXPONENT`      | 0           |
//! | infinity  | `MIN_EXPONENT - 1`  | 1           |
//! | NaN       | `MIN_EXPONENT - 1`  | 0           |
//!
//! Values are immutable: every operation returns a new numeral.

use num_traits::{One, Zero};

use primus_integers::valuation::{prime_power, unit_part};
use primus_integers::{mod_inverse, Integer, Rational};

use crate::error::PadicError;
use crate::params::{MAX_EXPONENT, MIN_EXPONENT, PRECISION};

/// A bounded-precision p-adic floating point number.
///
/// Canonical (normalized) numerals have a significand that is a unit
/// modulo `prime`, i.e. not divisible by it. Freshly constructed or
/// operator-produced numerals may be non-canonical; [`PadicFloat::normalize`]
/// is the only way to canonicalize, and it is idempotent.
#[derive(Clone)]
pub struct PadicFloat {
    pub(crate) prime: u64,
    pub(crate) significand: Integer,
    pub(crate) exponent: i32,
}

impl PadicFloat {
    /// Builds a numeral directly from its parts, unchecked.
    ///
    /// The parts are stored as given; no canonicalization happens. This
    /// is how the sentinel encodings are produced internally.
    #[must_use]
    pub fn from_raw(significand: Integer, exponent: i32, prime: u64) -> Self {
        Self {
            prime,
            significand,
            exponent,
        }
    }

    /// The zero numeral over `prime`.
    #[must_use]
    pub fn zero(prime: u64) -> Self {
        Self::from_raw(Integer::zero(), MAX_EXPONENT, prime)
    }

    /// The infinity numeral over `prime`.
    #[must_use]
    pub fn infinity(prime: u64) -> Self {
        Self::from_raw(Integer::one(), MIN_EXPONENT - 1, prime)
    }

    /// The NaN numeral over `prime`.
    #[must_use]
    pub fn nan(prime: u64) -> Self {
        Self::from_raw(Integer::zero(), MIN_EXPONENT - 1, prime)
    }

    /// Converts an integer exactly.
    ///
    /// The exponent is the p-adic valuation of `n`; the significand is
    /// the unit part reduced modulo `prime^PRECISION`.
    #[must_use]
    pub fn from_integer(n: impl Into<Integer>, prime: u64) -> Self {
        let n = n.into();
        match unit_part(&n, prime) {
            None => Self::zero(prime),
            Some((unit, v)) => {
                let significand = unit.rem_euclid(&prime_power(prime, PRECISION));
                #[allow(clippy::cast_possible_wrap)]
                let exponent = v as i32;
                Self::from_raw(significand, exponent, prime)
            }
        }
    }

    /// Converts a fraction exactly.
    ///
    /// The fraction is reduced by its gcd first, so at most one of the
    /// parts carries a power of `prime`; the exponent is the difference
    /// of the two valuations and the significand is the numerator unit
    /// times the Hensel-lifted inverse of the denominator unit.
    ///
    /// # Errors
    ///
    /// Returns [`PadicError::Value`] for a zero denominator, and
    /// [`PadicError::InvalidInverse`] if the denominator unit is not
    /// invertible (possible only for composite `prime`).
    pub fn from_rational(
        numerator: Integer,
        denominator: Integer,
        prime: u64,
    ) -> Result<Self, PadicError> {
        if denominator.is_zero() {
            return Err(PadicError::Value("denominator is zero".into()));
        }
        if numerator.is_zero() {
            return Ok(Self::zero(prime));
        }

        let g = numerator.gcd(&denominator);
        let numerator = numerator / g.clone();
        let denominator = denominator / g;

        let (unit_num, vn) = match unit_part(&numerator, prime) {
            Some(parts) => parts,
            None => return Ok(Self::zero(prime)),
        };
        let (unit_den, vd) = match unit_part(&denominator, prime) {
            Some(parts) => parts,
            None => return Err(PadicError::Value("denominator is zero".into())),
        };

        let inverse = mod_inverse(&unit_den, prime, PRECISION).ok_or_else(|| {
            PadicError::InvalidInverse {
                value: unit_den,
                prime,
                power: PRECISION,
            }
        })?;

        let significand = (unit_num * inverse).rem_euclid(&prime_power(prime, PRECISION));
        #[allow(clippy::cast_possible_wrap)]
        let exponent = vn as i32 - vd as i32;
        Ok(Self::from_raw(significand, exponent, prime))
    }

    /// Converts a reduced rational exactly.
    ///
    /// # Errors
    ///
    /// Returns [`PadicError::InvalidInverse`] if the denominator unit is
    /// not invertible (possible only for composite `prime`).
    pub fn from_ratio(value: &Rational, prime: u64) -> Result<Self, PadicError> {
        Self::from_rational(value.numerator(), value.denominator(), prime)
    }

    /// The prime base of this numeral's field.
    #[must_use]
    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// The significand, as stored.
    #[must_use]
    pub fn significand(&self) -> &Integer {
        &self.significand
    }

    /// The exponent, as stored.
    #[must_use]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Returns true if this is the zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.exponent == MAX_EXPONENT && self.significand.is_zero()
    }

    /// Returns true if this is the infinity sentinel.
    #[must_use]
    pub fn is_infinity(&self) -> bool {
        self.exponent == MIN_EXPONENT - 1 && self.significand.is_one()
    }

    /// Returns true if this is the NaN sentinel.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.exponent == MIN_EXPONENT - 1 && self.significand.is_zero()
    }

    /// Returns true if this is neither the infinity nor the NaN sentinel.
    ///
    /// Zero counts as finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        !self.is_infinity() && !self.is_nan()
    }

    /// Canonicalizes this numeral.
    ///
    /// Out-of-range exponents clamp to the sentinels: below the range to
    /// NaN or infinity, above it to zero. A zero significand in range is
    /// zero. Otherwise the prime factor of the significand migrates into
    /// the exponent and the significand reduces modulo `prime^PRECISION`,
    /// leaving a unit.
    ///
    /// Idempotent: normalizing a canonical numeral returns it unchanged.
    #[must_use]
    pub fn normalize(&self) -> Self {
        if self.exponent < MIN_EXPONENT {
            if self.significand.is_zero() {
                return Self::nan(self.prime);
            }
            return Self::infinity(self.prime);
        }
        if self.exponent > MAX_EXPONENT || self.significand.is_zero() {
            return Self::zero(self.prime);
        }

        match unit_part(&self.significand, self.prime) {
            Some((unit, v)) => {
                #[allow(clippy::cast_possible_wrap)]
                let exponent = self.exponent + v as i32;
                if exponent > MAX_EXPONENT {
                    return Self::zero(self.prime);
                }
                let significand = unit.rem_euclid(&prime_power(self.prime, PRECISION));
                Self::from_raw(significand, exponent, self.prime)
            }
            None => Self::zero(self.prime),
        }
    }
}

/// Equality under the p-adic metric.
///
/// Both operands are normalized first. NaN is never equal to anything,
/// itself included; otherwise two numerals are equal iff they share the
/// prime, the exponent and the significand.
impl PartialEq for PadicFloat {
    fn eq(&self, other: &Self) -> bool {
        let a = self.normalize();
        let b = other.normalize();
        if a.is_nan() || b.is_nan() {
            return false;
        }
        a.prime == b.prime && a.exponent == b.exponent && a.significand == b.significand
    }
}

impl PartialEq<i64> for PadicFloat {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::from_integer(*other, self.prime)
    }
}
