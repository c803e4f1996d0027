//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::Integer` with
//! the operations needed for p-adic arithmetic: exact division,
//! Euclidean remainders and greatest common divisors.

use dashu::base::{Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig` and provides the operations
/// needed for significand arithmetic and valuation computations.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Computes the greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Computes the quotient and remainder of truncating division.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        let q = &self.0 / &other.0;
        let r = &self.0 % &other.0;
        (Self(q), Self(r))
    }

    /// Computes the least non-negative residue modulo `modulus`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    #[must_use]
    pub fn rem_euclid(&self, modulus: &Self) -> Self {
        let r = &self.0 % &modulus.0;
        if DashuSigned::is_negative(&r) {
            Self(r + &modulus.0)
        } else {
            Self(r)
        }
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` if the value is negative or doesn't fit in a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: Self) -> Self::Output {
        Integer(&self.0 / &rhs.0)
    }
}

impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0 % rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Integer::new(10);
        let b = Integer::new(3);

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(7));
        assert_eq!((a.clone() * b.clone()).to_i64(), Some(30));
        assert_eq!((a.clone() / b.clone()).to_i64(), Some(3));
        assert_eq!((a % b).to_i64(), Some(1));
    }

    #[test]
    fn test_gcd() {
        let a = Integer::new(48);
        let b = Integer::new(18);
        assert_eq!(a.gcd(&b).to_i64(), Some(6));
    }

    #[test]
    fn test_div_rem() {
        let a = Integer::new(-8);
        let b = Integer::new(2);
        let (q, r) = a.div_rem(&b);
        assert_eq!(q.to_i64(), Some(-4));
        assert_eq!(r.to_i64(), Some(0));
    }

    #[test]
    fn test_rem_euclid_negative() {
        let a = Integer::new(-3);
        let m = Integer::new(7);
        assert_eq!(a.rem_euclid(&m).to_i64(), Some(4));
        assert_eq!(Integer::new(10).rem_euclid(&m).to_i64(), Some(3));
    }

    #[test]
    fn test_pow() {
        assert_eq!(Integer::new(2).pow(10).to_i64(), Some(1024));
        assert_eq!(Integer::new(5).pow(0).to_i64(), Some(1));
    }

    #[test]
    fn test_large_pow_roundtrip() {
        let m = Integer::new(2).pow(64);
        assert_eq!(m.to_u64(), None);
        assert_eq!((m - Integer::new(1)).to_u64(), Some(u64::MAX));
    }
}
