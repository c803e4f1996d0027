//! Errors reported by numeral construction and arithmetic.

use primus_integers::Integer;
use thiserror::Error;

/// Errors that can occur while building or combining p-adic numerals.
///
/// Arithmetic overflow and underflow are not errors: they clamp silently
/// to the zero, infinity or NaN sentinels.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PadicError {
    /// A binary operator received numerals over different primes.
    #[error("operands use different primes ({left} and {right})")]
    IncompatibleOperands {
        /// Prime of the left operand.
        left: u64,
        /// Prime of the right operand.
        right: u64,
    },

    /// A modular inverse was requested for a non-unit.
    #[error("{value} is not invertible modulo {prime}^{power}")]
    InvalidInverse {
        /// The non-invertible operand.
        value: Integer,
        /// The prime base of the modulus.
        prime: u64,
        /// The power of the modulus.
        power: u32,
    },

    /// An operand at an arithmetic boundary could not be coerced into a
    /// numeral.
    #[error("cannot convert operand to a p-adic numeral: {0}")]
    TypeConversion(String),

    /// Construction was given malformed arguments.
    #[error("invalid construction: {0}")]
    Value(String),

    /// An analytic function was applied outside its convergence domain.
    #[error("outside the convergence domain: {0}")]
    Domain(String),
}
