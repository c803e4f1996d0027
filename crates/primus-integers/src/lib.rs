//! # primus-integers
//!
//! Arbitrary precision integer and rational arithmetic for Primus.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always stored reduced
//! - p-adic valuations and unit-part extraction (`valuation`)
//! - Hensel-lifted modular inverses (`hensel`)
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated with GMP-like performance

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hensel;
pub mod integer;
pub mod rational;
pub mod valuation;

#[cfg(test)]
mod proptests;

pub use hensel::mod_inverse;
pub use integer::Integer;
pub use rational::Rational;
pub use valuation::{prime_power, unit_part, valuation};
