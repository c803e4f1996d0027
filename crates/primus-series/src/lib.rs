//! # primus-series
//!
//! Truncated power series over the p-adic numerals.
//!
//! This crate provides the two analytic functions of the field:
//! - [`plog`]: the p-adic logarithm, defined on `1 + prime·Z_p`
//! - [`pexp`]: the p-adic exponential, defined on `prime·Z_p`
//!   (`4·Z_2` when the prime is 2)
//!
//! Both accumulate a finite, precision-derived number of terms; a term
//! whose exponent passes the representable ceiling underflows to the
//! zero sentinel in this arithmetic, so the truncation loses nothing
//! the representation could have kept.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod exp;
pub mod log;

pub use exp::pexp;
pub use log::plog;
