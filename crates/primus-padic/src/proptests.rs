//! Property-based tests for numeral arithmetic.
