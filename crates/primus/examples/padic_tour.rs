//! A Tour of p-adic Floating Point
//!
//! Demonstrates construction, non-archimedean arithmetic, sentinel
//! propagation and the analytic functions.
//!
//! Run with: cargo run --example padic_tour

use primus::prelude::*;

// Helper to create numerals
fn int(n: i64, p: u64) -> PadicFloat {
    PadicFloat::from_integer(n, p)
}

fn main() -> Result<(), PadicError> {
    example_1_representation();
    example_2_arithmetic()?;
    example_3_sentinels()?;
    example_4_analytic()?;
    Ok(())
}

/// Example 1: Representation and rendering
fn example_1_representation() {
    println!("Example 1: Representation");
    println!("-------------------------\n");

    // 125 = 5^3, so the significand is 1 and the exponent 3
    let x = int(125, 5);
    println!("125 over Q_5:  {x}  (raw: {x:?})");

    // 1/3 is a 5-adic unit with an infinite repeating expansion
    let third = PadicFloat::from_rational(Integer::new(1), Integer::new(3), 5)
        .expect("3 is a unit mod 5");
    println!("1/3 over Q_5:  {third}\n");
}

/// Example 2: Non-archimedean arithmetic
fn example_2_arithmetic() -> Result<(), PadicError> {
    println!("Example 2: Arithmetic");
    println!("---------------------\n");

    // |6 + 10| < max(|6|, |10|) in Q_2: cancellation raises the exponent
    let sum = int(6, 2).checked_add(int(10, 2))?.normalize();
    println!("6 + 10 over Q_2 = {sum}");
    assert_eq!(sum, int(16, 2));

    // division is exact at full precision
    let q = int(150, 5).checked_div(int(6, 5))?;
    println!("150 / 6 over Q_5 = {q}");
    assert_eq!(q, int(25, 5));

    let inv = int(7, 5).checked_inv()?;
    println!("1/7 over Q_5 = {inv}\n");
    Ok(())
}

/// Example 3: Sentinel propagation
fn example_3_sentinels() -> Result<(), PadicError> {
    println!("Example 3: Sentinels");
    println!("--------------------\n");

    let p = 5;
    println!("3 / 0   = {}", int(3, p).checked_div(PadicFloat::zero(p))?);
    println!("0 / 0   = {}", PadicFloat::zero(p).checked_div(PadicFloat::zero(p))?);
    println!("inf * 0 = {}", PadicFloat::infinity(p).checked_mul(PadicFloat::zero(p))?);
    println!("NaN == NaN is {}\n", PadicFloat::nan(p) == PadicFloat::nan(p));
    Ok(())
}

/// Example 4: Logarithm and exponential
fn example_4_analytic() -> Result<(), PadicError> {
    println!("Example 4: Analytic functions");
    println!("-----------------------------\n");

    let t = int(5, 5);
    let e = pexp(&t)?;
    println!("exp(5) over Q_5 = {e}");

    let back = plog(&e)?;
    println!("log(exp(5))     = {back}");
    assert!(back.checked_sub(&t)?.normalize().is_zero());
    println!("round trip agrees to full representable precision");
    Ok(())
}
