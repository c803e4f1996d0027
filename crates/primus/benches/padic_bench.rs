//! Benchmarks for p-adic numeral arithmetic.
//!
//! Includes:
//! - Field operations (add, mul, div) at the fixed precision
//! - Hensel-lifted modular inversion
//! - The analytic functions plog and pexp

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use primus_integers::{mod_inverse, Integer};
use primus_padic::params::PRECISION;
use primus_padic::PadicFloat;
use primus_series::{pexp, plog};

/// Benchmark the basic field operations.
fn bench_field_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_ops");

    for prime in [2u64, 5, 998_244_353] {
        let a = PadicFloat::from_integer(123_456_789, prime);
        let b = PadicFloat::from_integer(987_654_321, prime);

        group.bench_with_input(BenchmarkId::new("add", prime), &prime, |bencher, _| {
            bencher.iter(|| black_box(a.checked_add(&b).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("mul", prime), &prime, |bencher, _| {
            bencher.iter(|| black_box(a.checked_mul(&b).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("div", prime), &prime, |bencher, _| {
            bencher.iter(|| black_box(a.checked_div(&b).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark the Hensel inverse lift across precisions.
fn bench_hensel_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("hensel_inverse");

    let a = Integer::new(987_654_321);
    for precision in [8u32, 32, PRECISION] {
        group.bench_with_input(
            BenchmarkId::new("lift", precision),
            &precision,
            |bencher, &k| {
                bencher.iter(|| black_box(mod_inverse(&a, 5, k).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark the analytic functions.
fn bench_analytic(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytic");

    for prime in [2u64, 5, 13] {
        let valuation = if prime == 2 { 2 } else { 1 };
        let t = PadicFloat::from_raw(Integer::new(1), valuation, prime);
        let x = t.checked_add(1).unwrap();

        group.bench_with_input(BenchmarkId::new("pexp", prime), &prime, |bencher, _| {
            bencher.iter(|| black_box(pexp(&t).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("plog", prime), &prime, |bencher, _| {
            bencher.iter(|| black_box(plog(&x).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_field_ops,
    bench_hensel_inverse,
    bench_analytic
);
criterion_main!(benches);
