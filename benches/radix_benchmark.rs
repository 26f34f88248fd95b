// ============================================================================
// Radix Number Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - String to digit map across bases
// 2. Addition - Carry chains and borrow chains
// 3. Comparison - Long shared prefixes
// 4. Square Root - Exact vs native extraction
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use radix_number::prelude::*;
use std::hint::black_box;

/// Digits of `len` copies of the largest symbol, e.g. "999.999" in base 10.
fn all_max_digits(len: usize, base: u32) -> String {
    let top = radix_number::numeric::symbol_of((base - 1) as u8).unwrap();
    let digits: String = std::iter::repeat_n(top, len).collect();
    format!("{}.{}", digits, digits)
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for base in [2u32, 10, 16, 34].iter() {
        let text = all_max_digits(256, *base);
        group.bench_with_input(BenchmarkId::new("base", base), &text, |b, text| {
            b.iter(|| black_box(Number::from_str_radix(text, *base).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Addition Benchmarks
// Worst-case propagation: every digit carries or borrows
// ============================================================================

fn benchmark_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    for len in [16usize, 256, 1024].iter() {
        let nines = Number::from_str_radix(&all_max_digits(*len, 10), 10).unwrap();
        let mut ulp = Number::from_int(1, 10).unwrap();
        ulp.shift(-(*len as Position)).unwrap();
        let neg_ulp = ulp.negated();
        let carried = nines.checked_add(&ulp).unwrap();

        group.bench_with_input(BenchmarkId::new("carry_chain", len), &len, |b, _| {
            b.iter(|| black_box(nines.checked_add(&ulp).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("borrow_chain", len), &len, |b, _| {
            b.iter(|| black_box(carried.checked_add(&neg_ulp).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Comparison Benchmarks
// ============================================================================

fn benchmark_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let a = Number::from_str_radix(&all_max_digits(1024, 16), 16).unwrap();
    let b = a.checked_add(&{
        let mut tiny = Number::from_int(1, 16).unwrap();
        tiny.shift(-2048).unwrap();
        tiny
    })
    .unwrap();

    group.bench_function("shared_prefix_1024", |bench| {
        bench.iter(|| black_box(a.compare(&b).unwrap()));
    });

    group.bench_function("negative_zero_eq", |bench| {
        let zero = Number::new(10).unwrap();
        let neg_zero = Number::with_sign(10, Sign::Negative).unwrap();
        bench.iter(|| black_box(zero == neg_zero));
    });

    group.finish();
}

// ============================================================================
// Square Root Benchmarks
// ============================================================================

fn benchmark_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");

    for digits in [8usize, 16, 64].iter() {
        group.bench_with_input(BenchmarkId::new("exact", digits), digits, |b, &digits| {
            b.iter(|| black_box(sqrt_digits(digits, 2, 10).unwrap()));
        });

        // Past ~16 digits the native result is no longer the true root
        group.bench_with_input(BenchmarkId::new("native", digits), digits, |b, &digits| {
            b.iter(|| black_box(sqrt_digits_native(digits, 2.0, 10).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_addition,
    benchmark_comparison,
    benchmark_sqrt,
);
criterion_main!(benches);
