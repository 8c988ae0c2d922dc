//! Benchmarks for exact exponentiation and reduction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use quotient::prelude::*;

/// A rational whose powers do not hit any constant-time fast path.
fn sample_rational() -> Rational {
    Rational::from_i64(-7, 3).expect("non-zero denominator")
}

fn sample_complex() -> ComplexRational {
    ComplexRational::new(
        Rational::from_i64(2, 3).expect("non-zero denominator"),
        Rational::from_i64(-5, 7).expect("non-zero denominator"),
    )
}

fn bench_rational_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("rational_pow");
    let x = sample_rational();

    for exponent in [16i64, 128, 1024, 8192] {
        group.bench_with_input(
            BenchmarkId::new("squaring", exponent),
            &exponent,
            |b, &e| b.iter(|| black_box(x.powi(e))),
        );
    }

    group.finish();
}

fn bench_complex_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("complex_rational_pow");
    let z = sample_complex();
    let i = ComplexRational::i();

    for exponent in [16i64, 128, 1024] {
        group.bench_with_input(
            BenchmarkId::new("squaring", exponent),
            &exponent,
            |b, &e| b.iter(|| black_box(z.powi(e))),
        );
        group.bench_with_input(
            BenchmarkId::new("imaginary_unit", exponent),
            &exponent,
            |b, &e| b.iter(|| black_box(i.powi(e))),
        );
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    group.sample_size(50);

    // Repeated addition grows an unreduced common factor.
    let step = Rational::from_i64(1, 6).expect("non-zero denominator");
    for terms in [8usize, 32, 128] {
        let mut sum = Rational::zero();
        for _ in 0..terms {
            sum = &sum + &step;
        }

        group.bench_with_input(BenchmarkId::new("sum_of_sixths", terms), &sum, |b, s| {
            b.iter(|| black_box(s.reduce()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rational_pow, bench_complex_pow, bench_reduce);

criterion_main!(benches);
