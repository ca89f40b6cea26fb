//! Criterion benchmarks for polar fitting and evaluation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use polarfit_core::PolarCoefficients;

fn bench_fits(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");
    group.bench_function("three_points", |b| {
        b.iter(|| {
            PolarCoefficients::from_three_points(
                black_box(22.0),
                black_box(33.0),
                black_box(44.0),
                black_box(-0.62),
                black_box(-0.80),
                black_box(-1.40),
            )
        });
    });
    group.bench_function("two_points_stationary", |b| {
        b.iter(|| {
            PolarCoefficients::from_two_points_with_stationary_point(
                black_box(22.0),
                black_box(40.0),
                black_box(-0.60),
                black_box(-1.35),
            )
        });
    });
    group.bench_function("three_points_singular", |b| {
        b.iter(|| {
            PolarCoefficients::from_three_points(
                black_box(22.0),
                black_box(22.0),
                black_box(44.0),
                black_box(-0.62),
                black_box(-0.80),
                black_box(-1.40),
            )
        });
    });
    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let pc = PolarCoefficients::from_three_points(22.0, 33.0, 44.0, -0.62, -0.80, -1.40);

    let mut group = c.benchmark_group("evaluate");
    group.bench_function("sink_rate_sweep", |b| {
        b.iter(|| {
            let mut total = 0.0;
            let mut v = 15.0;
            while v <= 60.0 {
                total += pc.sink_rate(black_box(v));
                v += 0.5;
            }
            total
        });
    });
    group.bench_function("best_glide", |b| {
        b.iter(|| black_box(pc).best_glide());
    });
    group.finish();
}

criterion_group!(benches, bench_fits, bench_evaluation);
criterion_main!(benches);
