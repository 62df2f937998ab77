//! Micro-benchmarks for the threshold solver's fixed-point iteration.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use peirce_criterion::{peirce_threshold, separate_outliers};

fn bench_threshold(c: &mut Criterion) {
    c.bench_function("threshold_n60_k2", |b| {
        b.iter(|| peirce_threshold(black_box(60), black_box(2), black_box(1)))
    });

    c.bench_function("threshold_n500_k10", |b| {
        b.iter(|| peirce_threshold(black_box(500), black_box(10), black_box(1)))
    });
}

fn bench_partition(c: &mut Criterion) {
    let mut values: Vec<f64> = (0..256).map(|i| (i % 17) as f64).collect();
    values[0] = 1e4;
    values[128] = -1e4;

    c.bench_function("partition_256", |b| {
        b.iter(|| separate_outliers(black_box(&values)))
    });
}

criterion_group!(benches, bench_threshold, bench_partition);
criterion_main!(benches);
