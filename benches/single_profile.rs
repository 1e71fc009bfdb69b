//! Benchmark single-profile and batch estimation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use footprint_estimator::{estimate, estimate_batch, Profile};

fn bench_single_profile(c: &mut Criterion) {
    let profile = Profile::default();

    c.bench_function("estimate_single", |b| {
        b.iter(|| estimate(black_box(&profile)).unwrap())
    });
}

fn bench_batch(c: &mut Criterion) {
    let profiles = vec![Profile::default(); 1024];

    c.bench_function("estimate_batch_1024", |b| {
        b.iter(|| estimate_batch(black_box(&profiles)))
    });
}

criterion_group!(benches, bench_single_profile, bench_batch);
criterion_main!(benches);
