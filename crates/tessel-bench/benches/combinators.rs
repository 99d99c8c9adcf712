//! Criterion micro-benchmarks for combinator evaluation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tessel_bench::{csg_profile, lattice_profile, point_cloud};
use tessel_ops::FieldExt;
use tessel_test_utils::ball;

/// Benchmark: hard vs smooth union of two balls over 10K points.
fn bench_union_10k(c: &mut Criterion) {
    let pts = point_cloud(42, 10_000);
    let a = ball(&[0.0, 0.0, 0.0], 1.0);
    let b = ball(&[1.0, 0.0, 0.0], 1.0);
    let hard = a.union(&[b.clone()], None).unwrap();
    let smooth = a.union(&[b], Some(0.25)).unwrap();

    c.bench_function("union_hard_10k", |bch| {
        bch.iter(|| black_box(hard.evaluate(&pts).unwrap()));
    });
    c.bench_function("union_smooth_10k", |bch| {
        bch.iter(|| black_box(smooth.evaluate(&pts).unwrap()));
    });
}

/// Benchmark: the 20-node CSG profile over 10K points.
fn bench_csg_profile_10k(c: &mut Criterion) {
    let pts = point_cloud(42, 10_000);
    let field = csg_profile().unwrap();

    c.bench_function("csg_profile_10k", |b| {
        b.iter(|| black_box(field.evaluate(&pts).unwrap()));
    });
}

/// Benchmark: repeat cost as padding grows (1, 27 and 125 cells per point).
fn bench_repeat_padding(c: &mut Criterion) {
    let pts = point_cloud(42, 1_000);
    let mut group = c.benchmark_group("repeat_padding_1k");
    for padding in [0u32, 1, 2] {
        let field = lattice_profile(padding).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(padding), &field, |b, f| {
            b.iter(|| black_box(f.evaluate(&pts).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_union_10k,
    bench_csg_profile_10k,
    bench_repeat_padding
);
criterion_main!(benches);
