//! Criterion micro-benchmarks for vector push, pop, access, and reordering.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dynvec_bench::{churn_ops, filled, run_churn};
use dynvec_core::DynamicArray;
use dynvec_ffi::vector::{dynvec_create, dynvec_destroy, dynvec_push_back};

/// Benchmark: 10K appends starting from a single slot, growth factor 0.5.
fn bench_push_10k(c: &mut Criterion) {
    c.bench_function("push_10k_grow_0_5", |b| {
        b.iter(|| black_box(filled(1, 0.5, 10_000)));
    });
}

/// Benchmark: 10K appends into a pre-sized fixed-capacity vector.
fn bench_push_10k_fixed(c: &mut Criterion) {
    c.bench_function("push_10k_fixed", |b| {
        b.iter(|| black_box(filled(10_000, 0.0, 10_000)));
    });
}

/// Benchmark: drain 10K elements with shrinking enabled.
fn bench_pop_drain_10k(c: &mut Criterion) {
    c.bench_function("pop_drain_10k_grow_0_25", |b| {
        b.iter_batched(
            || filled(1, 0.25, 10_000),
            |mut v| {
                while let Ok(x) = v.pop_back() {
                    black_box(x);
                }
                v
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: mixed push/pop churn around the grow/shrink thresholds.
fn bench_churn(c: &mut Criterion) {
    let ops = churn_ops(10_000, 42);
    c.bench_function("churn_10k", |b| {
        b.iter(|| {
            let mut v = DynamicArray::new(4, 0.25).unwrap();
            black_box(run_churn(&mut v, &ops))
        });
    });
}

/// Benchmark: bounds-checked reads over 10K elements.
fn bench_get_10k(c: &mut Criterion) {
    let v = filled(10_000, 0.0, 10_000);
    c.bench_function("get_10k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..v.len() {
                sum += i64::from(v.get(i).unwrap());
            }
            black_box(sum)
        });
    });
}

/// Benchmark: shuffle then sort 10K elements.
fn bench_shuffle_sort_10k(c: &mut Criterion) {
    let mut v = filled(10_000, 0.0, 10_000);
    c.bench_function("shuffle_sort_10k", |b| {
        b.iter(|| {
            v.shuffle();
            v.sort();
            black_box(v.front().unwrap())
        });
    });
}

/// Benchmark: 10K appends through the C ABI, including handle lookup.
fn bench_ffi_push_10k(c: &mut Criterion) {
    c.bench_function("ffi_push_10k", |b| {
        b.iter(|| {
            let mut h = dynvec_create(1, 0.5);
            for x in 0..10_000 {
                black_box(dynvec_push_back(h, x));
            }
            dynvec_destroy(&mut h);
        });
    });
}

criterion_group!(
    benches,
    bench_push_10k,
    bench_push_10k_fixed,
    bench_pop_drain_10k,
    bench_churn,
    bench_get_10k,
    bench_shuffle_sort_10k,
    bench_ffi_push_10k
);
criterion_main!(benches);
