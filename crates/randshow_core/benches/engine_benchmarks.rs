//! Criterion benchmarks for randshow_core engines and algorithms.
//!
//! Benchmarks cover:
//! - Raw word generation for every engine
//! - Ranged integer and real draws
//! - Fisher-Yates shuffle (1K, 10K, 100K elements)
//! - Reservoir sampling against large populations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use randshow_core::algorithms::{sample_indices, shuffle};
use randshow_core::{Lcg, Pcg32, Pcg64, RandomEngine, SplitMix64, Xoshiro256PlusPlus};

const DRAWS: usize = 10_000;

/// Benchmark raw `next` throughput per engine.
fn bench_raw_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_words");

    group.bench_function("lcg", |b| {
        let mut engine = Lcg::from_seed(42);
        b.iter(|| {
            let mut acc = 0u64;
            for _ in 0..DRAWS {
                acc ^= engine.next();
            }
            black_box(acc)
        });
    });

    group.bench_function("pcg32", |b| {
        let mut engine = Pcg32::from_seed(42);
        b.iter(|| {
            let mut acc = 0u32;
            for _ in 0..DRAWS {
                acc ^= engine.next();
            }
            black_box(acc)
        });
    });

    group.bench_function("pcg64", |b| {
        let mut engine = Pcg64::from_seed_u64(42);
        b.iter(|| {
            let mut acc = 0u64;
            for _ in 0..DRAWS {
                acc ^= engine.next();
            }
            black_box(acc)
        });
    });

    group.bench_function("splitmix64", |b| {
        let mut engine = SplitMix64::from_seed(42);
        b.iter(|| {
            let mut acc = 0u64;
            for _ in 0..DRAWS {
                acc ^= engine.next();
            }
            black_box(acc)
        });
    });

    group.bench_function("xoshiro256pp", |b| {
        let mut engine = Xoshiro256PlusPlus::from_seed(42);
        b.iter(|| {
            let mut acc = 0u64;
            for _ in 0..DRAWS {
                acc ^= engine.next();
            }
            black_box(acc)
        });
    });

    group.finish();
}

/// Benchmark derived draws, where rejection sampling adds overhead.
fn bench_derived_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived_draws");

    // Bounds just above a power of two maximise rejections.
    for bound in [6u64, (1 << 32) + 1, (1 << 63) + 1] {
        group.bench_with_input(BenchmarkId::new("next_below", bound), &bound, |b, &n| {
            let mut engine = Xoshiro256PlusPlus::from_seed(42);
            b.iter(|| {
                let mut acc = 0u64;
                for _ in 0..DRAWS {
                    acc ^= engine.next_below(n);
                }
                black_box(acc)
            });
        });
    }

    group.bench_function("next_real", |b| {
        let mut engine = Xoshiro256PlusPlus::from_seed(42);
        b.iter(|| {
            let mut sum = 0.0;
            for _ in 0..DRAWS {
                sum += engine.next_real();
            }
            black_box(sum)
        });
    });

    group.bench_function("next_u64_narrow_engine", |b| {
        let mut engine = Lcg::from_seed(42);
        b.iter(|| {
            let mut acc = 0u64;
            for _ in 0..DRAWS {
                acc ^= engine.next_u64();
            }
            black_box(acc)
        });
    });

    group.finish();
}

/// Benchmark shuffling with varying slice lengths.
fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    for len in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("fisher_yates", len), &len, |b, &len| {
            let mut engine = Pcg64::from_seed_u64(7);
            let mut data: Vec<u32> = (0..len as u32).collect();
            b.iter(|| {
                shuffle(&mut engine, &mut data);
                black_box(data[0])
            });
        });
    }

    group.finish();
}

/// Benchmark reservoir sampling; cost should grow with `k`, not `n`.
fn bench_reservoir(c: &mut Criterion) {
    let mut group = c.benchmark_group("reservoir");

    for n in [10_000usize, 1_000_000, 100_000_000] {
        group.bench_with_input(BenchmarkId::new("k_100", n), &n, |b, &n| {
            let mut engine = Xoshiro256PlusPlus::from_seed(9);
            b.iter(|| black_box(sample_indices(&mut engine, n, 100)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_raw_words,
    bench_derived_draws,
    bench_shuffle,
    bench_reservoir
);
criterion_main!(benches);
