//! Criterion micro-benchmarks for map insert, lookup, delete, and traversal.

use std::hint::black_box;

use array_string_map::ArrayStringMap;
use array_string_map_bench::{coord_keys, grid_keys, populated_map};
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: build a 10K-entry map from `Vec<i32>` keys.
fn bench_set_10k(c: &mut Criterion) {
    let keys = grid_keys(100);
    c.bench_function("set_10k", |b| {
        b.iter(|| {
            let mut map = ArrayStringMap::new();
            for (index, key) in keys.iter().enumerate() {
                map.set(key.clone(), index);
            }
            black_box(map.size());
        });
    });
}

/// Benchmark: build a 10K-entry map from inline `SmallVec` keys.
fn bench_set_10k_smallvec(c: &mut Criterion) {
    let keys = coord_keys(100);
    c.bench_function("set_10k_smallvec", |b| {
        b.iter(|| {
            let mut map = ArrayStringMap::new();
            for (index, key) in keys.iter().enumerate() {
                map.set(key.clone(), index);
            }
            black_box(map.size());
        });
    });
}

/// Benchmark: look up every key of a 10K-entry map through a fresh array.
fn bench_get_10k(c: &mut Criterion) {
    let map = populated_map(100);
    c.bench_function("get_10k", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for y in 0..100 {
                for x in 0..100 {
                    total += map.get(&[x, y]).copied().unwrap_or(0);
                }
            }
            black_box(total);
        });
    });
}

/// Benchmark: delete from the front of a 1K-entry map (worst case for shifting).
fn bench_delete_front_1k(c: &mut Criterion) {
    let keys = grid_keys(32);
    c.bench_function("delete_front_1k", |b| {
        b.iter_batched(
            || populated_map(32),
            |mut map| {
                for key in &keys {
                    black_box(map.delete(key));
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: full traversal of a 10K-entry map.
fn bench_entries_10k(c: &mut Criterion) {
    let map = populated_map(100);
    c.bench_function("entries_10k", |b| {
        b.iter(|| {
            let sum: usize = map.entries().map(|(key, value)| key[0] as usize + value).sum();
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_set_10k,
    bench_set_10k_smallvec,
    bench_get_10k,
    bench_delete_front_1k,
    bench_entries_10k
);
criterion_main!(benches);
