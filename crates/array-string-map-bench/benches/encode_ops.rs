//! Criterion micro-benchmarks for key encoding and the collision check.

use std::hint::black_box;

use array_string_map::{check_elements, encode_elements, MapConfig};
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: encode a short numeric key with the default separator.
fn bench_encode_short(c: &mut Criterion) {
    let key = [17, 42];
    c.bench_function("encode_short", |b| {
        b.iter(|| black_box(encode_elements(black_box(&key), MapConfig::DEFAULT_SEPARATOR)));
    });
}

/// Benchmark: encode a 64-element string key.
fn bench_encode_long(c: &mut Criterion) {
    let key: Vec<String> = (0..64).map(|i| format!("segment-{i}")).collect();
    c.bench_function("encode_long", |b| {
        b.iter(|| black_box(encode_elements(black_box(&key), "/")));
    });
}

/// Benchmark: collision check on the same 64-element key with a two-byte separator.
fn bench_check_long(c: &mut Criterion) {
    let key: Vec<String> = (0..64).map(|i| format!("segment-{i}")).collect();
    c.bench_function("check_long", |b| {
        b.iter(|| black_box(check_elements(black_box(&key), "::")));
    });
}

criterion_group!(benches, bench_encode_short, bench_encode_long, bench_check_long);
criterion_main!(benches);
