//! Benchmarks for graphkeys encode/parse paths

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphkeys::keys::{count_key, data_key, index_key, parse_key, split_key};

fn encode_benchmarks(c: &mut Criterion) {
    c.bench_function("data_key", |b| {
        b.iter(|| data_key(black_box("friend.of"), black_box(0xDEAD_BEEF)))
    });

    c.bench_function("index_key", |b| {
        b.iter(|| index_key(black_box("name"), black_box(b"\x01alice")))
    });

    let base = data_key("friend.of", 42);
    c.bench_function("split_key", |b| {
        b.iter(|| split_key(black_box(&base), black_box(1_000)))
    });
}

fn parse_benchmarks(c: &mut Criterion) {
    let data = data_key("friend.of", 42);
    let count = count_key("friend.of", 17, true);
    let split = split_key(&index_key("name", "alice"), 9_000).unwrap();

    c.bench_function("parse_data_key", |b| b.iter(|| parse_key(black_box(&data))));
    c.bench_function("parse_count_key", |b| b.iter(|| parse_key(black_box(&count))));
    c.bench_function("parse_split_index_key", |b| {
        b.iter(|| parse_key(black_box(&split)))
    });
}

criterion_group!(benches, encode_benchmarks, parse_benchmarks);
criterion_main!(benches);
