//! Criterion micro-benchmarks for tagged buffer create, length and free.

use std::hint::black_box;

use bminor_array::TaggedBuffer;
use bminor_test_utils::SAMPLE_COUNTS;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark: create and drop a buffer of each kind across sample counts.
fn bench_create_free(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_free");
    for &n in &SAMPLE_COUNTS {
        group.bench_with_input(BenchmarkId::new("integer", n), &n, |b, &n| {
            b.iter(|| black_box(TaggedBuffer::<i64>::new(black_box(n)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("float", n), &n, |b, &n| {
            b.iter(|| black_box(TaggedBuffer::<f64>::new(black_box(n)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("boolean", n), &n, |b, &n| {
            b.iter(|| black_box(TaggedBuffer::<bool>::new(black_box(n)).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: header length lookup through a raw element pointer.
fn bench_length_of(c: &mut Criterion) {
    let buf = TaggedBuffer::<bool>::new(4096).unwrap();
    let ptr = buf.as_ptr();
    c.bench_function("length_of_boolean", |b| {
        // SAFETY: buf outlives the benchmark closure.
        b.iter(|| black_box(unsafe { TaggedBuffer::length_of(black_box(ptr)) }));
    });
}

/// Benchmark: fill and sum a 10K integer array through the slice view.
fn bench_fill_sum_10k(c: &mut Criterion) {
    let mut buf = TaggedBuffer::<i64>::new(10_000).unwrap();
    c.bench_function("fill_sum_10k", |b| {
        b.iter(|| {
            for (i, v) in buf.iter_mut().enumerate() {
                *v = i as i64;
            }
            black_box(buf.iter().sum::<i64>())
        });
    });
}

criterion_group!(benches, bench_create_free, bench_length_of, bench_fill_sum_10k);
criterion_main!(benches);
