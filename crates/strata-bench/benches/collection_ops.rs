//! Criterion micro-benchmarks for the bucketed array and sorting it.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strata_bench::{random_keys, shuffled_range};
use strata_collection::BucketedArray;
use strata_core::CancelToken;
use strata_sort::{sort, SortAdapter};

/// Benchmark: push 100K elements into an empty array.
fn bench_push_100k(c: &mut Criterion) {
    c.bench_function("collection_push_100k", |b| {
        b.iter(|| {
            let mut array = BucketedArray::new(0);
            for n in 0..100_000u64 {
                array.push(n);
            }
            black_box(array.len());
        });
    });
}

/// Benchmark: random reads over a 100K-element array.
fn bench_random_get(c: &mut Criterion) {
    let array: BucketedArray<u64> = (0..100_000).collect();
    let probes = random_keys(1, 10_000, 100_000);
    c.bench_function("collection_random_get_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &i in &probes {
                sum = sum.wrapping_add(*array.get(i as usize).unwrap_or(&0));
            }
            black_box(sum);
        });
    });
}

/// Benchmark: swap-delete from the front until empty.
fn bench_delete_front(c: &mut Criterion) {
    c.bench_function("collection_delete_front_10k", |b| {
        b.iter(|| {
            let mut array: BucketedArray<u64> = (0..10_000).collect();
            while array.delete(0).is_ok() {}
            black_box(array.len());
        });
    });
}

/// Benchmark: callback traversal vs channel traversal of 100K elements.
fn bench_traversal(c: &mut Criterion) {
    let array: BucketedArray<u64> = (0..100_000).collect();
    c.bench_function("collection_each_100k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            array.each(|v| {
                sum = sum.wrapping_add(*v);
                true
            });
            black_box(sum);
        });
    });
    c.bench_function("collection_stream_100k", |b| {
        let token = CancelToken::never();
        b.iter(|| {
            let sum = array.stream(256, &token, |it| it.fold(0u64, |acc, v| acc.wrapping_add(*v)));
            black_box(sum);
        });
    });
}

/// Benchmark: sort a shuffled 100K-element array through the adapter.
fn bench_sort(c: &mut Criterion) {
    let input = shuffled_range(3, 100_000);
    c.bench_function("collection_sort_100k", |b| {
        b.iter(|| {
            let mut array = BucketedArray::from_vec(input.clone(), 0);
            sort(&mut SortAdapter::new(&mut array, |a: &u64, b: &u64| a < b));
            black_box(array.get(0).copied());
        });
    });
}

criterion_group!(
    benches,
    bench_push_100k,
    bench_random_get,
    bench_delete_front,
    bench_traversal,
    bench_sort
);
criterion_main!(benches);
