//! Criterion micro-benchmarks for the heap on both storages.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strata_bench::shuffled_range;
use strata_collection::BucketedArray;
use strata_test_utils::fixtures::SEARCH_KEYS;
use strata_tree::{Heap, Node};

/// Benchmark: put 100K distinct keys into a stack-backed heap.
fn bench_put_100k(c: &mut Criterion) {
    let keys = shuffled_range(5, 100_000);
    c.bench_function("heap_put_100k", |b| {
        b.iter(|| {
            let mut heap = Heap::new();
            heap.extend(keys.iter().map(|&k| Node::from(k)));
            black_box(heap.len());
        });
    });
}

/// Benchmark: drain 100K keys through pop_max from an array-backed heap.
fn bench_pop_max_100k(c: &mut Criterion) {
    let keys = shuffled_range(6, 100_000);
    c.bench_function("heap_pop_max_100k", |b| {
        b.iter(|| {
            let mut heap = Heap::from_storage(BucketedArray::from_vec(
                keys.iter().map(|&k| Node::from(k)).collect(),
                0,
            ));
            while let Some(node) = heap.pop_max() {
                black_box(node.key());
            }
        });
    });
}

/// Benchmark: keyed search for present keys.
fn bench_search(c: &mut Criterion) {
    let mut heap = Heap::new();
    heap.extend(shuffled_range(7, 100_000).into_iter().map(|k| Node::new(k as i64, k)));
    heap.extend(SEARCH_KEYS.iter().map(|&k| Node::new(k, 0)));
    c.bench_function("heap_search_fixture_keys", |b| {
        b.iter(|| {
            for key in &SEARCH_KEYS {
                black_box(heap.search(key).map(|n| *n.data()));
            }
        });
    });
}

criterion_group!(benches, bench_put_100k, bench_pop_max_100k, bench_search);
criterion_main!(benches);
