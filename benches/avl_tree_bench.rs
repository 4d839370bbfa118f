//! Benchmark for AvlTree vs standard BTreeMap.
//!
//! Compares insertion, lookup, removal and in-order iteration against
//! Rust's standard BTreeMap.

use bbtree::tree::AvlTree;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

fn build_tree(size: i32) -> AvlTree<i32, i32> {
    let mut tree = AvlTree::new();
    tree.extend((0..size).map(|index| (index, index * 2)));
    tree
}

// Multiplying by a prime coprime to the size visits every key out of order.
fn scrambled(size: i32) -> impl Iterator<Item = i32> {
    (0..size).map(move |index| (index * 7919) % size)
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("AvlTree", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut tree = AvlTree::new();
                for key in scrambled(size) {
                    let _ = tree.insert(black_box(key), black_box(key * 2));
                }
                black_box(tree)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for key in scrambled(size) {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in SIZES {
        let tree = build_tree(size);
        let map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(BenchmarkId::new("AvlTree", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in 0..size {
                    if let Ok(Some(&value)) = tree.get(&black_box(key)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in 0..size {
                    if let Some(&value) = map.get(&black_box(key)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in SIZES {
        let tree = build_tree(size);
        let map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(BenchmarkId::new("AvlTree", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for key in scrambled(size) {
                        let _ = tree.remove(&black_box(key));
                    }
                    tree
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || map.clone(),
                |mut map| {
                    for key in scrambled(size) {
                        map.remove(&black_box(key));
                    }
                    map
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// iter Benchmark
// =============================================================================

fn benchmark_iter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iter");

    for size in SIZES {
        let tree = build_tree(size);
        let map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(BenchmarkId::new("AvlTree", size), &size, |bencher, _| {
            bencher.iter(|| black_box(tree.values().sum::<i32>()));
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, _| {
            bencher.iter(|| black_box(map.values().sum::<i32>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_get,
    benchmark_remove,
    benchmark_iter
);
criterion_main!(benches);
