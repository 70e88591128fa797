//! Criterion micro-benchmarks for container mutators and access paths.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tessera_bench::{dense, scatter_positions, striped, BenchVec};

/// Benchmark: fill 10K empty positions front to back, with and without
/// cursor hints.
fn bench_sequential_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_set_10k");
    group.bench_function("no_hint", |b| {
        b.iter_batched(
            || BenchVec::with_len(10_000),
            |mut vec| {
                for i in 0..10_000 {
                    let _ = vec.set(i, i as f64);
                }
                vec
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("hint", |b| {
        b.iter_batched(
            || BenchVec::with_len(10_000),
            |mut vec| {
                let mut hint = vec.position(0).map(|p| p.cursor).ok();
                for i in 0..10_000 {
                    hint = match hint {
                        Some(h) => vec.set_with_hint(&h, i, i as f64).ok(),
                        None => vec.set(i, i as f64).ok(),
                    };
                }
                vec
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

/// Benchmark: random reads over a 100K container with 10K blocks.
fn bench_random_get(c: &mut Criterion) {
    let vec = striped(100_000, 10);
    let probes = scatter_positions(vec.len(), 1_000, 7);
    c.bench_function("random_get_striped_100k", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for &pos in &probes {
                if vec.get::<f64>(pos).is_ok() {
                    hits += 1;
                }
            }
            black_box(hits);
        });
    });
}

/// Benchmark: insert then erase one value near the front of a container
/// with 10K blocks, so every call shifts almost every block.
fn bench_insert_erase_front(c: &mut Criterion) {
    let mut vec = striped(100_000, 10);
    c.bench_function("insert_erase_front_striped_100k", |b| {
        b.iter(|| {
            let _ = vec.insert(5, [1.5f32]);
            let _ = vec.erase(5..6);
            black_box(vec.block_count());
        });
    });
}

/// Benchmark: split a dense block in three and merge it back.
fn bench_split_merge(c: &mut Criterion) {
    let mut vec = dense(10_000);
    c.bench_function("split_merge_dense_10k", |b| {
        b.iter(|| {
            let _ = vec.set(5_000, 1i32);
            let _ = vec.set(5_000, 5_000.0f64);
            black_box(vec.block_count());
        });
    });
}

/// Benchmark: move a range out to another container and back.
fn bench_transfer(c: &mut Criterion) {
    let mut src = striped(100_000, 10);
    let mut dest = BenchVec::with_len(1_000);
    c.bench_function("transfer_1k_roundtrip", |b| {
        b.iter(|| {
            let _ = src.transfer(40_000..41_000, &mut dest, 0);
            let _ = dest.transfer(0..1_000, &mut src, 40_000);
            black_box(src.block_count());
        });
    });
}

/// Benchmark: deep copy of a container with 10K blocks.
fn bench_clone(c: &mut Criterion) {
    let vec = striped(100_000, 10);
    c.bench_function("clone_striped_100k", |b| {
        b.iter(|| black_box(vec.clone()));
    });
}

criterion_group!(
    benches,
    bench_sequential_set,
    bench_random_get,
    bench_insert_erase_front,
    bench_split_merge,
    bench_transfer,
    bench_clone
);
criterion_main!(benches);
