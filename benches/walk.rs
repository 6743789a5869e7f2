//! Walk-generation benchmarks (Criterion).
//!
//! Run: `cargo bench` or `cargo bench --bench walk`.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use orderbook_testdata::{cumulative_walk, generate_walk, sample_steps};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate_walk(c: &mut Criterion) {
    const N: usize = 100_000;
    let mut group = c.benchmark_group("walk");
    group.throughput(Throughput::Elements(N as u64));
    group.bench_function("generate_walk_100k", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(42),
            |mut rng| generate_walk(&mut rng, N, 10, 10_000, 1000).unwrap(),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_cumulative_walk(c: &mut Criterion) {
    const N: usize = 100_000;
    let mut group = c.benchmark_group("walk");
    group.throughput(Throughput::Elements(N as u64));
    group.bench_function("cumulative_walk_100k", |b| {
        b.iter_batched(
            || sample_steps(&mut StdRng::seed_from_u64(7), N),
            |steps| cumulative_walk(steps, 10_000),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_generate_walk, bench_cumulative_walk);
criterion_main!(benches);
