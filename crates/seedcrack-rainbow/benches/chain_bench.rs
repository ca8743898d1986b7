//! Chain and lookup benchmarks
//!
//! - Chain walking: single chains and a parallel batch
//! - Lookup: full-table search against an in-memory sorted table

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rayon::prelude::*;

use seedcrack_rainbow::app::lookup::search_table;
use seedcrack_rainbow::domain::chain::{walk_chain, Chain};
use seedcrack_rainbow::domain::hash::reduce;
use seedcrack_rainbow::domain::registry::HashRegistry;
use seedcrack_rainbow::infra::sort::sort_chains;

const CHAIN_LEN: u32 = 200;
const CHAINS_PER_ITER: u32 = 64;

fn bench_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(10))
}

fn bench_reduce(c: &mut Criterion) {
    let digest: Vec<u8> = (0..16).collect();
    c.bench_function("reduce_md5_width", |b| {
        b.iter(|| black_box(reduce(black_box(&digest), black_box(42))))
    });
}

fn bench_chain_walk(c: &mut Criterion) {
    let registry = HashRegistry::builtin();
    let entry = *registry.resolve("wikihash").unwrap();

    let mut group = c.benchmark_group("chain_walk_wikihash");

    group.bench_function("serial_64x200", |b| {
        b.iter(|| {
            for seed in 10_000..10_000 + CHAINS_PER_ITER {
                black_box(walk_chain(seed, CHAIN_LEN, entry.func, entry.digest_len));
            }
        })
    });

    group.bench_function("rayon_64x200", |b| {
        b.iter(|| {
            let ends: Vec<u32> = (10_000..10_000 + CHAINS_PER_ITER)
                .into_par_iter()
                .map(|seed| walk_chain(seed, CHAIN_LEN, entry.func, entry.digest_len))
                .collect();
            black_box(ends)
        })
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let registry = HashRegistry::builtin();
    let entry = *registry.resolve("wikihash").unwrap();

    let mut table: Vec<Chain> = (0..4096u32)
        .map(|s| Chain::new(s, walk_chain(s, CHAIN_LEN, entry.func, entry.digest_len)))
        .collect();
    sort_chains(&mut table);

    let mut buf = [0u8; 64];
    let target = (entry.func)(1234, &mut buf)[..entry.digest_len].to_vec();

    c.bench_function("lookup_4096x200", |b| {
        b.iter(|| {
            black_box(search_table(
                &table,
                CHAIN_LEN,
                entry.func,
                entry.digest_len,
                &target,
            ))
        })
    });
}

criterion_group! {
    name = benches;
    config = bench_criterion();
    targets = bench_reduce, bench_chain_walk, bench_lookup,
}

criterion_main!(benches);
