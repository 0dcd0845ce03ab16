//! Criterion benchmarks for submask enumeration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hd_math::Subsets;

fn bench_subsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("subsets");

    for bits in [8u32, 12, 16] {
        let universe = (1u32 << bits) - 1;
        group.bench_with_input(BenchmarkId::new("enumerate", bits), &universe, |b, &u| {
            b.iter(|| {
                let mut acc = 0u64;
                for s in Subsets::of(black_box(u)) {
                    acc = acc.wrapping_add(s as u64);
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_subsets);
criterion_main!(benches);
