//! Criterion benchmarks for the search strategies.
//!
//! These run warm-cache, in contrast to the cold-cache CLI sweeps; they are
//! useful for quick relative comparisons of the kernels themselves.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use coldfind::data::ascending;
use coldfind::element::WideKey32;
use coldfind::search::{
    linear_scan, quaternary_lower_bound, std_find, std_lower_bound, vector_scan_u32,
    vector_scan_u64, vector_scan_unrolled_u32,
};

/// Benchmark the linear-scan family on a worst-case (last element) query.
fn bench_linear_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_scan");

    let haystack_u32: Vec<u32> = ascending(4096);
    let haystack_u64: Vec<u64> = ascending(4096);
    let target_u32 = 4095u32;
    let target_u64 = 4095u64;

    group.throughput(Throughput::Elements(4096));

    group.bench_function("std_find_u32", |b| {
        b.iter(|| std_find(black_box(&haystack_u32), black_box(target_u32)))
    });

    group.bench_function("linear_scan_u32", |b| {
        b.iter(|| linear_scan(black_box(&haystack_u32), black_box(target_u32)))
    });

    group.bench_function("vector_scan_u32", |b| {
        b.iter(|| vector_scan_u32(black_box(&haystack_u32), black_box(target_u32)))
    });

    group.bench_function("vector_scan_unrolled_u32", |b| {
        b.iter(|| vector_scan_unrolled_u32(black_box(&haystack_u32), black_box(target_u32)))
    });

    group.bench_function("vector_scan_u64", |b| {
        b.iter(|| vector_scan_u64(black_box(&haystack_u64), black_box(target_u64)))
    });

    group.finish();
}

/// Benchmark the lower-bound family over a cache-resident sorted array.
fn bench_lower_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("lower_bound");

    let haystack: Vec<u64> = ascending(1 << 20);
    let wide_haystack: Vec<WideKey32> = ascending(1 << 18);
    let targets: Vec<u64> = (0..256).map(|i| (i * 4099) % (1 << 20)).collect();

    group.throughput(Throughput::Elements(targets.len() as u64));

    group.bench_function("std_lower_bound", |b| {
        b.iter(|| {
            for &t in &targets {
                black_box(std_lower_bound(black_box(&haystack), t));
            }
        })
    });

    group.bench_function("quaternary_lower_bound", |b| {
        b.iter(|| {
            for &t in &targets {
                black_box(quaternary_lower_bound(black_box(&haystack), t));
            }
        })
    });

    group.bench_function("quaternary_lower_bound_wide32", |b| {
        b.iter(|| {
            for &t in &targets {
                black_box(quaternary_lower_bound(
                    black_box(&wide_haystack),
                    WideKey32::new(t % (1 << 18)),
                ));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_linear_scans, bench_lower_bounds);
criterion_main!(benches);
