//! Benchmarks for rollstats estimators
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use rollstats::buffer::RingBuffer;
use rollstats::statistics::{MovingWindowStats, RunningStats};
use rollstats::traits::Estimator;

// ============================================================================
// Running Stats Benchmarks
// ============================================================================

fn bench_running_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_stats");
    group.throughput(Throughput::Elements(1));

    group.bench_function("update_f64", |b| {
        let mut stats = RunningStats::<f64>::new();
        let mut i = 0u64;
        b.iter(|| {
            stats.update(i as f64);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("update_f32", |b| {
        let mut stats = RunningStats::<f32>::new();
        let mut i = 0u32;
        b.iter(|| {
            stats.update((i % 1024) as f32);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("query_all", |b| {
        let mut stats = RunningStats::<f64>::new();
        for i in 0..100_000u64 {
            stats.update(i as f64);
        }
        b.iter(|| {
            black_box(stats.mean());
            black_box(stats.variance());
            black_box(stats.stddev());
            black_box(stats.min());
            black_box(stats.max());
        });
    });

    group.bench_function("merge", |b| {
        let mut s1 = RunningStats::<f64>::new();
        let mut s2 = RunningStats::<f64>::new();
        for i in 0..10_000u64 {
            s1.update(i as f64);
            s2.update((i + 10_000) as f64);
        }
        b.iter(|| {
            let mut s = s1.clone();
            s.merge(black_box(&s2)).unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Moving Window Benchmarks
// ============================================================================

fn bench_window<const N: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("moving_window_{}", N));
    group.throughput(Throughput::Elements(1));

    group.bench_function("update_sliding", |b| {
        let mut stats = MovingWindowStats::<f64, N>::new();
        for i in 0..N {
            stats.update(i as f64);
        }
        let mut i = 0u64;
        b.iter(|| {
            stats.update(black_box((i % 1000) as f64));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("query_all", |b| {
        let mut stats = MovingWindowStats::<f64, N>::new();
        for i in 0..(2 * N) {
            stats.update(i as f64);
        }
        b.iter(|| {
            black_box(stats.mean());
            black_box(stats.variance());
            black_box(stats.stddev());
        });
    });

    group.finish();
}

fn bench_windows(c: &mut Criterion) {
    bench_window::<8>(c);
    bench_window::<64>(c);
    bench_window::<1024>(c);
}

// ============================================================================
// Ring Buffer Benchmarks
// ============================================================================

fn bench_ring_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_buffer");
    group.throughput(Throughput::Elements(1));

    group.bench_function("read_write", |b| {
        let mut ring = RingBuffer::<f64, 64>::new();
        let mut i = 0u64;
        b.iter(|| {
            black_box(ring.read());
            ring.write(i as f64);
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_running_stats, bench_windows, bench_ring_buffer);

criterion_main!(benches);
