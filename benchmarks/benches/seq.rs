// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use sliceworks_seq::GrowableSeq;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench seq
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs GrowableSeq
// =============================================================================

fn bench_push_with_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_with_growth");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u8);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("GrowableSeq", size), &size, |b, &s| {
            b.iter(|| {
                let mut seq = GrowableSeq::new();
                for i in 0..s {
                    seq.push(i as u8);
                }
                black_box(seq)
            });
        });
    }

    group.finish();
}

fn bench_extend_within_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("extend_within_capacity");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data: Vec<u8> = (0..size).map(|i| i as u8).collect();

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                vec.extend_from_slice(&data);
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("GrowableSeq", size), &size, |b, &s| {
            let template = GrowableSeq::<u8>::with_capacity(s);
            b.iter(|| {
                let mut seq = template.clone();
                seq.extend_from_slice(&data);
                black_box(&seq);
            });
        });
    }

    group.finish();
}

// =============================================================================
// Shifting operations
// =============================================================================

fn bench_insert_at_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_at_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || {
                    let mut vec = Vec::with_capacity(s + 1);
                    vec.extend((0..s).map(|i| i as u32));
                    vec
                },
                |mut vec| {
                    vec.insert(0, u32::MAX);
                    black_box(vec)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("GrowableSeq", size), &size, |b, &s| {
            b.iter_batched(
                || {
                    let mut seq = GrowableSeq::with_capacity(s + 1);
                    seq.extend_from_slice(&(0..s).map(|i| i as u32).collect::<Vec<_>>());
                    seq
                },
                |mut seq| {
                    seq.insert_at(0, &[u32::MAX]).expect("insert_at failed");
                    black_box(seq)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_filter_in_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_in_place");
    configure_group(&mut group);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data: Vec<u32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Vec::retain", size), &data, |b, d| {
            b.iter_batched(
                || d.clone(),
                |mut vec| {
                    vec.retain(|value| value % 3 != 0);
                    black_box(vec)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("GrowableSeq", size), &data, |b, d| {
            b.iter_batched(
                || GrowableSeq::from(d.clone()),
                |mut seq| {
                    seq.filter_in_place(|value| value % 3 == 0);
                    black_box(seq)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_compact_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("compact_view");
    configure_group(&mut group);

    let store = GrowableSeq::<u8>::create(1 << 20, 1 << 20).expect("create failed");

    for size in [16, 1_024, 65_536] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("GrowableSeq", size), &size, |b, &s| {
            b.iter(|| {
                let mut view = store.view(0, s).expect("view failed");
                view.compact();
                black_box(view)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_with_growth,
    bench_extend_within_capacity,
    bench_insert_at_front,
    bench_filter_in_place,
    bench_compact_view,
);
criterion_main!(benches);
