// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use tripline_model::GeoPoint;
use tripline_viewport::{GeoBounds, ViewportConfig, ViewportController};

fn scatter(len: usize) -> Vec<GeoPoint> {
    // Deterministic pseudo-scatter around central Paris; enough spread to
    // keep the bounds union from degenerating.
    (0..len)
        .map(|i| {
            let i = i as f64;
            GeoPoint::new(48.8 + (i * 0.37).fract() * 0.2, 2.2 + (i * 0.73).fract() * 0.3)
        })
        .collect()
}

fn bench_bounds_from_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/bounds_from_points");

    // Hypothesis: the union fold is linear and stays cheap even for
    // itineraries far larger than any real trip.
    for len in [8usize, 64, 512, 4_096] {
        let points = scatter(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &points, |b, points| {
            b.iter(|| black_box(GeoBounds::from_points(points.iter().copied())));
        });
    }

    group.finish();
}

fn bench_retarget_and_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/retarget_and_advance");

    // One hover transition plus a 60-frame flight, the per-interaction hot
    // path of the engine.
    let points = scatter(16);
    group.bench_function("hover_flight", |b| {
        b.iter_batched(
            || {
                let mut viewport = ViewportController::new(ViewportConfig::default());
                viewport.set_overview(points.iter().copied(), 0.0);
                viewport
            },
            |mut viewport| {
                viewport.focus(points[3], points[4..7].iter().copied(), 1.0);
                let mut now = 1.0;
                while viewport.advance(now) {
                    now += 1.0 / 60.0;
                }
                black_box(viewport.region());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_bounds_from_points, bench_retarget_and_advance);
criterion_main!(benches);
