// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tripline_model::{EventCategory, GeoPoint, ItineraryEvent};
use tripline_nearby::derive_recommendations;

fn event(category: EventCategory) -> ItineraryEvent {
    ItineraryEvent {
        id: "evt-bench".into(),
        title: "Bench stop".into(),
        category,
        time: "12:00".into(),
        location: "Somewhere".into(),
        description: String::new(),
        duration: "1 h".into(),
        coordinate: GeoPoint::new(48.8566, 2.3522),
    }
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearby/derive_recommendations");

    // The deriver runs on every hover-enter; cost should be dominated by
    // the handful of id/name allocations, independent of category.
    for (label, category) in [
        ("food", EventCategory::Food),
        ("accommodation", EventCategory::Accommodation),
        ("activity", EventCategory::Activity),
        ("transit", EventCategory::Transit),
    ] {
        let source = event(category);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(label), &source, |b, source| {
            b.iter(|| black_box(derive_recommendations(source)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
