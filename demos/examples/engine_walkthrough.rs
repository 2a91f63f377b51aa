// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine basics, headless.
//!
//! Generate a sample itinerary, hover across its stops, and watch the
//! snapshot the view layer would render from: focus, recommendations, and
//! the animated viewport region.
//!
//! Run:
//! - `cargo run -p tripline_demos --example engine_walkthrough`

use tripline_demos::SampleSource;
use tripline_engine::Engine;
use tripline_model::{ItinerarySource, TripRequest};
use tripline_scene::MarkerKind;

fn main() {
    let source = SampleSource;
    let request = TripRequest {
        destination: "Paris".into(),
        start_date: "2026-11-01".into(),
        end_date: "2026-11-02".into(),
    };

    let mut engine = Engine::default();
    let mut clock = 0.0;
    engine
        .apply_generation(source.generate(&request), clock)
        .expect("sample request is valid");

    {
        let snapshot = engine.snapshot();
        println!(
            "Generated {} stops for {}",
            snapshot.ordered_events.len(),
            request.destination
        );
        let region = snapshot.region;
        println!(
            "Overview region: {:?} .. {:?} (zoom {})",
            region.bounds.southwest(),
            region.bounds.northeast(),
            region.zoom
        );
    }

    // Hover each stop in turn, letting the flight finish before reading.
    let ids: Vec<String> = engine
        .snapshot()
        .ordered_events
        .iter()
        .map(|event| event.id.clone())
        .collect();
    for id in &ids {
        clock += 1.0;
        engine.hover(id, clock);
        while engine.advance(clock) {
            clock += 0.1;
        }

        let snapshot = engine.snapshot();
        let title = snapshot
            .ordered_events
            .iter()
            .find(|event| event.id == *id)
            .map_or("?", |event| event.title.as_str());
        println!("\nHover {id} ({title}) -> zoom {}", snapshot.region.zoom);
        for place in snapshot.recommended_places {
            println!(
                "  nearby: {} [{}] {} away, rated {:.1}",
                place.name,
                place.category.label(),
                place.distance_label,
                place.rating
            );
        }
    }

    // Unhover: back to the overview, with the overlay gone.
    clock += 1.0;
    engine.unhover(clock);
    while engine.advance(clock) {
        clock += 0.1;
    }
    let scene = engine.scene();
    let stops = scene
        .markers
        .iter()
        .filter(|marker| matches!(marker.kind, MarkerKind::Stop { .. }))
        .count();
    println!(
        "\nUnhovered: {} stop markers, {} overlay markers, path of {} points, zoom {}",
        stops,
        scene.markers.len() - stops,
        scene.path.len(),
        scene.region.zoom
    );
}
