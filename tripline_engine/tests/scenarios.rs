// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end walkthroughs of the engine: hover round trips, itinerary
//! replacement under a live focus, and the empty-itinerary display.

use tripline_engine::Engine;
use tripline_model::{EventCategory, GeoPoint, Itinerary, ItineraryEvent};
use tripline_nearby::PlaceCategory;
use tripline_scene::MarkerFlags;
use tripline_viewport::{GeoBounds, ViewportPhase};

fn event(id: &str, category: EventCategory, lat: f64, lng: f64) -> ItineraryEvent {
    ItineraryEvent {
        id: id.into(),
        title: id.into(),
        category,
        time: "10:00".into(),
        location: "Somewhere".into(),
        description: String::new(),
        duration: "1 h".into(),
        coordinate: GeoPoint::new(lat, lng),
    }
}

fn paris_trip() -> Itinerary {
    Itinerary {
        destination: "Paris".into(),
        start_date: "2026-11-01".into(),
        end_date: "2026-11-05".into(),
        events: vec![
            event("e1", EventCategory::Food, 48.86, 2.35),
            event("e2", EventCategory::Accommodation, 48.87, 2.36),
        ],
    }
}

#[test]
fn hover_round_trip_over_a_food_stop() {
    let mut engine = Engine::default();
    engine.set_itinerary(paris_trip(), 0.0);

    // First paint is instantaneous, so this is the settled overview.
    let overview = engine.snapshot().region;
    assert!(!engine.is_animating());

    engine.hover("e1", 1.0);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.focused_event_id, Some("e1"));
    assert_eq!(snapshot.recommended_places.len(), 3);
    let origin = GeoPoint::new(48.86, 2.35);
    for place in snapshot.recommended_places {
        assert_eq!(place.category, PlaceCategory::Restaurant);
        // ~1.5 km expressed in degrees at this latitude.
        assert!(place.coordinate.degrees_between(origin) < 0.015);
    }

    engine.unhover(2.0);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.focused_event_id, None);
    assert!(snapshot.recommended_places.is_empty());

    // The viewport heads back to the two-stop overview region.
    assert_eq!(engine.viewport().target_region(), overview);
    engine.advance(5.0);
    assert_eq!(engine.snapshot().region, overview);
}

#[test]
fn empty_itinerary_shows_the_default_region_and_nothing_else() {
    let mut engine = Engine::default();
    engine.set_itinerary(
        Itinerary {
            destination: "Atlantis".into(),
            start_date: "2026-11-01".into(),
            end_date: "2026-11-01".into(),
            events: vec![],
        },
        0.0,
    );

    assert_eq!(engine.snapshot().region.bounds, GeoBounds::WORLD);
    let scene = engine.scene();
    assert!(scene.path.is_empty());
    assert!(scene.markers.is_empty());
}

#[test]
fn replacing_the_itinerary_under_a_live_focus_clears_it() {
    let mut engine = Engine::default();
    engine.set_itinerary(paris_trip(), 0.0);
    engine.hover("e1", 1.0);
    engine.advance(1.2); // mid-flight toward the focused region

    let rome = Itinerary {
        destination: "Rome".into(),
        start_date: "2026-12-01".into(),
        end_date: "2026-12-03".into(),
        events: vec![
            event("r1", EventCategory::Activity, 41.89, 12.48),
            event("r2", EventCategory::Food, 41.90, 12.50),
        ],
    };
    engine.set_itinerary(rome, 1.3);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.focused_event_id, None);
    assert!(snapshot.recommended_places.is_empty());
    assert_eq!(engine.viewport().phase(), ViewportPhase::Overview);
    assert!(engine.is_animating());

    engine.advance(5.0);
    let bounds = engine.snapshot().region.bounds;
    assert!(bounds.contains_strictly(GeoPoint::new(41.89, 12.48)));
    assert!(bounds.contains_strictly(GeoPoint::new(41.90, 12.50)));
}

#[test]
fn a_stale_hover_id_acts_like_an_unhover() {
    let mut engine = Engine::default();
    engine.set_itinerary(paris_trip(), 0.0);
    engine.hover("e1", 1.0);

    // An id from a previous itinerary generation that no longer exists.
    engine.hover("ghost", 1.5);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.focused_event_id, None);
    assert!(snapshot.recommended_places.is_empty());
    assert_eq!(engine.viewport().phase(), ViewportPhase::Overview);
}

#[test]
fn hovering_a_second_stop_retargets_without_returning_to_overview() {
    let mut engine = Engine::default();
    engine.set_itinerary(paris_trip(), 0.0);

    engine.hover("e1", 1.0);
    engine.advance(1.3);
    engine.hover("e2", 1.4);
    assert_eq!(engine.viewport().phase(), ViewportPhase::Focused);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.focused_event_id, Some("e2"));
    // Hotel recommendations now, not the restaurant set from e1.
    assert_eq!(snapshot.recommended_places.len(), 3);
    assert!(
        snapshot
            .recommended_places
            .iter()
            .all(|p| p.category == PlaceCategory::Hotel)
    );

    engine.advance(5.0);
    assert!(
        engine
            .snapshot()
            .region
            .bounds
            .contains_strictly(GeoPoint::new(48.87, 2.36))
    );
}

#[test]
fn scene_highlights_only_the_focused_stop() {
    let mut engine = Engine::default();
    engine.set_itinerary(paris_trip(), 0.0);
    engine.hover("e2", 1.0);

    let scene = engine.scene();
    assert_eq!(scene.path.len(), 2);
    let highlighted: Vec<_> = scene
        .markers
        .iter()
        .filter(|m| m.flags.contains(MarkerFlags::HIGHLIGHTED))
        .collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].id, "e2");
    assert_eq!(scene.markers.last().unwrap().id, "e2");

    engine.unhover(2.0);
    let scene = engine.scene();
    assert!(scene.markers.iter().all(|m| m.flags.is_empty()));
    assert_eq!(scene.markers.len(), 2);
}
