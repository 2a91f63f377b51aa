// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tripline_scene --heading-base-level=0

//! Tripline Scene: project engine state into renderable primitives.
//!
//! [`project`] is a pure derivation, recomputed each render, from
//! {event store, focus, recommendations, viewport region} to a [`Scene`]:
//! - a polyline path through the event coordinates in itinerary order
//!   (present only when there are at least two events),
//! - one [`Marker`] per itinerary event, the focused one flagged
//!   [`MarkerFlags::HIGHLIGHTED`] and emitted last so it paints above its
//!   siblings,
//! - one marker per nearby place, styled by its category; these exist only
//!   while an event is focused.
//!
//! The projector introduces no state of its own and never mutates its
//! inputs; rendering backends consume the scene and draw it however they
//! like (the markers carry popup strings, not icons or CSS).
//!
//! ## Minimal example
//!
//! ```rust
//! use tripline_model::{EventCategory, EventStore, GeoPoint, Itinerary, ItineraryEvent};
//! use tripline_scene::project;
//! use tripline_viewport::{GeoBounds, ViewportRegion};
//!
//! let store = EventStore::from_itinerary(Itinerary {
//!     destination: "Paris".into(),
//!     start_date: "2026-11-01".into(),
//!     end_date: "2026-11-02".into(),
//!     events: vec![ItineraryEvent {
//!         id: "evt-1".into(),
//!         title: "Louvre".into(),
//!         category: EventCategory::Activity,
//!         time: "10:00".into(),
//!         location: "1st arrondissement".into(),
//!         description: String::new(),
//!         duration: "3 h".into(),
//!         coordinate: GeoPoint::new(48.8606, 2.3376),
//!     }],
//! });
//! let region = ViewportRegion::from_bounds(GeoBounds::WORLD, 2.0, 18.0);
//!
//! let scene = project(&store, None, &[], region);
//! assert!(scene.path.is_empty()); // a single stop draws no path
//! assert_eq!(scene.markers.len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use tripline_model::{EventStore, GeoPoint, ItineraryEvent};
use tripline_nearby::{NearbyPlace, PlaceCategory};
use tripline_viewport::ViewportRegion;

bitflags::bitflags! {
    /// Render emphasis flags for a marker.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MarkerFlags: u8 {
        /// Marker renders in the visually distinct highlighted variant.
        const HIGHLIGHTED = 0b0000_0001;
        /// Marker paints above sibling markers in draw order.
        const ELEVATED    = 0b0000_0010;
    }
}

/// What a marker represents, which selects its icon style.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    /// An itinerary stop, numbered by its 1-based position in the trip.
    Stop {
        /// 1-based position in the itinerary's chronological order.
        sequence: usize,
    },
    /// A nearby recommendation, styled by its place category.
    Nearby(PlaceCategory),
}

/// One renderable map marker.
///
/// The `title`/`subtitle` pair is the popup content: title and time for a
/// stop, name and rating/distance for a nearby place.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Event or place id this marker stands for.
    pub id: String,
    /// Where the marker sits.
    pub position: GeoPoint,
    /// Icon selection.
    pub kind: MarkerKind,
    /// Emphasis flags; highlighted implies the focused event.
    pub flags: MarkerFlags,
    /// Popup headline.
    pub title: String,
    /// Popup detail line.
    pub subtitle: String,
}

/// A fully derived frame: path, markers in draw order, and the region.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Polyline through the event coordinates in itinerary order.
    ///
    /// Empty unless the itinerary has at least two events.
    pub path: Vec<GeoPoint>,
    /// Markers in draw order; later entries paint above earlier ones.
    pub markers: Vec<Marker>,
    /// The viewport region this frame was projected for.
    pub region: ViewportRegion,
}

fn stop_marker(event: &ItineraryEvent, sequence: usize, flags: MarkerFlags) -> Marker {
    Marker {
        id: event.id.clone(),
        position: event.coordinate,
        kind: MarkerKind::Stop { sequence },
        flags,
        title: event.title.clone(),
        subtitle: event.time.clone(),
    }
}

fn nearby_marker(place: &NearbyPlace) -> Marker {
    Marker {
        id: place.id.clone(),
        position: place.coordinate,
        kind: MarkerKind::Nearby(place.category),
        flags: MarkerFlags::empty(),
        title: place.name.clone(),
        subtitle: format!("{:.1} · {} away", place.rating, place.distance_label),
    }
}

/// Projects engine state into a [`Scene`].
///
/// Draw order: unfocused stops in itinerary order, then nearby places, then
/// the focused stop (highlighted and elevated) last. A `focused_id` that
/// does not resolve in the store is treated as no focus, which also
/// suppresses the nearby overlay.
#[must_use]
pub fn project(
    store: &EventStore,
    focused_id: Option<&str>,
    places: &[NearbyPlace],
    region: ViewportRegion,
) -> Scene {
    let focused = focused_id.and_then(|id| store.get(id));

    let path = if store.len() >= 2 {
        store.events().iter().map(|event| event.coordinate).collect()
    } else {
        Vec::new()
    };

    let mut markers = Vec::with_capacity(store.len() + places.len());
    for (index, event) in store.events().iter().enumerate() {
        if focused.is_some_and(|f| f.id == event.id) {
            continue;
        }
        markers.push(stop_marker(event, index + 1, MarkerFlags::empty()));
    }
    if let Some(event) = focused {
        for place in places {
            markers.push(nearby_marker(place));
        }
        // Emitted last so the highlighted stop paints above everything.
        let sequence = store.position(&event.id).unwrap_or(0) + 1;
        markers.push(stop_marker(
            event,
            sequence,
            MarkerFlags::HIGHLIGHTED | MarkerFlags::ELEVATED,
        ));
    }

    Scene {
        path,
        markers,
        region,
    }
}
