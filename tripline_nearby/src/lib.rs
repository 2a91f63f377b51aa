// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tripline_nearby --heading-base-level=0

//! Tripline Nearby: derive synthetic nearby-place recommendations from a
//! focused itinerary event.
//!
//! [`derive_recommendations`] is a pure, total function from an event to a
//! small ordered sequence of [`NearbyPlace`] values. The event's category
//! selects a fixed slot table:
//!
//! - food → 3 restaurants
//! - accommodation → 3 hotels
//! - activity → 2 activities
//! - flight or transit → 1 transit stop
//! - entertainment → 2 activities
//!
//! Each slot carries a fixed name, rating, distance label, and a coordinate
//! offset in the 0.005–0.01 degree band (roughly 0.3–1 km), distinct per
//! slot. Derivation is deterministic: the same event always produces the
//! same sequence, with place ids of the form `nearby-<slot>-<event id>`.
//!
//! The places are synthetic. They stand in for a real nearby-place lookup
//! the engine deliberately does not perform; they are recomputed on every
//! focus change and never persisted or merged.
//!
//! ## Minimal example
//!
//! ```rust
//! use tripline_model::{EventCategory, GeoPoint, ItineraryEvent};
//! use tripline_nearby::{PlaceCategory, derive_recommendations};
//!
//! let event = ItineraryEvent {
//!     id: "evt-7".into(),
//!     title: "Dinner".into(),
//!     category: EventCategory::Food,
//!     time: "19:30".into(),
//!     location: "6th arrondissement".into(),
//!     description: String::new(),
//!     duration: "2 h".into(),
//!     coordinate: GeoPoint::new(48.8529, 2.3386),
//! };
//!
//! let places = derive_recommendations(&event);
//! assert_eq!(places.len(), 3);
//! assert!(places.iter().all(|p| p.category == PlaceCategory::Restaurant));
//! assert_eq!(places[0].id, "nearby-1-evt-7");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use smallvec::SmallVec;
use tripline_model::{EventCategory, GeoPoint, ItineraryEvent};

/// Category of a recommended nearby place.
///
/// Each category renders with its own marker style, so the four variants
/// here are exactly the four visual variants the map distinguishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaceCategory {
    /// Somewhere to eat near a food stop.
    Restaurant,
    /// Alternative lodging near an accommodation stop.
    Hotel,
    /// A sight or outing near an activity or entertainment stop.
    Activity,
    /// A station or hub near a flight or transit stop.
    Transit,
}

impl PlaceCategory {
    /// Human-readable label for marker popups.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::Hotel => "Hotel",
            Self::Activity => "Activity",
            Self::Transit => "Transit",
        }
    }
}

/// A synthetic nearby point of interest derived from a focused event.
///
/// Ephemeral by design: recomputed on every focus change, never persisted,
/// never merged with a previous derivation.
#[derive(Clone, Debug, PartialEq)]
pub struct NearbyPlace {
    /// Identifier, unique per slot and per source event.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category, which also selects the marker style.
    pub category: PlaceCategory,
    /// Position: the source event's coordinate plus the slot offset.
    pub coordinate: GeoPoint,
    /// Fixed rating in `[0, 5]`.
    pub rating: f64,
    /// Fixed display distance, e.g. "0.5 km".
    pub distance_label: &'static str,
}

/// Recommendation list; never longer than the largest slot table.
pub type Recommendations = SmallVec<[NearbyPlace; 3]>;

/// One fixed recommendation slot.
///
/// Offsets stay in the 0.005–0.01 degree band per component so every derived
/// place lands within roughly a kilometer of the source event, and no two
/// slots in a table share an offset.
struct Slot {
    name: &'static str,
    category: PlaceCategory,
    rating: f64,
    distance_label: &'static str,
    dlat: f64,
    dlng: f64,
}

const RESTAURANT_SLOTS: [Slot; 3] = [
    Slot {
        name: "La Petite Bistro",
        category: PlaceCategory::Restaurant,
        rating: 4.5,
        distance_label: "0.3 km",
        dlat: 0.01,
        dlng: 0.005,
    },
    Slot {
        name: "Chez Marie",
        category: PlaceCategory::Restaurant,
        rating: 4.7,
        distance_label: "0.5 km",
        dlat: -0.005,
        dlng: 0.01,
    },
    Slot {
        name: "Le Gourmet",
        category: PlaceCategory::Restaurant,
        rating: 4.3,
        distance_label: "0.7 km",
        dlat: 0.007,
        dlng: -0.008,
    },
];

const HOTEL_SLOTS: [Slot; 3] = [
    Slot {
        name: "Grand Hotel Plaza",
        category: PlaceCategory::Hotel,
        rating: 4.6,
        distance_label: "0.4 km",
        dlat: 0.008,
        dlng: 0.006,
    },
    Slot {
        name: "Boutique Residence",
        category: PlaceCategory::Hotel,
        rating: 4.8,
        distance_label: "0.6 km",
        dlat: -0.006,
        dlng: -0.005,
    },
    Slot {
        name: "Comfort Suites",
        category: PlaceCategory::Hotel,
        rating: 4.4,
        distance_label: "0.8 km",
        dlat: 0.005,
        dlng: -0.009,
    },
];

const ACTIVITY_SLOTS: [Slot; 2] = [
    Slot {
        name: "Old Town Walking Tour",
        category: PlaceCategory::Activity,
        rating: 4.6,
        distance_label: "0.4 km",
        dlat: 0.006,
        dlng: 0.009,
    },
    Slot {
        name: "Riverside Promenade",
        category: PlaceCategory::Activity,
        rating: 4.2,
        distance_label: "0.6 km",
        dlat: -0.009,
        dlng: 0.005,
    },
];

const ENTERTAINMENT_SLOTS: [Slot; 2] = [
    Slot {
        name: "Artisan Quarter",
        category: PlaceCategory::Activity,
        rating: 4.4,
        distance_label: "0.3 km",
        dlat: 0.009,
        dlng: -0.005,
    },
    Slot {
        name: "Panorama Terrace",
        category: PlaceCategory::Activity,
        rating: 4.5,
        distance_label: "0.7 km",
        dlat: -0.008,
        dlng: -0.007,
    },
];

const TRANSIT_SLOTS: [Slot; 1] = [Slot {
    name: "Central Transit Hub",
    category: PlaceCategory::Transit,
    rating: 4.1,
    distance_label: "0.5 km",
    dlat: -0.007,
    dlng: -0.006,
}];

/// Slot table for an event category.
///
/// The dispatch is a total match over the closed category enum, so the
/// "category without a policy yields nothing" rule of the original string
/// -keyed branching is checked by the compiler instead of falling through.
const fn slots_for(category: EventCategory) -> &'static [Slot] {
    match category {
        EventCategory::Food => &RESTAURANT_SLOTS,
        EventCategory::Accommodation => &HOTEL_SLOTS,
        EventCategory::Activity => &ACTIVITY_SLOTS,
        EventCategory::Entertainment => &ENTERTAINMENT_SLOTS,
        EventCategory::Flight | EventCategory::Transit => &TRANSIT_SLOTS,
    }
}

/// Derives the ordered nearby-place recommendations for a focused event.
///
/// Pure and deterministic: two calls with the same event produce identical
/// sequences (same ids, names, coordinates, ratings, in the same order).
#[must_use]
pub fn derive_recommendations(event: &ItineraryEvent) -> Recommendations {
    slots_for(event.category)
        .iter()
        .enumerate()
        .map(|(index, slot)| NearbyPlace {
            id: format!("nearby-{}-{}", index + 1, event.id),
            name: slot.name.to_string(),
            category: slot.category,
            coordinate: event.coordinate.offset_by(slot.dlat, slot.dlng),
            rating: slot.rating,
            distance_label: slot.distance_label,
        })
        .collect()
}
