// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-itinerary event snapshot with id-indexed lookup.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::event::{Itinerary, ItineraryEvent};

/// Immutable per-render snapshot of an itinerary's ordered events.
///
/// The store exposes the event sequence exactly as the itinerary ordered it,
/// plus O(1)-amortized lookup by event id. There are no mutation operations;
/// a new itinerary produces a new store.
///
/// Lookup of an unknown id returns `None` rather than any fabricated event.
#[derive(Clone, Debug, Default)]
pub struct EventStore {
    events: Vec<ItineraryEvent>,
    index: HashMap<String, usize>,
}

impl EventStore {
    /// Creates an empty store (the idle, no-itinerary state).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an itinerary, consuming it.
    ///
    /// Event ids are expected to be unique within the itinerary; this is an
    /// invariant of generation. In debug builds a duplicate id panics; in
    /// release builds the first occurrence wins for lookup while the event
    /// sequence is kept intact.
    #[must_use]
    pub fn from_itinerary(itinerary: Itinerary) -> Self {
        let events = itinerary.events;
        let mut index = HashMap::with_capacity(events.len());
        for (position, event) in events.iter().enumerate() {
            let previous = index.entry(event.id.clone()).or_insert(position);
            debug_assert!(
                *previous == position,
                "duplicate event id in itinerary: {}",
                event.id
            );
        }
        Self { events, index }
    }

    /// Returns the ordered event sequence, unchanged from the itinerary.
    #[must_use]
    pub fn events(&self) -> &[ItineraryEvent] {
        &self.events
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ItineraryEvent> {
        self.index.get(id).map(|&position| &self.events[position])
    }

    /// Returns the zero-based position of an event in the sequence.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns `true` if an event with this id is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the store holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;
    use crate::geo::GeoPoint;
    use alloc::string::ToString;

    fn event(id: &str, lat: f64, lng: f64) -> ItineraryEvent {
        ItineraryEvent {
            id: id.to_string(),
            title: id.to_string(),
            category: EventCategory::Activity,
            time: "10:00".to_string(),
            location: "Somewhere".to_string(),
            description: String::new(),
            duration: "1 h".to_string(),
            coordinate: GeoPoint::new(lat, lng),
        }
    }

    fn store_of(ids: &[&str]) -> EventStore {
        let events = ids
            .iter()
            .enumerate()
            .map(|(i, id)| event(id, 48.0 + i as f64 * 0.01, 2.0))
            .collect();
        EventStore::from_itinerary(Itinerary {
            destination: "Paris".to_string(),
            start_date: "2026-11-01".to_string(),
            end_date: "2026-11-05".to_string(),
            events,
        })
    }

    #[test]
    fn preserves_event_order() {
        let store = store_of(&["a", "b", "c"]);
        let ids: Vec<&str> = store.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn lookup_by_id_and_position() {
        let store = store_of(&["a", "b", "c"]);
        assert_eq!(store.get("b").map(|e| e.id.as_str()), Some("b"));
        assert_eq!(store.position("c"), Some(2));
        assert!(store.contains("a"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = store_of(&["a"]);
        assert!(store.get("missing").is_none());
        assert_eq!(store.position("missing"), None);
        assert!(!store.contains("missing"));
    }

    #[test]
    fn empty_store_is_empty() {
        let store = EventStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.events().is_empty());
    }

    #[test]
    fn replacement_is_wholesale() {
        let first = store_of(&["a", "b"]);
        let second = store_of(&["x"]);
        // A new store knows nothing about the previous itinerary's ids.
        assert!(first.contains("a"));
        assert!(!second.contains("a"));
        assert_eq!(second.len(), 1);
    }
}
