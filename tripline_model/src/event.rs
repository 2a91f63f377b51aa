// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Itinerary events and the itinerary container.

use alloc::string::String;
use alloc::vec::Vec;

use crate::geo::GeoPoint;

/// Category of a scheduled stop.
///
/// The category drives downstream policy: which nearby recommendations a
/// focused event produces, and which marker style it renders with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventCategory {
    /// Arriving or departing flight.
    Flight,
    /// Hotel or other lodging.
    Accommodation,
    /// Restaurant, café, or other meal stop.
    Food,
    /// Show, museum, or other ticketed outing.
    Entertainment,
    /// Train, metro, or other ground transfer.
    Transit,
    /// Sightseeing or outdoor activity.
    Activity,
}

impl EventCategory {
    /// Human-readable label for list rows and marker popups.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flight => "Flight",
            Self::Accommodation => "Accommodation",
            Self::Food => "Food",
            Self::Entertainment => "Entertainment",
            Self::Transit => "Transit",
            Self::Activity => "Activity",
        }
    }
}

/// One scheduled stop on an itinerary.
///
/// Events are immutable once produced by itinerary generation. Identity is
/// the `id` field; ids are unique within one [`Itinerary`]. The `time` and
/// `duration` fields are display strings chosen by the generator, not parsed
/// by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct ItineraryEvent {
    /// Unique identifier within the itinerary.
    pub id: String,
    /// Display title, e.g. "Dinner at Le Comptoir".
    pub title: String,
    /// Category driving recommendation and marker policy.
    pub category: EventCategory,
    /// Display time, e.g. "19:30".
    pub time: String,
    /// Display location, e.g. "6th arrondissement".
    pub location: String,
    /// Longer display description.
    pub description: String,
    /// Display duration, e.g. "2 h".
    pub duration: String,
    /// Where the stop is on the map.
    pub coordinate: GeoPoint,
}

/// An ordered trip: destination, date range, and the events in display order.
///
/// Event order is significant. It is both the chronological order of the
/// list view and the order of the path drawn on the map. Itineraries are
/// created wholesale by the generation collaborator and replaced wholesale;
/// nothing in Tripline patches one in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Itinerary {
    /// Destination the trip was generated for.
    pub destination: String,
    /// First day of the trip as an ISO-8601 display string.
    pub start_date: String,
    /// Last day of the trip as an ISO-8601 display string.
    pub end_date: String,
    /// Stops in chronological display order.
    pub events: Vec<ItineraryEvent>,
}

impl Itinerary {
    /// Returns the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the itinerary has no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
