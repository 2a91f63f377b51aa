// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tripline_model --heading-base-level=0

//! Tripline Model: the core data model for itinerary/map synchronization.
//!
//! This crate defines the immutable inputs the rest of the Tripline stack
//! derives its state from:
//! - [`GeoPoint`]: a WGS84 latitude/longitude pair with validation and
//!   conversions to `kurbo` world coordinates.
//! - [`ItineraryEvent`] and [`Itinerary`]: one scheduled stop and the ordered
//!   trip it belongs to. An itinerary is only ever replaced wholesale, never
//!   patched.
//! - [`EventStore`]: a per-itinerary snapshot exposing the ordered event
//!   sequence plus O(1)-amortized lookup by event id.
//! - [`ItinerarySource`]: the interface to the external collaborator that
//!   turns a [`TripRequest`] into an [`Itinerary`], and [`GenerateError`],
//!   the ways that call can be refused.
//!
//! It does **not** own any focus, recommendation, or viewport state; those
//! live in the sibling crates and treat everything here as read-only input.
//!
//! ## Minimal example
//!
//! ```rust
//! use tripline_model::{EventCategory, EventStore, GeoPoint, Itinerary, ItineraryEvent};
//!
//! let itinerary = Itinerary {
//!     destination: "Paris".into(),
//!     start_date: "2026-11-01".into(),
//!     end_date: "2026-11-05".into(),
//!     events: vec![ItineraryEvent {
//!         id: "evt-1".into(),
//!         title: "Dinner at Le Comptoir".into(),
//!         category: EventCategory::Food,
//!         time: "19:30".into(),
//!         location: "6th arrondissement".into(),
//!         description: "Classic bistro fare".into(),
//!         duration: "2 h".into(),
//!         coordinate: GeoPoint::new(48.8529, 2.3386),
//!     }],
//! };
//!
//! let store = EventStore::from_itinerary(itinerary);
//! assert_eq!(store.len(), 1);
//! assert!(store.get("evt-1").is_some());
//! assert!(store.get("evt-404").is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod geo;
mod source;
mod store;

pub use event::{EventCategory, Itinerary, ItineraryEvent};
pub use geo::GeoPoint;
pub use source::{GenerateError, ItinerarySource, TripRequest};
pub use store::EventStore;
