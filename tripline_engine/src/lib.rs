// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tripline_engine --heading-base-level=0

//! Tripline Engine: keep the itinerary list and the map in lockstep.
//!
//! The engine is the composition root of the Tripline stack. It owns:
//! - the [`tripline_model::EventStore`] snapshot of the current itinerary,
//! - a [`HoverState`] holding at most one focused event id,
//! - the recommendations derived from that focus
//!   (via [`tripline_nearby::derive_recommendations`]),
//! - a [`tripline_viewport::ViewportController`] framing whatever matters.
//!
//! Hover-enter and hover-leave signals from the list view are the only
//! focus mutators. Every real focus transition rederives the
//! recommendations and retargets the viewport before returning, so the
//! three never drift apart; repeated identical signals are absorbed without
//! retriggering either. The host drives the one asynchronous piece, the
//! viewport flight, by calling [`Engine::advance`] from its frame clock.
//!
//! Everything is single-threaded and framework-free; a view layer renders
//! from [`Engine::snapshot`] or [`Engine::scene`] and never mutates state
//! directly.
//!
//! ## Minimal example
//!
//! ```rust
//! use tripline_engine::Engine;
//! use tripline_model::{EventCategory, GeoPoint, Itinerary, ItineraryEvent};
//!
//! let mut engine = Engine::default();
//! engine.set_itinerary(
//!     Itinerary {
//!         destination: "Paris".into(),
//!         start_date: "2026-11-01".into(),
//!         end_date: "2026-11-05".into(),
//!         events: vec![ItineraryEvent {
//!             id: "evt-1".into(),
//!             title: "Dinner".into(),
//!             category: EventCategory::Food,
//!             time: "19:30".into(),
//!             location: "6th arrondissement".into(),
//!             description: String::new(),
//!             duration: "2 h".into(),
//!             coordinate: GeoPoint::new(48.8529, 2.3386),
//!         }],
//!     },
//!     0.0,
//! );
//!
//! engine.hover("evt-1", 1.0);
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.focused_event_id, Some("evt-1"));
//! assert_eq!(snapshot.recommended_places.len(), 3);
//!
//! engine.unhover(2.0);
//! assert_eq!(engine.snapshot().focused_event_id, None);
//! assert!(engine.snapshot().recommended_places.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod hover;

pub use engine::{Engine, Snapshot};
pub use hover::HoverState;
