// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tripline_viewport --heading-base-level=0

//! Tripline Viewport: a headless model of the map's visible region.
//!
//! This crate owns the one piece of genuinely time-driven state in the
//! Tripline stack. It provides:
//! - [`GeoBounds`]: an axis-aligned latitude/longitude rectangle with
//!   bounding, padding, and interpolation helpers.
//! - [`ViewportRegion`]: a bounds plus the zoom scale derived from its span.
//! - [`ViewportController`]: a two-phase state machine (overview of the
//!   whole itinerary, or focused on one event and its nearby places) that
//!   drives eased, cancellable flights between target regions.
//!
//! It does **not** fetch tiles, own markers, or talk to any map library.
//! Callers are expected to:
//! - Recompute the overview whenever the itinerary is replaced.
//! - Call [`ViewportController::focus`] / [`ViewportController::clear_focus`]
//!   as focus changes, with the focal coordinate and its derived satellites.
//! - Drive [`ViewportController::advance`] from their frame clock and read
//!   [`ViewportController::region`] each frame.
//!
//! Time is an opaque monotonic scalar supplied by the host on every call;
//! the crate never reads a clock of its own.
//!
//! ## Minimal example
//!
//! ```rust
//! use tripline_model::GeoPoint;
//! use tripline_viewport::{ViewportConfig, ViewportController, ViewportPhase};
//!
//! let mut viewport = ViewportController::new(ViewportConfig::default());
//!
//! // First itinerary: the overview is applied instantaneously.
//! let stops = [GeoPoint::new(48.86, 2.35), GeoPoint::new(48.87, 2.36)];
//! viewport.set_overview(stops, 0.0);
//! assert!(!viewport.is_animating());
//! assert_eq!(viewport.phase(), ViewportPhase::Overview);
//!
//! // Focusing starts an animated flight toward the focal region.
//! viewport.focus(stops[0], [GeoPoint::new(48.865, 2.352)], 1.0);
//! assert!(viewport.is_animating());
//! assert_eq!(viewport.phase(), ViewportPhase::Focused);
//!
//! // The flight completes after the configured duration.
//! viewport.advance(2.0);
//! assert!(!viewport.is_animating());
//! ```
//!
//! ## Design notes
//!
//! - Regions are axis-aligned in degree space; the zoom scale follows a
//!   halving ladder over the 360° world span, so no transcendental math is
//!   needed and the crate stays `no_std`-clean.
//! - Retargeting an in-flight animation samples the current mid-flight
//!   region and continues from there. There is never more than one active
//!   flight, and its target always reflects the most recent request.
//! - Degenerate inputs (zero or one coordinate) never produce an invalid
//!   region: a single point gets a fixed-radius region, no points fall back
//!   to [`GeoBounds::WORLD`].
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod config;
mod controller;

pub use bounds::{GeoBounds, ViewportRegion};
pub use config::{ViewportConfig, ViewportPhase};
pub use controller::{ViewportController, ViewportDebugInfo};
