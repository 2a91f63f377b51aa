// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use tripline_model::{EventStore, GenerateError, Itinerary, ItineraryEvent};
use tripline_nearby::{NearbyPlace, Recommendations, derive_recommendations};
use tripline_scene::{Scene, project};
use tripline_viewport::{ViewportConfig, ViewportController, ViewportRegion};

use crate::hover::HoverState;

/// The synchronization engine behind the itinerary list and the map.
///
/// `Engine` owns the canonical state (event store, hover focus, derived
/// recommendations, viewport) and keeps it mutually consistent through a
/// small set of transition operations. Each focus transition recomputes the
/// recommendations and retargets the viewport in the same call, so a
/// retarget can never observe a stale recommendation set.
///
/// All operations run to completion synchronously except the viewport
/// flight, which the host drives by calling [`Engine::advance`] with its
/// monotonic clock. The `now` parameter on the mutators timestamps the
/// flights those mutations start; it must come from the same clock.
///
/// View layers read state back through [`Engine::snapshot`] (raw state) or
/// [`Engine::scene`] (renderable primitives) and mutate focus only through
/// [`Engine::hover`] / [`Engine::unhover`].
#[derive(Clone, Debug)]
pub struct Engine {
    store: EventStore,
    hover: HoverState,
    places: Recommendations,
    viewport: ViewportController,
    revision: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

/// Read-only view of the engine state, recomputed after every change.
#[derive(Clone, Debug)]
pub struct Snapshot<'a> {
    /// Events in itinerary order.
    pub ordered_events: &'a [ItineraryEvent],
    /// Id of the focused event, or `None`.
    pub focused_event_id: Option<&'a str>,
    /// Recommendations derived from the focused event; empty when idle.
    pub recommended_places: &'a [NearbyPlace],
    /// The current (possibly mid-flight) viewport region.
    pub region: ViewportRegion,
    /// Bumps on every semantic state change (not on animation frames).
    pub revision: u64,
}

impl Engine {
    /// Creates an idle engine with the given viewport tuning.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            store: EventStore::new(),
            hover: HoverState::new(),
            places: Recommendations::new(),
            viewport: ViewportController::new(config),
            revision: 0,
        }
    }

    /// Replaces the itinerary wholesale.
    ///
    /// Any focus is cleared (its id may not exist in the new itinerary),
    /// recommendations are dropped, and the viewport heads for the new
    /// overview, cancelling a focus flight that may be under way. The very
    /// first itinerary paints its overview instantaneously; every later
    /// replacement animates.
    pub fn set_itinerary(&mut self, itinerary: Itinerary, now: f64) {
        self.store = EventStore::from_itinerary(itinerary);
        self.hover.leave();
        self.places.clear();
        let coordinates: Vec<_> = self.store.events().iter().map(|e| e.coordinate).collect();
        self.viewport.set_overview(coordinates, now);
        self.bump();
    }

    /// Consumes the itinerary-generation collaborator's result.
    ///
    /// On success the itinerary replaces the current one. On failure the
    /// engine refuses the replacement and leaves prior state untouched
    /// (or stays idle if none existed); the error is handed back for
    /// display and nothing else changes.
    pub fn apply_generation(
        &mut self,
        result: Result<Itinerary, GenerateError>,
        now: f64,
    ) -> Result<(), GenerateError> {
        let itinerary = result?;
        self.set_itinerary(itinerary, now);
        Ok(())
    }

    /// Drops the itinerary, returning to the empty idle state.
    pub fn clear_itinerary(&mut self, now: f64) {
        self.store = EventStore::new();
        self.hover.leave();
        self.places.clear();
        self.viewport.set_overview([], now);
        self.bump();
    }

    /// Handles a hover-enter signal from the list view.
    ///
    /// Focusing the already-focused event changes nothing and triggers no
    /// animation. An id absent from the current itinerary (possible right
    /// after a replacement race) is handled exactly like
    /// [`Engine::unhover`]. Otherwise the event becomes focused, its
    /// recommendations are derived, and the viewport flies to frame them,
    /// all from this one transition.
    pub fn hover(&mut self, id: &str, now: f64) {
        let Some(event) = self.store.get(id) else {
            // Stale reference: the calm fallback is a plain unhover.
            self.unhover(now);
            return;
        };
        if !self.hover.enter(id) {
            return;
        }
        // Derived in the same transition as the focus change; the viewport
        // target below sees exactly this recommendation set.
        let coordinate = event.coordinate;
        self.places = derive_recommendations(event);
        self.viewport
            .focus(coordinate, self.places.iter().map(|p| p.coordinate), now);
        self.bump();
    }

    /// Handles a hover-leave signal from the list view.
    ///
    /// A no-op when nothing is focused; otherwise clears focus, drops the
    /// recommendations, and flies back to the overview.
    pub fn unhover(&mut self, now: f64) {
        if !self.hover.leave() {
            return;
        }
        self.places.clear();
        self.viewport.clear_focus(now);
        self.bump();
    }

    /// Advances the viewport flight; returns `true` while still animating.
    pub fn advance(&mut self, now: f64) -> bool {
        self.viewport.advance(now)
    }

    /// Returns `true` while a viewport flight is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.viewport.is_animating()
    }

    /// The read-only snapshot the view layer renders from.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            ordered_events: self.store.events(),
            focused_event_id: self.hover.current(),
            recommended_places: &self.places,
            region: self.viewport.region(),
            revision: self.revision,
        }
    }

    /// Projects the current state into renderable primitives.
    #[must_use]
    pub fn scene(&self) -> Scene {
        project(
            &self.store,
            self.hover.current(),
            &self.places,
            self.viewport.region(),
        )
    }

    /// Read access to the viewport controller (for inspection).
    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
