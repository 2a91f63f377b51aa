// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tripline_model::GeoPoint;

use crate::bounds::{GeoBounds, ViewportRegion};
use crate::config::{ViewportConfig, ViewportPhase};

/// A single in-flight move between two regions.
///
/// The source is a copy taken when the flight started (possibly mid-way
/// through a previous flight), so retargeting never snaps back to an older
/// origin.
#[derive(Copy, Clone, Debug)]
struct Flight {
    from: GeoBounds,
    to: GeoBounds,
    start: f64,
    duration: f64,
}

impl Flight {
    /// The interpolated bounds at `now`, and whether the flight is done.
    fn sample(&self, now: f64) -> (GeoBounds, bool) {
        if self.duration <= 0.0 {
            return (self.to, true);
        }
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        (self.from.lerp(self.to, ease_in_out(t)), t >= 1.0)
    }
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 - 2.0 * t;
        1.0 - u * u * u / 2.0
    }
}

/// Owner of the map's visible region.
///
/// `ViewportController` is a two-state machine:
/// - **Overview**: no event focused. The target region is the padded
///   bounding region of every event coordinate in the itinerary (or
///   [`GeoBounds::WORLD`] for an empty itinerary).
/// - **Focused**: one event focused. The target region is the padded
///   bounding region of the focal coordinate plus its nearby places,
///   floored so it cannot shrink below a minimum span.
///
/// Every transition flies to the new target over the configured duration,
/// with one exception: the very first overview (initial load) is applied
/// instantaneously. A transition requested while a flight is in progress
/// retargets that flight from the current mid-flight region; there is never
/// a queue of pending flights.
///
/// Nothing else mutates the region. The host drives time by calling
/// [`ViewportController::advance`] with its monotonic clock and reads the
/// current region back with [`ViewportController::region`].
#[derive(Clone, Debug)]
pub struct ViewportController {
    config: ViewportConfig,
    phase: ViewportPhase,
    /// Overview target for the current itinerary; where `clear_focus` returns.
    overview: GeoBounds,
    /// Current (possibly mid-flight) bounds.
    current: GeoBounds,
    flight: Option<Flight>,
    /// False until the first overview has been applied.
    initialized: bool,
}

impl ViewportController {
    /// Creates a controller idling on the world region.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            config: config.normalized(),
            phase: ViewportPhase::Overview,
            overview: GeoBounds::WORLD,
            current: GeoBounds::WORLD,
            flight: None,
            initialized: false,
        }
    }

    /// Returns the active configuration (normalized).
    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> ViewportPhase {
        self.phase
    }

    /// Returns `true` while a flight is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.flight.is_some()
    }

    /// The region currently visible (mid-flight regions included).
    #[must_use]
    pub fn region(&self) -> ViewportRegion {
        self.region_of(self.current)
    }

    /// The region the controller is heading toward.
    ///
    /// Equal to [`ViewportController::region`] when no flight is active.
    #[must_use]
    pub fn target_region(&self) -> ViewportRegion {
        let bounds = self.flight.map_or(self.current, |flight| flight.to);
        self.region_of(bounds)
    }

    /// Recomputes the overview for a replaced itinerary and heads there.
    ///
    /// This is both the Overview → Overview transition on itinerary
    /// replacement and the target that [`ViewportController::clear_focus`]
    /// later returns to. The very first call is applied instantaneously
    /// (initial load); all later calls fly. Any in-flight animation is
    /// retargeted, which also covers cancelling a focus flight when the
    /// itinerary is replaced underneath it.
    pub fn set_overview<I>(&mut self, points: I, now: f64)
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let target = match GeoBounds::from_points(points) {
            Some(bounds) => bounds.padded(self.config.overview_padding),
            None => GeoBounds::WORLD,
        };
        self.overview = target;
        self.phase = ViewportPhase::Overview;
        if self.initialized {
            self.fly_to(target, now);
        } else {
            self.jump_to(target);
            self.initialized = true;
        }
    }

    /// Flies to the region framing a focused event and its satellites.
    ///
    /// `satellites` are the derived nearby-place coordinates; passing none
    /// still yields a valid fixed-radius region around the focal point.
    pub fn focus<I>(&mut self, focal: GeoPoint, satellites: I, now: f64)
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut bounds = GeoBounds::new(focal, focal);
        if let Some(extra) = GeoBounds::from_points(satellites) {
            bounds = bounds.union(extra);
        }
        let target = bounds
            .padded(self.config.focus_padding)
            .with_min_span(self.config.min_focus_span);
        self.phase = ViewportPhase::Focused;
        self.fly_to(target, now);
    }

    /// Returns to the overview of the current itinerary.
    ///
    /// A no-op when nothing is focused, so clearing an already-clear focus
    /// does not retrigger animation.
    pub fn clear_focus(&mut self, now: f64) {
        if self.phase == ViewportPhase::Focused {
            self.phase = ViewportPhase::Overview;
            self.fly_to(self.overview, now);
        }
    }

    /// Advances the flight clock; returns `true` while still animating.
    pub fn advance(&mut self, now: f64) -> bool {
        if let Some(flight) = self.flight {
            let (bounds, done) = flight.sample(now);
            self.current = bounds;
            if done {
                self.flight = None;
            }
        }
        self.flight.is_some()
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            phase: self.phase,
            region: self.region(),
            target_region: self.target_region(),
            is_animating: self.is_animating(),
            initialized: self.initialized,
            config: self.config,
        }
    }

    fn region_of(&self, bounds: GeoBounds) -> ViewportRegion {
        ViewportRegion::from_bounds(bounds, self.config.min_zoom, self.config.max_zoom)
    }

    fn jump_to(&mut self, target: GeoBounds) {
        self.current = target;
        self.flight = None;
    }

    /// Starts or retargets a flight toward `target`.
    ///
    /// Guarantees at most one active flight whose target is the most recent
    /// request. Re-requesting the active target (or the current region when
    /// idle) changes nothing, which is what makes repeated identical focus
    /// signals animation-stable.
    fn fly_to(&mut self, target: GeoBounds, now: f64) {
        match self.flight {
            Some(flight) if flight.to == target => return,
            Some(flight) => {
                // Continue from wherever the cancelled flight got to.
                let (bounds, _) = flight.sample(now);
                self.current = bounds;
            }
            None if self.current == target => return,
            None => {}
        }
        if self.config.flight_duration <= 0.0 {
            self.jump_to(target);
            return;
        }
        self.flight = Some(Flight {
            from: self.current,
            to: target,
            start: now,
            duration: self.config.flight_duration,
        });
    }
}

/// Debug snapshot of a [`ViewportController`] state.
#[derive(Copy, Clone, Debug)]
pub struct ViewportDebugInfo {
    /// Current phase.
    pub phase: ViewportPhase,
    /// Current (possibly mid-flight) region.
    pub region: ViewportRegion,
    /// Region the controller is heading toward.
    pub target_region: ViewportRegion,
    /// Whether a flight is in progress.
    pub is_animating: bool,
    /// Whether the first overview has been applied yet.
    pub initialized: bool,
    /// Active configuration.
    pub config: ViewportConfig,
}
