// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which of its two states the viewport controller is in.
///
/// Transitions are driven solely by focus changes and itinerary
/// replacement; see [`crate::ViewportController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ViewportPhase {
    /// No event is focused; the whole itinerary is framed.
    #[default]
    Overview,
    /// One event is focused; it and its nearby places are framed.
    Focused,
}

/// Tuning for region fitting and flight animation.
///
/// The defaults reproduce the stock map behavior: a generous margin around
/// the full itinerary, a tighter one around a focused event, a floor on the
/// focused span so a lone point cannot zoom in indefinitely, and a 0.8
/// time-unit eased flight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Fraction of the overview span added as margin on every edge.
    pub overview_padding: f64,
    /// Fraction of the focused span added as margin on every edge.
    pub focus_padding: f64,
    /// Minimum span (degrees, per axis) of a focused region.
    pub min_focus_span: f64,
    /// Lower zoom limit.
    pub min_zoom: f64,
    /// Upper zoom limit.
    pub max_zoom: f64,
    /// Flight duration in host time units.
    pub flight_duration: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            overview_padding: 0.15,
            focus_padding: 0.08,
            min_focus_span: 0.01,
            min_zoom: 2.0,
            max_zoom: 18.0,
            flight_duration: 0.8,
        }
    }
}

impl ViewportConfig {
    /// Returns the config with out-of-order or negative values normalized.
    ///
    /// Zoom limits are swapped into order, paddings and spans are clamped
    /// to non-negative, and a non-positive duration degrades flights to
    /// instantaneous jumps.
    #[must_use]
    pub fn normalized(self) -> Self {
        let (min_zoom, max_zoom) = if self.min_zoom <= self.max_zoom {
            (self.min_zoom, self.max_zoom)
        } else {
            (self.max_zoom, self.min_zoom)
        };
        Self {
            overview_padding: self.overview_padding.max(0.0),
            focus_padding: self.focus_padding.max(0.0),
            min_focus_span: self.min_focus_span.max(0.0),
            min_zoom,
            max_zoom,
            flight_duration: self.flight_duration.max(0.0),
        }
    }
}
