// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geographic point type and conversions into `kurbo` world space.

use kurbo::Point;

/// A WGS84 coordinate: latitude and longitude in degrees.
///
/// Tripline maps geographic coordinates onto the `kurbo` plane with
/// longitude on the X axis and latitude on the Y axis, so bounding and
/// interpolation math can reuse [`kurbo::Rect`] and [`kurbo::Point`]
/// directly. Latitude grows northward, longitude grows eastward.
///
/// The plain constructor does not validate; use [`GeoPoint::validated`] at
/// trust boundaries. A valid point has finite components with latitude in
/// `[-90, 90]` and longitude in `[-180, 180]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude degrees without validation.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a point only if both components are finite and in range.
    #[must_use]
    pub fn validated(lat: f64, lng: f64) -> Option<Self> {
        let point = Self { lat, lng };
        point.is_valid().then_some(point)
    }

    /// Returns `true` if both components are finite and within WGS84 range.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Returns this point displaced by the given deltas in degrees.
    ///
    /// The result is not re-validated; callers displacing near the poles or
    /// the antimeridian are expected to handle wrap themselves.
    #[must_use]
    pub fn offset_by(self, dlat: f64, dlng: f64) -> Self {
        Self {
            lat: self.lat + dlat,
            lng: self.lng + dlng,
        }
    }

    /// Converts into a `kurbo` point (x = longitude, y = latitude).
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(self.lng, self.lat)
    }

    /// Converts from a `kurbo` point (x = longitude, y = latitude).
    #[must_use]
    pub fn from_point(point: Point) -> Self {
        Self {
            lat: point.y,
            lng: point.x,
        }
    }

    /// Euclidean separation from `other` in degrees.
    ///
    /// This is a flat-plane approximation, intended for the small spans the
    /// engine works with (nearby-place offsets, region containment checks),
    /// not for long-haul distances.
    #[must_use]
    pub fn degrees_between(self, other: Self) -> f64 {
        self.to_point().distance(other.to_point())
    }
}
