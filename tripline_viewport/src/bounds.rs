// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use tripline_model::GeoPoint;

/// Extra padding applied even when a fractional margin rounds to nothing.
///
/// Keeps single-point and near-degenerate bounds from collapsing to a zero
/// -area region (roughly 500 m of slack per edge at the equator).
const MIN_PADDING_DEG: f64 = 0.005;

/// An axis-aligned geographic rectangle: southwest and northeast corners.
///
/// Internally this is a `kurbo::Rect` with longitude on X and latitude on Y,
/// so union, centering, and containment reuse the plain rectangle math. The
/// corners are kept normalized (`southwest <= northeast` per component).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoBounds {
    rect: Rect,
}

impl GeoBounds {
    /// The default whole-world region used when there is nothing to frame.
    ///
    /// Latitude is clipped to ±85° in the Web Mercator manner so the region
    /// stays meaningful for tiled maps.
    pub const WORLD: Self = Self {
        rect: Rect::new(-180.0, -85.0, 180.0, 85.0),
    };

    /// Creates bounds from two corner points, normalizing their order.
    #[must_use]
    pub fn new(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            rect: Rect::from_points(a.to_point(), b.to_point()),
        }
    }

    /// The minimal bounds enclosing every point, or `None` for no points.
    ///
    /// A single point yields zero-size bounds; callers that need a visible
    /// region afterwards apply [`GeoBounds::padded`] or
    /// [`GeoBounds::with_min_span`].
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(first, first);
        for point in points {
            bounds = bounds.union(Self::new(point, point));
        }
        Some(bounds)
    }

    /// Returns the southwest corner.
    #[must_use]
    pub fn southwest(self) -> GeoPoint {
        GeoPoint::new(self.rect.y0, self.rect.x0)
    }

    /// Returns the northeast corner.
    #[must_use]
    pub fn northeast(self) -> GeoPoint {
        GeoPoint::new(self.rect.y1, self.rect.x1)
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(self) -> GeoPoint {
        GeoPoint::from_point(self.rect.center())
    }

    /// Latitude extent in degrees.
    #[must_use]
    pub fn lat_span(self) -> f64 {
        self.rect.height()
    }

    /// Longitude extent in degrees.
    #[must_use]
    pub fn lng_span(self) -> f64 {
        self.rect.width()
    }

    /// The larger of the two extents; what the zoom ladder fits against.
    #[must_use]
    pub fn max_span(self) -> f64 {
        self.lat_span().max(self.lng_span())
    }

    /// Returns `true` if the point lies inside the bounds (inclusive).
    #[must_use]
    pub fn contains(self, point: GeoPoint) -> bool {
        self.rect.contains(point.to_point())
    }

    /// Returns `true` if the point lies strictly inside the bounds.
    ///
    /// Used to check that padded regions keep content clear of the frame
    /// edges rather than touching them.
    #[must_use]
    pub fn contains_strictly(self, point: GeoPoint) -> bool {
        point.lng > self.rect.x0
            && point.lng < self.rect.x1
            && point.lat > self.rect.y0
            && point.lat < self.rect.y1
    }

    /// The smallest bounds containing both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            rect: self.rect.union(other.rect),
        }
    }

    /// Expands every edge by `fraction` of the corresponding span.
    ///
    /// The expansion never drops below [`MIN_PADDING_DEG`] per edge, so even
    /// zero-size bounds gain a usable interior. Negative fractions are
    /// treated as zero.
    #[must_use]
    pub fn padded(self, fraction: f64) -> Self {
        let fraction = fraction.max(0.0);
        let dx = (self.lng_span() * fraction).max(MIN_PADDING_DEG);
        let dy = (self.lat_span() * fraction).max(MIN_PADDING_DEG);
        Self {
            rect: self.rect.inflate(dx, dy),
        }
    }

    /// Grows the bounds around their center to at least `floor` per axis.
    ///
    /// This is the zoom clamp: a focused region may not shrink below the
    /// floor size, so a lone coordinate never zooms in indefinitely.
    #[must_use]
    pub fn with_min_span(self, floor: f64) -> Self {
        let floor = floor.max(0.0);
        let dx = ((floor - self.lng_span()) / 2.0).max(0.0);
        let dy = ((floor - self.lat_span()) / 2.0).max(0.0);
        Self {
            rect: self.rect.inflate(dx, dy),
        }
    }

    /// Linear interpolation between two bounds, component-wise.
    ///
    /// `t` is clamped to `[0, 1]`; `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let a = self.rect;
        let b = other.rect;
        Self {
            rect: Rect::new(
                a.x0 + (b.x0 - a.x0) * t,
                a.y0 + (b.y0 - a.y0) * t,
                a.x1 + (b.x1 - a.x1) * t,
                a.y1 + (b.y1 - a.y1) * t,
            ),
        }
    }
}

/// The rectangular geographic area the map displays, plus its zoom scale.
///
/// The zoom is derived from the bounds span (see
/// [`ViewportRegion::from_bounds`]) and carried alongside so view layers
/// with zoom-based tile or style selection need no math of their own.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportRegion {
    /// The visible bounds.
    pub bounds: GeoBounds,
    /// Zoom scale: each step halves the visible span.
    pub zoom: f64,
}

impl ViewportRegion {
    /// Builds a region, deriving zoom from the bounds span.
    ///
    /// The ladder starts from the 360° world span and halves it once per
    /// zoom step until the bounds fit, then clamps into
    /// `[min_zoom, max_zoom]`. Successive halving avoids logarithms, which
    /// keeps this callable from `no_std` builds without `libm`.
    #[must_use]
    pub fn from_bounds(bounds: GeoBounds, min_zoom: f64, max_zoom: f64) -> Self {
        let span = bounds.max_span().max(f64::MIN_POSITIVE);
        let mut zoom = 0.0;
        let mut visible = 360.0;
        while zoom < max_zoom && visible * 0.5 >= span {
            visible *= 0.5;
            zoom += 1.0;
        }
        Self {
            bounds,
            zoom: zoom.clamp(min_zoom, max_zoom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_of_nothing_is_none() {
        assert_eq!(GeoBounds::from_points([]), None);
    }

    #[test]
    fn from_points_encloses_every_point() {
        let points = [
            GeoPoint::new(48.86, 2.35),
            GeoPoint::new(48.87, 2.36),
            GeoPoint::new(48.85, 2.30),
        ];
        let bounds = GeoBounds::from_points(points).unwrap();
        for point in points {
            assert!(bounds.contains(point));
        }
        assert_eq!(bounds.southwest(), GeoPoint::new(48.85, 2.30));
        assert_eq!(bounds.northeast(), GeoPoint::new(48.87, 2.36));
    }

    #[test]
    fn single_point_bounds_are_degenerate_until_padded() {
        let point = GeoPoint::new(48.86, 2.35);
        let bounds = GeoBounds::from_points([point]).unwrap();
        assert_eq!(bounds.max_span(), 0.0);

        let padded = bounds.padded(0.15);
        assert!(padded.lat_span() > 0.0);
        assert!(padded.lng_span() > 0.0);
        assert!(padded.contains_strictly(point));
        assert_eq!(padded.center(), point);
    }

    #[test]
    fn padded_keeps_content_strictly_inside() {
        let points = [GeoPoint::new(48.86, 2.35), GeoPoint::new(48.87, 2.36)];
        let padded = GeoBounds::from_points(points).unwrap().padded(0.15);
        for point in points {
            assert!(padded.contains_strictly(point));
        }
    }

    #[test]
    fn with_min_span_enforces_the_floor_around_the_center() {
        let point = GeoPoint::new(10.0, 20.0);
        let bounds = GeoBounds::from_points([point])
            .unwrap()
            .with_min_span(0.02);
        assert!((bounds.lat_span() - 0.02).abs() < 1e-12);
        assert!((bounds.lng_span() - 0.02).abs() < 1e-12);
        assert_eq!(bounds.center(), point);
    }

    #[test]
    fn with_min_span_leaves_larger_bounds_alone() {
        let bounds = GeoBounds::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0));
        assert_eq!(bounds.with_min_span(0.5), bounds);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoBounds::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0));
        let b = GeoBounds::new(GeoPoint::new(10.0, 10.0), GeoPoint::new(11.0, 11.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.southwest(), GeoPoint::new(5.0, 5.0));
        // Out-of-range t is clamped rather than extrapolated.
        assert_eq!(a.lerp(b, 2.0), b);
    }

    #[test]
    fn zoom_ladder_fits_the_span() {
        // A 0.02° span sits between 360/2^14 and 360/2^15.
        let bounds = GeoBounds::new(GeoPoint::new(48.86, 2.35), GeoPoint::new(48.88, 2.37));
        let region = ViewportRegion::from_bounds(bounds, 2.0, 18.0);
        assert_eq!(region.zoom, 14.0);
    }

    #[test]
    fn zoom_never_decreases_as_the_span_halves() {
        let mut previous = 0.0;
        let mut span: f64 = 360.0;
        for _ in 0..20 {
            let bounds = GeoBounds::new(
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(span.min(85.0), span.min(180.0)),
            );
            let region = ViewportRegion::from_bounds(bounds, 0.0, 18.0);
            assert!(region.zoom >= previous);
            previous = region.zoom;
            span *= 0.5;
        }
        assert_eq!(previous, 18.0);
    }

    #[test]
    fn zoom_respects_the_configured_limits() {
        let world = ViewportRegion::from_bounds(GeoBounds::WORLD, 2.0, 18.0);
        assert_eq!(world.zoom, 2.0);

        // A degenerate zero-span bounds would ladder forever; the upper
        // limit stops it.
        let speck = GeoBounds::from_points([GeoPoint::new(0.0, 0.0)]).unwrap();
        let region = ViewportRegion::from_bounds(speck, 2.0, 18.0);
        assert_eq!(region.zoom, 18.0);
    }
}
