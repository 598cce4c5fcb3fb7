pub mod build;

pub use build::build_field;

use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// A request-side 2D coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub axis1: f64,
    pub axis2: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(axis1: f64, axis2: f64) -> Self {
        Self { axis1, axis2 }
    }
}

impl From<Coordinate> for Point2 {
    fn from(c: Coordinate) -> Self {
        Point2::new(c.axis1, c.axis2)
    }
}

/// One boundary polygon as supplied by a request.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonSpec {
    pub coordinates: Vec<Coordinate>,
}

impl PolygonSpec {
    #[must_use]
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// Builds a polygon from `(axis1, axis2)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self::new(pairs.iter().map(|&(a, b)| Coordinate::new(a, b)).collect())
    }
}

/// A closed boundary, points in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    points: Vec<Point2>,
}

impl Ring {
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of points, closing point included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if the ring has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positive for counter-clockwise rings.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

impl From<&PolygonSpec> for Ring {
    fn from(spec: &PolygonSpec) -> Self {
        Self::new(spec.coordinates.iter().copied().map(Point2::from).collect())
    }
}

/// A field boundary: one outer ring and any number of holes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    outer: Ring,
    inner: Vec<Ring>,
}

impl Field {
    /// Assembles a field from already validated rings.
    pub(crate) fn from_rings(outer: Ring, inner: Vec<Ring>) -> Self {
        Self { outer, inner }
    }

    #[must_use]
    pub fn outer(&self) -> &Ring {
        &self.outer
    }

    /// Holes in supply order.
    #[must_use]
    pub fn inner(&self) -> &[Ring] {
        &self.inner
    }

    /// Number of rings, outer included.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        1 + self.inner.len()
    }

    /// Ring by index: `0` is the outer ring, `i > 0` is hole `i - 1`.
    #[must_use]
    pub fn geometry(&self, index: usize) -> Option<&Ring> {
        match index {
            0 => Some(&self.outer),
            i => self.inner.get(i - 1),
        }
    }

    /// Outer area minus the area of every hole.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.outer.area() - self.inner.iter().map(Ring::area).sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn square(min: f64, max: f64) -> Ring {
        Ring::from(&PolygonSpec::from_pairs(&[
            (min, min),
            (max, min),
            (max, max),
            (min, max),
            (min, min),
        ]))
    }

    #[test]
    fn ring_from_spec_keeps_order_and_closing_point() {
        let ring = square(0.0, 1.0);
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.points()[1], Point2::new(1.0, 0.0));
        assert_eq!(ring.points()[0], ring.points()[4]);
    }

    #[test]
    fn ring_area_sign_follows_winding() {
        let ccw = square(0.0, 2.0);
        assert_relative_eq!(ccw.signed_area(), 4.0);
        let cw = Ring::new(ccw.points().iter().rev().copied().collect());
        assert_relative_eq!(cw.signed_area(), -4.0);
        assert_relative_eq!(cw.area(), 4.0);
    }

    #[test]
    fn geometry_indexing() {
        let field = Field::from_rings(square(0.0, 10.0), vec![square(2.0, 4.0)]);
        assert_eq!(field.ring_count(), 2);
        assert_eq!(field.geometry(0), Some(field.outer()));
        assert_eq!(field.geometry(1), field.inner().first());
        assert_eq!(field.geometry(2), None);
    }

    #[test]
    fn field_area_subtracts_holes() {
        let field = Field::from_rings(
            square(0.0, 10.0),
            vec![square(1.0, 3.0), square(5.0, 8.0)],
        );
        assert_relative_eq!(field.area(), 100.0 - 4.0 - 9.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    #[allow(clippy::unwrap_used)]
    fn field_serde_round_trip() {
        let field = Field::from_rings(square(0.0, 10.0), vec![square(2.0, 4.0)]);
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(serde_json::from_str::<Field>(&json).unwrap(), field);
    }
}
