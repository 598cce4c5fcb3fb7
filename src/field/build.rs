use tracing::debug;

use super::{Field, PolygonSpec, Ring};
use crate::error::BoundaryError;
use crate::math::polygon_2d::coincident;
use crate::math::{Point2, MIN_RING_POINTS};

fn validate_polygon(index: usize, polygon: &PolygonSpec) -> Result<(), BoundaryError> {
    let count = polygon.coordinates.len();
    if count < MIN_RING_POINTS {
        return Err(BoundaryError::TooFewCoordinates { index, count });
    }
    let closed = match (polygon.coordinates.first(), polygon.coordinates.last()) {
        (Some(&first), Some(&last)) => coincident(&Point2::from(first), &Point2::from(last)),
        _ => false,
    };
    if !closed {
        return Err(BoundaryError::NotClosed { index });
    }
    Ok(())
}

/// Builds a field from boundary polygons.
///
/// Polygon `0` is the outer boundary; every later polygon is a hole. Each must
/// carry at least [`MIN_RING_POINTS`] coordinates and end where it starts.
/// Rings keep their coordinates exactly as supplied.
///
/// All polygons are validated before any ring is built, so either the whole
/// field is returned or nothing is.
///
/// # Errors
///
/// Returns [`BoundaryError::NoBoundary`] for an empty list, otherwise the
/// error for the lowest-indexed invalid polygon.
pub fn build_field(polygons: &[PolygonSpec]) -> Result<Field, BoundaryError> {
    let Some((outer, inner)) = polygons.split_first() else {
        debug!("rejecting boundary: no polygons");
        return Err(BoundaryError::NoBoundary);
    };

    for (index, polygon) in polygons.iter().enumerate() {
        validate_polygon(index, polygon)
            .inspect_err(|e| debug!(polygons = polygons.len(), "rejecting boundary: {e}"))?;
    }

    let field = Field::from_rings(Ring::from(outer), inner.iter().map(Ring::from).collect());
    debug!(rings = field.ring_count(), "built field");
    Ok(field)
}
