pub mod error;
pub mod field;
pub mod math;
pub mod path;

#[cfg(test)]
mod test_support;

pub use error::{BoundaryError, PathError, Result, SwathlineError};
pub use field::{build_field, Coordinate, Field, PolygonSpec, Ring};
pub use path::{
    to_coverage_path, to_poses, CoveragePath, Path, PathState, SectionType, Swath, Turn, Waypoint,
};
