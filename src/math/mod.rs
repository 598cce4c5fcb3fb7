pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Position plus orientation of a waypoint.
pub type Pose = nalgebra::Isometry3<f64>;

/// Rotation part of a [`Pose`].
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Minimum number of coordinates a boundary ring must carry.
pub const MIN_RING_POINTS: usize = 3;
