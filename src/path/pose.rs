use nalgebra::Translation3;

use super::{Path, PathState, Swath, Turn, Waypoint};
use crate::math::{Pose, UnitQuaternion};

impl Waypoint {
    /// Pose at this waypoint: translated to `point`, rotated by `angle` about +Z.
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose::from_parts(
            Translation3::new(self.point.x, self.point.y, self.point.z),
            UnitQuaternion::from_euler_angles(0.0, 0.0, self.angle),
        )
    }
}

impl PathState {
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.waypoint().pose()
    }
}

impl Swath {
    #[must_use]
    pub fn poses(&self) -> Vec<Pose> {
        self.waypoints.iter().map(Waypoint::pose).collect()
    }
}

impl Turn {
    #[must_use]
    pub fn poses(&self) -> Vec<Pose> {
        self.waypoints.iter().map(Waypoint::pose).collect()
    }
}

/// Heading (rotation about +Z) of a pose, in `(-π, π]`.
#[must_use]
pub fn yaw(pose: &Pose) -> f64 {
    pose.rotation.euler_angles().2
}

/// Flattens a path into one pose per state, in traversal order.
///
/// Section tags are ignored, so untyped paths are accepted.
#[must_use]
pub fn to_poses(path: &Path) -> Vec<Pose> {
    path.states.iter().map(PathState::pose).collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point3;
    use crate::path::SectionType;

    #[test]
    fn waypoint_pose_keeps_position() {
        let pose = Waypoint::new(Point3::new(1.0, 2.0, 3.0), PI).pose();
        assert_relative_eq!(pose.translation.x, 1.0);
        assert_relative_eq!(pose.translation.y, 2.0);
        assert_relative_eq!(pose.translation.z, 3.0);
    }

    #[test]
    fn yaw_round_trip() {
        let pose = Waypoint::new(Point3::origin(), PI).pose();
        // ±π are the same heading.
        assert!((yaw(&pose).abs() - PI).abs() < 0.01);

        let pose = Waypoint::new(Point3::origin(), FRAC_PI_2).pose();
        assert_relative_eq!(yaw(&pose), FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn pose_rotates_about_z_only() {
        let pose = Waypoint::new(Point3::origin(), FRAC_PI_2).pose();
        let forward = pose.transform_vector(&nalgebra::Vector3::x());
        assert_relative_eq!(forward.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(forward.y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(forward.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn to_poses_accepts_untyped_states() {
        let path = Path::new(vec![PathState::default(); 10]);
        assert_eq!(to_poses(&path).len(), 10);
    }

    #[test]
    fn to_poses_preserves_order() {
        let path = Path::new(vec![
            PathState::new(Point3::new(0.0, 0.0, 0.0), 0.0, SectionType::Swath),
            PathState::new(Point3::new(5.0, 0.0, 0.0), 0.0, SectionType::Turn),
        ]);
        let poses = to_poses(&path);
        assert_relative_eq!(poses[1].translation.x, 5.0);
    }

    #[test]
    fn run_poses() {
        let wp = Waypoint::new(Point3::origin(), 0.0);
        assert_eq!(Swath::new(vec![wp; 4]).poses().len(), 4);
        assert_eq!(Turn::new(vec![wp; 2]).poses().len(), 2);
    }
}
