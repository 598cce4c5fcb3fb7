pub mod pose;
pub mod segment;

pub use pose::{to_poses, yaw};
pub use segment::to_coverage_path;

use crate::math::Point3;

/// Which part of a coverage plan a path state belongs to.
///
/// A planner that never tagged a state leaves it [`SectionType::Unset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionType {
    #[default]
    Unset,
    Swath,
    Turn,
}

/// A single positioned, oriented and tagged state of a planned path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathState {
    pub point: Point3,
    /// Heading in radians.
    pub angle: f64,
    pub section: SectionType,
}

impl PathState {
    /// Creates a new path state.
    #[must_use]
    pub fn new(point: Point3, angle: f64, section: SectionType) -> Self {
        Self {
            point,
            angle,
            section,
        }
    }

    /// Returns the state without its section tag.
    #[must_use]
    pub fn waypoint(&self) -> Waypoint {
        Waypoint::new(self.point, self.angle)
    }
}

impl Default for PathState {
    fn default() -> Self {
        Self::new(Point3::origin(), 0.0, SectionType::Unset)
    }
}

/// An ordered sequence of path states; insertion order is traversal order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub states: Vec<PathState>,
}

impl Path {
    /// Creates a path from its states.
    #[must_use]
    pub fn new(states: Vec<PathState>) -> Self {
        Self { states }
    }

    /// Number of states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// `true` if the path has no states.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// A position plus heading along a swath or turn.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub point: Point3,
    /// Heading in radians.
    pub angle: f64,
}

impl Waypoint {
    /// Creates a new waypoint.
    #[must_use]
    pub fn new(point: Point3, angle: f64) -> Self {
        Self { point, angle }
    }
}

/// Sum of straight-line distances between consecutive waypoints.
fn polyline_length(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|w| (w[1].point - w[0].point).norm())
        .sum()
}

/// One working pass of a coverage path.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swath {
    pub waypoints: Vec<Waypoint>,
}

impl Swath {
    /// Creates a swath from its waypoints.
    #[must_use]
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// `true` if there are no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Travelled distance along the swath.
    #[must_use]
    pub fn length(&self) -> f64 {
        polyline_length(&self.waypoints)
    }
}

/// A maneuver connecting two swaths.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub waypoints: Vec<Waypoint>,
}

impl Turn {
    /// Creates a turn from its waypoints.
    #[must_use]
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// `true` if there are no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Travelled distance along the maneuver.
    #[must_use]
    pub fn length(&self) -> f64 {
        polyline_length(&self.waypoints)
    }
}

/// Structured coverage path: swaths, the turns between them and how far the
/// swaths can be trusted to be in driving order.
///
/// When `contains_turns` is `false`, `turns` is empty and swath adjacency is
/// implicit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoveragePath {
    pub swaths: Vec<Swath>,
    pub turns: Vec<Turn>,
    pub swaths_ordered: bool,
    pub contains_turns: bool,
}

impl CoveragePath {
    /// Total number of waypoints across all swaths and turns.
    #[must_use]
    pub fn waypoint_count(&self) -> usize {
        self.swaths.iter().map(Swath::len).sum::<usize>()
            + self.turns.iter().map(Turn::len).sum::<usize>()
    }
}
