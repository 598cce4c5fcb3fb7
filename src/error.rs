use thiserror::Error;

/// Top-level error type for the swathline crate.
#[derive(Debug, Error)]
pub enum SwathlineError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

/// Errors raised while structuring a planned path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A state carries no swath/turn tag.
    #[error("malformed path: untyped state encountered at index {index}")]
    UntypedState { index: usize },
}

/// Errors raised while building a field from boundary polygons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    #[error("no boundary supplied")]
    NoBoundary,

    #[error("polygon at index {index} has fewer than 3 coordinates ({count} given)")]
    TooFewCoordinates { index: usize, count: usize },

    /// The last coordinate does not coincide with the first. A NaN endpoint
    /// never coincides with anything.
    #[error("polygon at index {index} is not closed: last coordinate does not match the first")]
    NotClosed { index: usize },
}

impl BoundaryError {
    /// Index of the offending polygon, if the error concerns a single polygon.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::NoBoundary => None,
            Self::TooFewCoordinates { index, .. } | Self::NotClosed { index } => Some(*index),
        }
    }
}

/// Convenience type alias for results using [`SwathlineError`].
pub type Result<T> = std::result::Result<T, SwathlineError>;
