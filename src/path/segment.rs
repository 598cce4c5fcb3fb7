use tracing::debug;

use super::{CoveragePath, Path, PathState, SectionType, Swath, Turn, Waypoint};
use crate::error::PathError;

/// Run category of a validated state. Only two kinds exist; untyped states
/// never get this far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Swath,
    Turn,
}

fn run_kind(index: usize, state: &PathState) -> Result<RunKind, PathError> {
    match state.section {
        SectionType::Swath => Ok(RunKind::Swath),
        SectionType::Turn => Ok(RunKind::Turn),
        SectionType::Unset => Err(PathError::UntypedState { index }),
    }
}

/// Partitions a typed path into alternating swath and turn runs.
///
/// An empty path yields an empty, ordered coverage path that is considered to
/// carry its (zero) turns. Consecutive states of the same type form one run;
/// runs are never merged across a type change.
///
/// # Errors
///
/// Returns [`PathError::UntypedState`] for the first state tagged
/// [`SectionType::Unset`]. No partial result is produced.
pub fn to_coverage_path(path: &Path) -> Result<CoveragePath, PathError> {
    let kinds = path
        .states
        .iter()
        .enumerate()
        .map(|(i, state)| run_kind(i, state))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| debug!(states = path.len(), "rejecting path: {e}"))?;

    let mut swaths = Vec::new();
    let mut turns = Vec::new();
    let mut close_run = |kind: RunKind, run: Vec<Waypoint>| match kind {
        RunKind::Swath => swaths.push(Swath::new(run)),
        RunKind::Turn => turns.push(Turn::new(run)),
    };

    let mut current: Option<(RunKind, Vec<Waypoint>)> = None;
    for (state, kind) in path.states.iter().zip(kinds) {
        if let Some((open, run)) = current.as_mut() {
            if *open == kind {
                run.push(state.waypoint());
                continue;
            }
        }
        if let Some((open, run)) = current.take() {
            close_run(open, run);
        }
        current = Some((kind, vec![state.waypoint()]));
    }
    if let Some((open, run)) = current {
        close_run(open, run);
    }

    debug!(
        states = path.len(),
        swaths = swaths.len(),
        turns = turns.len(),
        "segmented path"
    );

    Ok(CoveragePath {
        swaths,
        turns,
        swaths_ordered: true,
        contains_turns: true,
    })
}

impl CoveragePath {
    /// Wraps precomputed swaths without any turns.
    ///
    /// `ordered` states whether the swaths are already in driving order.
    #[must_use]
    pub fn from_swaths(swaths: Vec<Swath>, ordered: bool) -> Self {
        Self {
            swaths,
            turns: Vec::new(),
            swaths_ordered: ordered,
            contains_turns: false,
        }
    }
}
