//! Tap resolution for arrow cells

use crate::algorithm::solvability::{MoveTarget, move_target};
use crate::spatial::{Grid, Position};

/// Outcome of activating a cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationResult {
    /// Whether the arrow moved
    pub success: bool,
    /// Cells whose state changed, in the order they changed
    pub changed: Vec<Position>,
}

impl ActivationResult {
    const fn failed() -> Self {
        Self {
            success: false,
            changed: Vec::new(),
        }
    }
}

/// Resolve a tap on `position`
///
/// - off the board: the arrow is revealed
/// - into a blocker: the blocker then the arrow are revealed
/// - into an empty or revealed cell: the arrow is revealed
/// - into another arrow: nothing changes and the tap fails
///
/// Tapping a non-arrow cell or a position outside the grid fails.
pub fn activate(grid: &mut Grid, position: Position) -> ActivationResult {
    let Some(target) = move_target(grid, position) else {
        return ActivationResult::failed();
    };

    let mut changed = Vec::with_capacity(2);
    match target {
        MoveTarget::Arrow(_) => return ActivationResult::failed(),
        MoveTarget::Blocker(blocker) => {
            if grid.reveal(blocker) {
                changed.push(blocker);
            }
            if grid.reveal(position) {
                changed.push(position);
            }
        }
        MoveTarget::OffGrid | MoveTarget::Clear(_) => {
            if grid.reveal(position) {
                changed.push(position);
            }
        }
    }

    ActivationResult {
        success: true,
        changed,
    }
}
