//! Immediate-move detection
//!
//! An arrow can be cleared right away when the cell it points at is off the
//! board, already clear, or a blocker it can knock out. An arrow pointing at
//! another arrow has to wait for that arrow to move first.

use crate::spatial::{Cell, Grid, Position};

/// What sits one step in front of an arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// The step leaves the board
    OffGrid,
    /// An empty or revealed cell
    Clear(Position),
    /// A blocker that the arrow clears on impact
    Blocker(Position),
    /// Another arrow that stops the move
    Arrow(Position),
}

impl MoveTarget {
    /// Whether an arrow facing this target can be activated right now
    pub const fn is_immediate(self) -> bool {
        !matches!(self, Self::Arrow(_))
    }
}

/// Target of the arrow at `position`, `None` when the cell is not an arrow
pub fn move_target(grid: &Grid, position: Position) -> Option<MoveTarget> {
    let direction = grid.get(position)?.direction()?;
    let Some(target) = grid.neighbor(position, direction) else {
        return Some(MoveTarget::OffGrid);
    };

    match grid.get(target)? {
        Cell::Arrow(_) => Some(MoveTarget::Arrow(target)),
        Cell::Blocker => Some(MoveTarget::Blocker(target)),
        Cell::Empty | Cell::Revealed => Some(MoveTarget::Clear(target)),
    }
}

/// Whether the arrow at `position` can be activated right now
pub fn is_immediate_move(grid: &Grid, position: Position) -> bool {
    move_target(grid, position).is_some_and(MoveTarget::is_immediate)
}

/// Whether any arrow on the board can be activated right now
///
/// Boards without arrows have no moves.
pub fn has_any_immediate_move(grid: &Grid) -> bool {
    grid.positions()
        .any(|position| is_immediate_move(grid, position))
}

/// Every arrow that can be activated right now, in row-major order
pub fn immediate_moves(grid: &Grid) -> Vec<Position> {
    grid.positions()
        .filter(|&position| is_immediate_move(grid, position))
        .collect()
}

/// Number of arrow cells on the board
pub fn count_arrows(grid: &Grid) -> usize {
    grid.count(Cell::is_arrow)
}
