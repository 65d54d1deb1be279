//! Board storage: a fixed-size 2D array of cell states
//!
//! Cells are stored row-major in an `ndarray::Array2` indexed `[y, x]`, while
//! every public accessor takes positions as `[x, y]`. Coordinates outside the
//! grid are the implicit boundary and are reported as `None`, never stored.

use std::fmt;

use ndarray::Array2;

use crate::spatial::direction::Direction;

/// Grid coordinates as `[x, y]`
pub type Position = [usize; 2];

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Directional piece that moves one step when activated
    Arrow(Direction),
    /// Obstacle that absorbs an incoming arrow and is cleared with it
    Blocker,
    /// Inert cell that ends a chain
    Empty,
    /// Cell that used to hold an arrow or blocker and has been cleared
    Revealed,
}

impl Cell {
    /// Direction of an arrow cell, `None` for everything else
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Arrow(direction) => Some(direction),
            _ => None,
        }
    }

    /// Whether this cell is an arrow
    pub const fn is_arrow(self) -> bool {
        matches!(self, Self::Arrow(_))
    }

    /// Empty and revealed cells behave identically for chain resolution
    pub const fn is_clear(self) -> bool {
        matches!(self, Self::Empty | Self::Revealed)
    }

    /// Single-character glyph used by the text dump
    pub const fn glyph(self) -> char {
        match self {
            Self::Arrow(direction) => direction.glyph(),
            Self::Blocker => '#',
            Self::Empty => '.',
            Self::Revealed => 'o',
        }
    }
}

/// Rectangular board of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a `width × height` grid with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: Cell) -> Self {
        Self {
            cells: Array2::from_elem((height, width), fill),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether a signed coordinate lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Cell at `[x, y]`, `None` outside the grid
    pub fn get(&self, position: Position) -> Option<Cell> {
        let [x, y] = position;
        self.cells.get([y, x]).copied()
    }

    /// Overwrite the cell at `[x, y]`
    ///
    /// Returns whether the stored state changed; out-of-bounds writes are ignored.
    pub fn set(&mut self, position: Position, cell: Cell) -> bool {
        let [x, y] = position;
        match self.cells.get_mut([y, x]) {
            Some(slot) if *slot != cell => {
                *slot = cell;
                true
            }
            _ => false,
        }
    }

    /// Point an existing arrow in a new direction
    ///
    /// Non-arrow cells are left untouched. Returns whether the direction changed.
    pub fn set_direction(&mut self, position: Position, direction: Direction) -> bool {
        match self.get(position) {
            Some(Cell::Arrow(_)) => self.set(position, Cell::Arrow(direction)),
            _ => false,
        }
    }

    /// Mark a cell as revealed, returning whether its state changed
    pub fn reveal(&mut self, position: Position) -> bool {
        self.set(position, Cell::Revealed)
    }

    /// Neighbour one step from `position`, `None` when the step leaves the grid
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let [dx, dy] = direction.offset();
        let x = position[0] as i32 + dx;
        let y = position[1] as i32 + dy;
        self.contains(x, y).then_some([x as usize, y as usize])
    }

    /// Steps from `position` to the nearest grid edge
    pub fn edge_distance(&self, position: Position) -> usize {
        edge_distance(self.width(), self.height(), position)
    }

    /// Whether the cell touches at least one grid edge
    pub fn is_boundary(&self, position: Position) -> bool {
        self.get(position).is_some() && self.edge_distance(position) == 0
    }

    /// All positions in row-major order (y outer, x inner)
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width();
        let height = self.height();
        (0..height).flat_map(move |y| (0..width).map(move |x| [x, y]))
    }

    /// Positions of every arrow cell in row-major order
    pub fn arrow_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|&position| self.get(position).is_some_and(Cell::is_arrow))
            .collect()
    }

    /// Number of cells matching a predicate
    pub fn count(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|&&cell| predicate(cell)).count()
    }
}

/// Steps from `position` to the nearest edge of a `width × height` grid
///
/// Computed as `min(x, width - 1 - x, y, height - 1 - y)`.
pub fn edge_distance(width: usize, height: usize, position: Position) -> usize {
    let [x, y] = position;
    let horizontal = x.min(width.saturating_sub(1).saturating_sub(x));
    let vertical = y.min(height.saturating_sub(1).saturating_sub(y));
    horizontal.min(vertical)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
