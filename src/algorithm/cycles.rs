//! Cycle detection and repair over the arrow successor graph
//!
//! Every arrow has exactly one successor (the cell it points at, or the
//! outside of the board), so the arrows form a functional graph. A walk from
//! any arrow either leaves the board, reaches a cell whose fate is already
//! known, or closes a loop. Walks are iterative with an explicit path stack and
//! a three-state status per cell.

use ndarray::Array2;

use crate::spatial::grid::edge_distance;
use crate::spatial::{Cell, Direction, Grid, Position};

/// Walk status of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitStatus {
    /// Not reached by any walk yet
    Unvisited,
    /// On the path of the walk in progress
    InProgress,
    /// Known to lead off the board or into resolved territory
    Done,
}

/// Summary of a resolver pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleRepairReport {
    /// Number of loops closed by walks during the pass
    pub cycles_found: usize,
    /// Arrows rewritten to break loops, in repair order
    pub repaired: Vec<Position>,
}

/// Direction that best moves `position` toward the board edge
///
/// Leaving the board scores highest. Otherwise the score is the drop in
/// distance to the nearest edge; ties keep the first direction in enumeration
/// order.
pub fn outward_direction(width: usize, height: usize, position: Position) -> Direction {
    let [x, y] = position;
    let before = edge_distance(width, height, position) as i64;
    let mut best = Direction::Up;
    let mut best_score = i64::MIN;

    for direction in Direction::ALL {
        let [dx, dy] = direction.offset();
        let nx = x as i64 + i64::from(dx);
        let ny = y as i64 + i64::from(dy);
        let inside = nx >= 0 && ny >= 0 && (nx as usize) < width && (ny as usize) < height;

        let score = if inside {
            before - edge_distance(width, height, [nx as usize, ny as usize]) as i64
        } else {
            i64::MAX
        };

        if score > best_score {
            best_score = score;
            best = direction;
        }
    }

    best
}

/// Rewrite the arrow at `position` to face [`outward_direction`]
///
/// Returns the new direction, or `None` when the cell is not an arrow.
pub fn redirect_outward(grid: &mut Grid, position: Position) -> Option<Direction> {
    grid.get(position).and_then(Cell::direction)?;
    let direction = outward_direction(grid.width(), grid.height(), position);
    grid.set_direction(position, direction);
    Some(direction)
}

/// Iterative three-state walker over the arrow successor graph
#[derive(Debug, Clone)]
pub struct CycleResolver {
    /// Per-cell walk status indexed `[y, x]`
    status: Array2<VisitStatus>,
    /// Cells of the current walk in visiting order
    path: Vec<Position>,
}

impl CycleResolver {
    /// Create a resolver sized for `grid`
    pub fn new(grid: &Grid) -> Self {
        Self {
            status: Array2::from_elem((grid.height(), grid.width()), VisitStatus::Unvisited),
            path: Vec::with_capacity(grid.width() * grid.height()),
        }
    }

    /// Walk status of a cell, `None` outside the grid
    pub fn status(&self, position: Position) -> Option<VisitStatus> {
        let [x, y] = position;
        self.status.get([y, x]).copied()
    }

    /// Number of cells in a given status
    pub fn count(&self, status: VisitStatus) -> usize {
        self.status.iter().filter(|&&s| s == status).count()
    }

    /// Detect loops and rewrite one arrow per loop so every chain leaves the board
    ///
    /// The rewritten arrow is the most recently pushed cell of the loop; if that
    /// cell already faces its outward direction, the next cell back along the
    /// loop is taken instead. The walk then continues from the rewritten arrow,
    /// so a chain that would close a new loop through it is caught in the same
    /// pass.
    pub fn resolve(&mut self, grid: &mut Grid) -> CycleRepairReport {
        self.run(grid, true)
    }

    /// Count loops without modifying the grid
    pub fn detect(&mut self, grid: &Grid) -> usize {
        let mut scratch = grid.clone();
        self.run(&mut scratch, false).cycles_found
    }

    fn run(&mut self, grid: &mut Grid, repair: bool) -> CycleRepairReport {
        self.status.fill(VisitStatus::Unvisited);
        let mut report = CycleRepairReport::default();

        for start in grid.positions() {
            if !grid.get(start).is_some_and(Cell::is_arrow)
                || self.status(start) != Some(VisitStatus::Unvisited)
            {
                continue;
            }

            self.path.clear();
            let mut current = Some(start);

            loop {
                let Some(position) = current else {
                    // Walked off the board
                    self.finish_path();
                    break;
                };

                match self.status(position) {
                    Some(VisitStatus::Unvisited) => {}
                    Some(VisitStatus::InProgress) => {
                        report.cycles_found += 1;
                        let fixed = if repair {
                            self.repair_loop(grid, position)
                        } else {
                            None
                        };

                        match fixed {
                            Some((index, cell)) => {
                                report.repaired.push(cell);
                                self.rewind_to(index);
                                current = grid
                                    .get(cell)
                                    .and_then(Cell::direction)
                                    .and_then(|direction| grid.neighbor(cell, direction));
                                continue;
                            }
                            None => {
                                self.finish_path();
                                break;
                            }
                        }
                    }
                    Some(VisitStatus::Done) | None => {
                        self.finish_path();
                        break;
                    }
                }

                let Some(direction) = grid.get(position).and_then(Cell::direction) else {
                    // Non-arrow cells end a chain
                    self.finish_path();
                    break;
                };

                self.set_status(position, VisitStatus::InProgress);
                self.path.push(position);
                current = grid.neighbor(position, direction);
            }
        }

        report
    }

    /// Rewrite one arrow of the loop that re-enters the path at `entry`
    ///
    /// Returns the path index and position of the rewritten arrow.
    fn repair_loop(&self, grid: &mut Grid, entry: Position) -> Option<(usize, Position)> {
        let loop_start = self.path.iter().position(|&cell| cell == entry)?;
        let (width, height) = (grid.width(), grid.height());

        let (offset, cell) = self
            .path
            .get(loop_start..)?
            .iter()
            .enumerate()
            .rev()
            .find(|&(_, &cell)| {
                grid.get(cell).and_then(Cell::direction)
                    != Some(outward_direction(width, height, cell))
            })?;

        let cell = *cell;
        redirect_outward(grid, cell)?;
        Some((loop_start + offset, cell))
    }

    /// Drop path cells above `index`, returning them to the unvisited pool
    fn rewind_to(&mut self, index: usize) {
        while self.path.len() > index + 1 {
            if let Some(cell) = self.path.pop() {
                self.set_status(cell, VisitStatus::Unvisited);
            }
        }
    }

    fn finish_path(&mut self) {
        for index in 0..self.path.len() {
            if let Some(&cell) = self.path.get(index) {
                self.set_status(cell, VisitStatus::Done);
            }
        }
        self.path.clear();
    }

    fn set_status(&mut self, position: Position, status: VisitStatus) {
        let [x, y] = position;
        if let Some(slot) = self.status.get_mut([y, x]) {
            *slot = status;
        }
    }
}

/// Repair every loop in `grid` in a single resolver pass
pub fn fix_arrow_cycles(grid: &mut Grid) -> CycleRepairReport {
    CycleResolver::new(grid).resolve(grid)
}

/// Count loops in `grid` without modifying it
pub fn count_cycles(grid: &Grid) -> usize {
    CycleResolver::new(grid).detect(grid)
}
