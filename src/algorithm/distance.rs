//! Exit selection and multi-source BFS distance fields
//!
//! The potential field assigns every cell its step count to the nearest exit.
//! Exits are border cells, so following a strictly descending field always
//! leaves the board.

use std::collections::VecDeque;

use ndarray::Array2;

use crate::math::random::RandomSource;
use crate::spatial::{Direction, Position};

/// Distance recorded for cells no exit can reach
pub const UNREACHABLE: u32 = u32::MAX;

/// Shortest step count from every cell to the nearest exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    /// Distances indexed `[y, x]`
    distances: Array2<u32>,
}

impl DistanceField {
    /// Run a multi-source BFS from `exits` over a `width × height` grid
    ///
    /// Exits outside the grid are ignored. Edges have unit weight, so the first
    /// visit of a cell already carries its minimum distance.
    pub fn compute(width: usize, height: usize, exits: &[Position]) -> Self {
        let mut distances = Array2::from_elem((height, width), UNREACHABLE);
        let mut queue = VecDeque::with_capacity(width * height);

        for &[x, y] in exits {
            if let Some(distance) = distances.get_mut([y, x]) {
                *distance = 0;
                queue.push_back([x, y]);
            }
        }

        while let Some(position) = queue.pop_front() {
            let Some(current) = distances.get([position[1], position[0]]).copied() else {
                continue;
            };
            let next_distance = current.saturating_add(1);

            for direction in Direction::ALL {
                let [dx, dy] = direction.offset();
                let nx = position[0] as i32 + dx;
                let ny = position[1] as i32 + dy;
                if nx < 0 || ny < 0 {
                    continue;
                }
                let neighbor = [nx as usize, ny as usize];
                if let Some(distance) = distances.get_mut([neighbor[1], neighbor[0]]) {
                    if next_distance < *distance {
                        *distance = next_distance;
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        Self { distances }
    }

    /// Distance at `[x, y]`, `None` outside the grid
    pub fn get(&self, position: Position) -> Option<u32> {
        let [x, y] = position;
        self.distances.get([y, x]).copied()
    }

    /// Whether some exit reaches `[x, y]`
    pub fn is_reachable(&self, position: Position) -> bool {
        self.get(position).is_some_and(|distance| distance != UNREACHABLE)
    }

    /// Number of columns covered by the field
    pub fn width(&self) -> usize {
        self.distances.ncols()
    }

    /// Number of rows covered by the field
    pub fn height(&self) -> usize {
        self.distances.nrows()
    }

    /// Largest finite distance in the field
    pub fn max_distance(&self) -> Option<u32> {
        self.distances
            .iter()
            .copied()
            .filter(|&distance| distance != UNREACHABLE)
            .max()
    }
}

/// Border cells in exit-draw order
///
/// Top and bottom rows are interleaved per column, then the left and right
/// columns per interior row. One-row or one-column grids list shared cells
/// twice.
pub fn border_positions(width: usize, height: usize) -> Vec<Position> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut border = Vec::with_capacity(2 * (width + height));
    for x in 0..width {
        border.push([x, 0]);
        border.push([x, height - 1]);
    }
    for y in 1..height.saturating_sub(1) {
        border.push([0, y]);
        border.push([width - 1, y]);
    }
    border
}

/// Fallback exit used when no border cell could be drawn
pub const fn fallback_exit(width: usize) -> Position {
    [width / 2, 0]
}

/// Draw up to `count` border exits without replacement
///
/// Never returns an empty set: when nothing was drawn the fallback exit at
/// the middle of the top row is used.
pub fn pick_exits<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    count: usize,
    rng: &mut R,
) -> Vec<Position> {
    let mut border = border_positions(width, height);
    let mut exits = Vec::with_capacity(count.min(border.len()));

    while exits.len() < count && !border.is_empty() {
        let index = rng.uniform(0..border.len()).min(border.len() - 1);
        exits.push(border.remove(index));
    }

    if exits.is_empty() {
        exits.push(fallback_exit(width));
    }
    exits
}
