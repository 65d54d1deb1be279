//! Direction assignment strategies
//!
//! Three ways to point every arrow on a fresh grid:
//! - gradient descent over a [`DistanceField`] with optional jitter
//! - the deterministic nearest-edge rule
//! - independent uniform draws (repaired afterwards by the cycle resolver)

use crate::algorithm::distance::DistanceField;
use crate::math::random::RandomSource;
use crate::spatial::{Cell, Direction, Grid, Position};

/// Nearest-edge direction for a cell
///
/// Picks the axis whose nearer edge is closer (horizontal on ties), then the
/// nearer edge on that axis (left and top on ties).
pub const fn deterministic_direction(width: usize, height: usize, position: Position) -> Direction {
    let [x, y] = position;
    let dist_left = x;
    let dist_right = width.saturating_sub(1).saturating_sub(x);
    let dist_top = y;
    let dist_bottom = height.saturating_sub(1).saturating_sub(y);

    let min_horizontal = if dist_left < dist_right {
        dist_left
    } else {
        dist_right
    };
    let min_vertical = if dist_top < dist_bottom {
        dist_top
    } else {
        dist_bottom
    };

    if min_horizontal <= min_vertical {
        if dist_left <= dist_right {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if dist_top <= dist_bottom {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Steepest-descent direction over the potential field
///
/// A neighbour off the board wins immediately. Otherwise the neighbour with the
/// strictly smallest distance below the cell's own wins, first in enumeration
/// order on ties; a cell with no lower neighbour keeps `Up`.
pub fn gradient_direction(field: &DistanceField, position: Position) -> Direction {
    let [x, y] = position;
    let mut best = field.get(position).unwrap_or(u32::MAX);
    let mut best_direction = Direction::Up;

    for direction in Direction::ALL {
        let [dx, dy] = direction.offset();
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;
        let neighbor = (nx >= 0 && ny >= 0)
            .then(|| field.get([nx as usize, ny as usize]))
            .flatten();

        match neighbor {
            None => return direction,
            Some(distance) if distance < best => {
                best = distance;
                best_direction = direction;
            }
            Some(_) => {}
        }
    }

    best_direction
}

/// Probability that jitter overrides a gradient direction
pub fn jitter_probability(jitter: usize) -> f64 {
    jitter as f64 / jitter.saturating_add(4) as f64
}

/// Point every cell of `grid` down the potential field
///
/// After the gradient pick, a draw from `0..4 + jitter` below `jitter`
/// replaces the direction with a uniform one. Jittered cells are not checked
/// for cycles. Returns the number of cells whose gradient pick was overridden
/// by jitter.
pub fn assign_gradient_directions<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    field: &DistanceField,
    jitter: usize,
    rng: &mut R,
) -> usize {
    let mut jittered = 0;

    for position in grid.positions() {
        let mut direction = gradient_direction(field, position);

        if jitter > 0 && rng.uniform(0..jitter.saturating_add(4)) < jitter {
            direction = Direction::from_index(rng.uniform(0..4));
            jittered += 1;
        }

        grid.set(position, Cell::Arrow(direction));
    }

    jittered
}

/// Point every cell of `grid` toward its nearest edge
pub fn assign_deterministic_directions(grid: &mut Grid) {
    let (width, height) = (grid.width(), grid.height());
    for position in grid.positions() {
        grid.set(
            position,
            Cell::Arrow(deterministic_direction(width, height, position)),
        );
    }
}

/// Point every cell of `grid` in an independently drawn uniform direction
pub fn assign_random_directions<R: RandomSource + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for position in grid.positions() {
        grid.set(position, Cell::Arrow(Direction::from_index(rng.uniform(0..4))));
    }
}
