//! Post-processing passes for randomly directed boards

use crate::algorithm::assignment::deterministic_direction;
use crate::math::random::RandomSource;
use crate::spatial::{Cell, Direction, Grid, Position};

/// Turn border arrows to face off the board with probability `probability`
///
/// Visits the top then bottom cell of every column, then the left then right
/// cell of every interior row. Each arrow visited consumes one draw; other
/// cells consume none. Returns the number of arrows rewritten.
pub fn apply_edge_outward_bias<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    probability: f64,
    rng: &mut R,
) -> usize {
    if probability.is_nan() || probability <= 0.0 {
        return 0;
    }

    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return 0;
    }

    let mut visits: Vec<(Position, Direction)> = Vec::with_capacity(2 * (width + height));
    for x in 0..width {
        visits.push(([x, 0], Direction::Up));
        visits.push(([x, height - 1], Direction::Down));
    }
    for y in 1..height - 1 {
        visits.push(([0, y], Direction::Left));
        visits.push(([width - 1, y], Direction::Right));
    }

    let mut rewritten = 0;
    for (position, outward) in visits {
        if !grid.get(position).is_some_and(Cell::is_arrow) {
            continue;
        }
        if rng.unit() < probability && grid.set_direction(position, outward) {
            rewritten += 1;
        }
    }
    rewritten
}

/// Replace arrows that point into a perpendicular arrow
///
/// A single row-major pass: the offending arrow takes the nearest-edge
/// direction. Rewritten cells are not revisited, so a rewrite may leave a new
/// perpendicular pair behind. Returns the number of arrows rewritten.
pub fn resolve_orthogonal_collisions(grid: &mut Grid) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let mut rewritten = 0;

    for position in grid.positions() {
        let Some(direction) = grid.get(position).and_then(Cell::direction) else {
            continue;
        };
        let Some(ahead) = grid
            .neighbor(position, direction)
            .and_then(|target| grid.get(target))
            .and_then(Cell::direction)
        else {
            continue;
        };

        if direction.is_perpendicular_to(ahead)
            && grid.set_direction(position, deterministic_direction(width, height, position))
        {
            rewritten += 1;
        }
    }

    rewritten
}
