//! Random blocker placement

use crate::io::configuration::MAX_PLACEMENT_ATTEMPTS;
use crate::math::random::RandomSource;
use crate::spatial::{Cell, Grid};

/// Convert up to `count` randomly sampled arrows into blockers
///
/// Coordinates are drawn with replacement, x then y, and every draw spends one
/// of [`MAX_PLACEMENT_ATTEMPTS`] whether or not it lands on an arrow. Running
/// out of attempts leaves a partial placement. Returns the number placed.
pub fn scatter_blockers<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    count: usize,
    rng: &mut R,
) -> usize {
    let mut placed = 0;
    let mut attempts = 0;

    while placed < count && attempts < MAX_PLACEMENT_ATTEMPTS {
        let x = rng.uniform(0..grid.width());
        let y = rng.uniform(0..grid.height());

        if grid.get([x, y]).is_some_and(Cell::is_arrow) && grid.set([x, y], Cell::Blocker) {
            placed += 1;
        }
        attempts += 1;
    }

    placed
}
