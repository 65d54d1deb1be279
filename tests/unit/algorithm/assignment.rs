//! Tests for gradient, deterministic and random direction assignment

#[cfg(test)]
mod tests {
    use crate::{ConstantRandom, chain_exits};
    use arrowboard::algorithm::assignment::{
        assign_deterministic_directions, assign_gradient_directions, assign_random_directions,
        deterministic_direction, gradient_direction, jitter_probability,
    };
    use arrowboard::algorithm::distance::{DistanceField, pick_exits};
    use arrowboard::math::random::SeededRandom;
    use arrowboard::spatial::{Cell, Direction, Grid};

    // Tests the nearest-edge rule on a 6x6 board, including both tie breaks
    // Verified by changing `min_horizontal <= min_vertical` to `<`
    #[test]
    fn test_deterministic_direction_rule() {
        assert_eq!(deterministic_direction(6, 6, [0, 2]), Direction::Left);
        assert_eq!(deterministic_direction(6, 6, [5, 2]), Direction::Right);
        assert_eq!(deterministic_direction(6, 6, [2, 0]), Direction::Up);
        assert_eq!(deterministic_direction(6, 6, [3, 5]), Direction::Down);
        // Axis tie favours horizontal, edge tie favours left
        assert_eq!(deterministic_direction(6, 6, [2, 2]), Direction::Left);
        assert_eq!(deterministic_direction(5, 5, [2, 2]), Direction::Left);
        assert_eq!(deterministic_direction(6, 6, [3, 3]), Direction::Right);
        assert_eq!(deterministic_direction(6, 6, [3, 1]), Direction::Up);
        assert_eq!(deterministic_direction(6, 6, [2, 4]), Direction::Down);
    }

    // Tests every boundary cell of a deterministic board points off the board
    #[test]
    fn test_deterministic_boundary_points_outward() {
        let mut grid = Grid::new(6, 6, Cell::Empty);
        assign_deterministic_directions(&mut grid);

        for position in grid.positions() {
            if grid.is_boundary(position) {
                let direction = grid.get(position).and_then(Cell::direction);
                let target = direction.and_then(|d| grid.neighbor(position, d));
                assert_eq!(target, None, "boundary cell {position:?} points inward");
            }
            assert!(chain_exits(&grid, position, 12));
        }
    }

    // Tests an off-board neighbour wins over any in-grid descent
    // Verified by removing the early return for off-board neighbours
    #[test]
    fn test_gradient_prefers_leaving_the_board() {
        let field = DistanceField::compute(4, 4, &[[0, 0]]);

        assert_eq!(gradient_direction(&field, [2, 0]), Direction::Up);
        assert_eq!(gradient_direction(&field, [0, 2]), Direction::Left);
        assert_eq!(gradient_direction(&field, [3, 2]), Direction::Right);
        assert_eq!(gradient_direction(&field, [2, 3]), Direction::Down);
    }

    // Tests interior cells descend with first-in-order tie breaking
    #[test]
    fn test_gradient_descends_interior() {
        let field = DistanceField::compute(4, 4, &[[0, 0]]);

        // Up and Left both reach distance 1; Up comes first
        assert_eq!(gradient_direction(&field, [1, 1]), Direction::Up);

        let east_field = DistanceField::compute(5, 5, &[[4, 2]]);
        assert_eq!(gradient_direction(&east_field, [2, 2]), Direction::Right);
    }

    #[test]
    fn test_jitter_probability() {
        assert!(jitter_probability(0).abs() < f64::EPSILON);
        assert!((jitter_probability(4) - 0.5).abs() < f64::EPSILON);
        assert!((jitter_probability(2) - 1.0 / 3.0).abs() < 1e-12);
    }

    // Tests a jitter-free field consumes no draws and every chain leaves the board
    // Verified by drawing the jitter check even when jitter is zero
    #[test]
    fn test_gradient_without_jitter_is_acyclic() {
        let mut seeded = SeededRandom::new(5);
        let exits = pick_exits(8, 7, 3, &mut seeded);
        let field = DistanceField::compute(8, 7, &exits);
        let mut grid = Grid::new(8, 7, Cell::Arrow(Direction::Up));
        let mut rng = ConstantRandom::new(0, 0.0);

        let jittered = assign_gradient_directions(&mut grid, &field, 0, &mut rng);

        assert_eq!(jittered, 0);
        assert_eq!(rng.draws, 0);
        for position in grid.positions() {
            assert!(chain_exits(&grid, position, 8 * 7));
        }
    }

    // Tests jitter overrides the gradient when the draw falls below the weight
    #[test]
    fn test_jitter_overrides_with_uniform_direction() {
        let field = DistanceField::compute(3, 3, &[[0, 0]]);
        let mut grid = Grid::new(3, 3, Cell::Empty);
        // Every draw returns the range start: jitter check passes, direction index 0
        let mut rng = ConstantRandom::new(0, 0.0);

        let jittered = assign_gradient_directions(&mut grid, &field, 2, &mut rng);

        assert_eq!(jittered, 9);
        assert_eq!(rng.draws, 18);
        assert_eq!(grid.count(|cell| cell == Cell::Arrow(Direction::Up)), 9);
    }

    #[test]
    fn test_jitter_draw_above_weight_keeps_gradient() {
        let field = DistanceField::compute(3, 3, &[[0, 0]]);
        let mut grid = Grid::new(3, 3, Cell::Empty);
        let mut rng = ConstantRandom::new(usize::MAX / 2, 0.0);

        let jittered = assign_gradient_directions(&mut grid, &field, 2, &mut rng);

        assert_eq!(jittered, 0);
        assert_eq!(rng.draws, 9);
        assert_eq!(grid.get([1, 1]), Some(Cell::Arrow(Direction::Up)));
    }

    // Tests an oversized jitter weight saturates instead of overflowing
    // Verified by reverting to `4 + jitter`
    #[test]
    fn test_jitter_weight_saturates() {
        let field = DistanceField::compute(3, 3, &[[0, 0]]);
        let mut grid = Grid::new(3, 3, Cell::Empty);
        let mut rng = ConstantRandom::new(0, 0.0);

        let jittered = assign_gradient_directions(&mut grid, &field, usize::MAX, &mut rng);

        assert_eq!(jittered, 9);
        assert!(jitter_probability(usize::MAX) <= 1.0);
        assert!(jitter_probability(usize::MAX) > 0.99);
    }

    #[test]
    fn test_random_directions_use_one_draw_per_cell() {
        let mut grid = Grid::new(4, 2, Cell::Empty);
        let mut rng = ConstantRandom::new(3, 0.0);

        assign_random_directions(&mut grid, &mut rng);

        assert_eq!(rng.draws, 8);
        assert_eq!(grid.count(|cell| cell == Cell::Arrow(Direction::Right)), 8);
    }
}
