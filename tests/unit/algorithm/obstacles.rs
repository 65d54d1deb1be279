//! Tests for random blocker placement

#[cfg(test)]
mod tests {
    use crate::ConstantRandom;
    use arrowboard::algorithm::obstacles::scatter_blockers;
    use arrowboard::io::configuration::MAX_PLACEMENT_ATTEMPTS;
    use arrowboard::math::random::SeededRandom;
    use arrowboard::spatial::{Cell, Direction, Grid};

    #[test]
    fn test_zero_count_places_nothing() {
        let mut grid = Grid::new(3, 3, Cell::Arrow(Direction::Up));
        let mut rng = ConstantRandom::new(0, 0.0);

        assert_eq!(scatter_blockers(&mut grid, 0, &mut rng), 0);
        assert_eq!(rng.draws, 0);
        assert_eq!(grid.count(|cell| cell == Cell::Blocker), 0);
    }

    // Tests the placed count matches the blockers on the board
    #[test]
    fn test_places_requested_blockers() {
        let mut grid = Grid::new(6, 6, Cell::Arrow(Direction::Left));
        let mut rng = SeededRandom::new(21);

        let placed = scatter_blockers(&mut grid, 5, &mut rng);

        assert_eq!(placed, 5);
        assert_eq!(grid.count(|cell| cell == Cell::Blocker), 5);
        assert_eq!(grid.count(Cell::is_arrow), 31);
    }

    // Tests requests beyond the arrow count fill the board and stop
    #[test]
    fn test_count_capped_by_arrows() {
        let mut grid = Grid::new(2, 2, Cell::Arrow(Direction::Up));
        let mut rng = SeededRandom::new(4);

        assert_eq!(scatter_blockers(&mut grid, 10, &mut rng), 4);
        assert_eq!(grid.count(Cell::is_arrow), 0);
    }

    // Tests misses spend attempts and placement gives up after the limit
    // Verified by only counting attempts that land on arrows
    #[test]
    fn test_attempt_limit_bounds_misses() {
        let mut grid = Grid::new(3, 3, Cell::Arrow(Direction::Up));
        grid.set([0, 0], Cell::Revealed);
        let mut rng = ConstantRandom::new(0, 0.0);

        assert_eq!(scatter_blockers(&mut grid, 1, &mut rng), 0);
        assert_eq!(rng.draws, 2 * MAX_PLACEMENT_ATTEMPTS);
        assert_eq!(grid.get([0, 0]), Some(Cell::Revealed));
    }
}
