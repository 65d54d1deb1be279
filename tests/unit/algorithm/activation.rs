//! Tests for tap resolution

#[cfg(test)]
mod tests {
    use crate::grid_from_rows;
    use arrowboard::algorithm::activation::{ActivationResult, activate};
    use arrowboard::spatial::Cell;

    #[test]
    fn test_off_grid_move_reveals_source() {
        let mut grid = grid_from_rows(&["^^", "^^"]);

        let result = activate(&mut grid, [1, 0]);

        assert!(result.success);
        assert_eq!(result.changed, vec![[1, 0]]);
        assert_eq!(grid.get([1, 0]), Some(Cell::Revealed));
        assert_eq!(grid.get([0, 0]), Some(Cell::Arrow(arrowboard::Direction::Up)));
    }

    // Tests the blocker is cleared before the arrow
    // Verified by revealing the source first
    #[test]
    fn test_blocker_target_reveals_both_in_order() {
        let mut grid = grid_from_rows(&["^#", "^^"]);

        let result = activate(&mut grid, [1, 1]);

        assert!(result.success);
        assert_eq!(result.changed, vec![[1, 0], [1, 1]]);
        assert_eq!(grid.get([1, 0]), Some(Cell::Revealed));
        assert_eq!(grid.get([1, 1]), Some(Cell::Revealed));
    }

    // Tests a blocked arrow fails without touching the board
    #[test]
    fn test_arrow_target_fails() {
        let mut grid = grid_from_rows(&["><"]);
        let before = grid.clone();

        let result = activate(&mut grid, [0, 0]);

        assert_eq!(result, ActivationResult::default());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clear_target_reveals_source() {
        let mut grid = grid_from_rows(&[">.", ">o"]);

        assert_eq!(activate(&mut grid, [0, 0]).changed, vec![[0, 0]]);
        assert_eq!(activate(&mut grid, [0, 1]).changed, vec![[0, 1]]);
        assert_eq!(grid.get([1, 0]), Some(Cell::Empty));
    }

    // Tests taps on non-arrow cells or outside the grid fail
    #[test]
    fn test_non_arrow_and_out_of_bounds_fail() {
        let mut grid = grid_from_rows(&["#o", ".^"]);

        assert!(!activate(&mut grid, [0, 0]).success);
        assert!(!activate(&mut grid, [1, 0]).success);
        assert!(!activate(&mut grid, [0, 1]).success);
        assert!(!activate(&mut grid, [2, 0]).success);
        assert_eq!(grid.get([0, 0]), Some(Cell::Blocker));
    }

    // Tests a revealed arrow cannot be tapped twice
    #[test]
    fn test_second_tap_fails() {
        let mut grid = grid_from_rows(&["^"]);

        assert!(activate(&mut grid, [0, 0]).success);
        assert!(!activate(&mut grid, [0, 0]).success);
    }
}
