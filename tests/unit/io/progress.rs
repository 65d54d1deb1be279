//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use arrowboard::io::progress::ProgressManager;

    // Tests completed boards advance the bar
    // Verified by skipping the increment in complete_board
    #[test]
    fn test_progress_counts_boards() {
        let mut pm = ProgressManager::new();

        pm.initialize(3);
        pm.complete_board(true);
        pm.complete_board(false);

        assert_eq!(pm.completed(), 2);
        assert_eq!(pm.unplayable(), 1);
        pm.finish();
    }

    // Tests re-initialisation resets the counters
    #[test]
    fn test_initialize_resets() {
        let mut pm = ProgressManager::default();

        pm.initialize(2);
        pm.complete_board(false);
        pm.initialize(5);

        assert_eq!(pm.completed(), 0);
        assert_eq!(pm.unplayable(), 0);
        pm.finish();
    }

    #[test]
    fn test_empty_batch() {
        let mut pm = ProgressManager::new();

        pm.initialize(0);
        pm.finish();

        assert_eq!(pm.completed(), 0);
    }
}
