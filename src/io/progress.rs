//! Progress display for batch generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Boards: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many boards of a batch have been generated
pub struct ProgressManager {
    bar: ProgressBar,
    unplayable: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar, unplayable: 0 }
    }

    /// Set the number of boards in the batch
    pub fn initialize(&mut self, board_count: usize) {
        self.unplayable = 0;
        self.bar.set_length(board_count as u64);
        self.bar.set_position(0);
        self.bar.set_message(String::new());
    }

    /// Record a finished board
    pub fn complete_board(&mut self, playable: bool) {
        if !playable {
            self.unplayable += 1;
            self.bar
                .set_message(format!("{} without a move", self.unplayable));
        }
        self.bar.inc(1);
    }

    /// Boards completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Boards reported without an immediate move
    pub const fn unplayable(&self) -> usize {
        self.unplayable
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
