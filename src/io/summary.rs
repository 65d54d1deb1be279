//! Aggregate statistics over a batch of generated boards

use std::fmt;

use crate::algorithm::executor::GenerationReport;
use crate::algorithm::regeneration::RegenerationOutcome;

/// Running totals for a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Boards generated
    pub boards: usize,
    /// Boards that ended with an immediate move
    pub solvable: usize,
    /// Boards that needed at least one rebuild and got a move
    pub regenerated: usize,
    /// Boards kept after running out of rebuild attempts
    pub exhausted: usize,
    /// Loops repaired across all boards
    pub cycles_repaired: usize,
    /// Blockers placed across all boards
    pub blockers_placed: usize,
}

impl BatchSummary {
    /// Fold one board's report into the totals
    pub fn record(&mut self, report: &GenerationReport) {
        self.boards += 1;
        if report.solvable {
            self.solvable += 1;
        }
        match report.regeneration {
            RegenerationOutcome::Succeeded { .. } => self.regenerated += 1,
            RegenerationOutcome::Exhausted { .. } => self.exhausted += 1,
            RegenerationOutcome::NotNeeded | RegenerationOutcome::Skipped => {}
        }
        self.cycles_repaired += report.stats.cycles_repaired;
        self.blockers_placed += report.stats.blockers_placed;
    }

    /// Share of boards with an immediate move, `None` for an empty batch
    pub fn solvable_ratio(&self) -> Option<f64> {
        (self.boards > 0).then(|| self.solvable as f64 / self.boards as f64)
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} boards, {} solvable, {} regenerated, {} exhausted, {} cycles repaired, {} blockers",
            self.boards,
            self.solvable,
            self.regenerated,
            self.exhausted,
            self.cycles_repaired,
            self.blockers_placed
        )
    }
}
