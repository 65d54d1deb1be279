//! Bounded regeneration with progress preservation
//!
//! When a board has no immediate move it is rebuilt from a derived seed. The
//! fresh board is trimmed back to the arrow count the player had left, so a
//! rebuild never hands back a harder board than the one it replaces.

use log::{debug, info, warn};

use crate::algorithm::solvability::{count_arrows, has_any_immediate_move};
use crate::io::configuration::REGENERATION_SEED_SPREAD;
use crate::math::random::RandomSource;
use crate::spatial::{Grid, Position};

/// Lifecycle of a board's generator
///
/// Regeneration may only start from `Idle`. Rebuilds performed while
/// `Regenerating` run the plain pipeline and cannot trigger another round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationPhase {
    /// No generation work in flight
    #[default]
    Idle,
    /// Running the first pipeline pass for a new board
    Generating,
    /// Rebuilding boards until one has a move
    Regenerating,
}

impl GenerationPhase {
    /// Whether a regeneration round may begin
    pub const fn can_regenerate(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// How the last regeneration round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegenerationOutcome {
    /// The board already had a move
    #[default]
    NotNeeded,
    /// Regeneration is disabled or was not allowed in the current phase
    Skipped,
    /// A rebuilt board has a move
    Succeeded {
        /// Attempts used, including the successful one
        attempts: usize,
        /// Seed of the accepted board
        seed: u64,
    },
    /// Every attempt failed; the last rebuilt board was kept anyway
    Exhausted {
        /// Attempts used
        attempts: usize,
    },
}

impl RegenerationOutcome {
    /// Whether the round ended with a playable board
    pub const fn is_playable(self) -> bool {
        matches!(self, Self::NotNeeded | Self::Succeeded { .. })
    }
}

/// Result of a regeneration round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerationReport {
    /// How the round ended
    pub outcome: RegenerationOutcome,
    /// Seed the board should carry afterwards (restored on exhaustion)
    pub seed: u64,
    /// Arrow count the rebuilt boards were trimmed to
    pub target_arrows: usize,
}

/// Seed for attempt `attempt` of a round that started from `start_seed`
pub const fn derive_seed(start_seed: u64, attempt: usize, offset: usize) -> u64 {
    start_seed
        .wrapping_add(1)
        .wrapping_add(attempt as u64)
        .wrapping_add(offset as u64)
}

/// Reveal random arrows until at most `target` remain
///
/// Only arrows are touched and they become revealed, never blockers. Returns
/// the revealed positions in the order they were drawn.
pub fn trim_arrows_to_count<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    target: usize,
    rng: &mut R,
) -> Vec<Position> {
    let mut arrows = grid.arrow_positions();
    if arrows.len() <= target {
        return Vec::new();
    }

    let to_remove = arrows.len() - target;
    let mut revealed = Vec::with_capacity(to_remove);
    while revealed.len() < to_remove && !arrows.is_empty() {
        let index = rng.uniform(0..arrows.len()).min(arrows.len() - 1);
        let position = arrows.remove(index);
        if grid.reveal(position) {
            revealed.push(position);
        }
    }
    revealed
}

/// Rebuilds unplayable boards within a fixed attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerationController {
    max_attempts: usize,
}

impl RegenerationController {
    /// Create a controller allowing `max_attempts` rebuilds per round
    pub const fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Attempt budget per round
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Rebuild `grid` until it has an immediate move or the budget runs out
    ///
    /// `rebuild` must reseed `rng` with the given seed and run one full
    /// pipeline pass. Seed offsets and trims draw from `rng` in between. On
    /// exhaustion the last rebuilt grid is kept and `start_seed` is reported
    /// back so repeated failures do not drift the seed.
    pub fn run<R, F>(
        &self,
        grid: &mut Grid,
        start_seed: u64,
        rng: &mut R,
        mut rebuild: F,
    ) -> RegenerationReport
    where
        R: RandomSource + ?Sized,
        F: FnMut(u64, &mut R) -> Grid,
    {
        let target_arrows = count_arrows(grid);

        if has_any_immediate_move(grid) {
            return RegenerationReport {
                outcome: RegenerationOutcome::NotNeeded,
                seed: start_seed,
                target_arrows,
            };
        }

        for attempt in 0..self.max_attempts {
            let offset = rng.uniform(0..REGENERATION_SEED_SPREAD);
            let seed = derive_seed(start_seed, attempt, offset);
            debug!(
                "Regeneration attempt {}/{}, seed={seed}",
                attempt + 1,
                self.max_attempts
            );

            *grid = rebuild(seed, rng);
            let trimmed = trim_arrows_to_count(grid, target_arrows, rng);
            if !trimmed.is_empty() {
                debug!(
                    "Trimmed {} arrows to keep {target_arrows} in play",
                    trimmed.len()
                );
            }

            if has_any_immediate_move(grid) {
                info!("Regenerated playable board after {} attempt(s)", attempt + 1);
                return RegenerationReport {
                    outcome: RegenerationOutcome::Succeeded {
                        attempts: attempt + 1,
                        seed,
                    },
                    seed,
                    target_arrows,
                };
            }
        }

        warn!(
            "Regeneration exhausted {} attempt(s) without an immediate move; keeping last layout",
            self.max_attempts
        );
        RegenerationReport {
            outcome: RegenerationOutcome::Exhausted {
                attempts: self.max_attempts,
            },
            seed: start_seed,
            target_arrows,
        }
    }
}
