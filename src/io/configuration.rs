//! Generation constants and runtime configuration defaults

// Board shape
/// Default number of columns
pub const DEFAULT_WIDTH: usize = 6;
/// Default number of rows
pub const DEFAULT_HEIGHT: usize = 6;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 0;

/// Number of border exits seeded into the potential field
pub const DEFAULT_EXIT_COUNT: usize = 4;

/// Jitter weight for the potential field (0 = pure gradient descent)
pub const DEFAULT_NOISE_JITTER: usize = 2;

/// Largest accepted jitter weight
pub const MAX_NOISE_JITTER: usize = 5;

/// Blockers scattered after directions are assigned
pub const DEFAULT_BLOCKER_COUNT: usize = 0;

/// Chance that a border arrow is turned to face off the board
pub const DEFAULT_EDGE_OUTWARD_PROBABILITY: f64 = 0.5;

/// Regeneration attempts before accepting a board without a move
pub const DEFAULT_REGENERATE_ATTEMPTS: usize = 8;

/// Upper bound accepted for regeneration attempts
pub const MAX_REGENERATE_ATTEMPTS: usize = 50;

// Obstacle placement samples with replacement and gives up after this many draws
/// Maximum coordinate draws spent placing blockers
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Exclusive upper bound of the random offset added to derived regeneration seeds
pub const REGENERATION_SEED_SPREAD: usize = 9999;

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
