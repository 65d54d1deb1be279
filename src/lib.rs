//! Procedural generator for arrow-grid puzzle boards that are solvable by construction
//!
//! Every cell of a board holds an arrow that, when tapped, slides one step in
//! its facing direction. Directions come from a BFS potential field towards
//! border exits, a nearest-edge rule, or uniform randomness repaired by cycle
//! detection. Post-processing adds difficulty (jitter, blockers, biased edges)
//! and a bounded regeneration loop guarantees an immediately playable move.

#![forbid(unsafe_code)]

/// Generation pipeline, solvability checks and the board API
pub mod algorithm;
/// Configuration, errors, CLI and batch reporting
pub mod io;
/// Seeded randomness
pub mod math;
/// Grid, cell and direction types
pub mod spatial;

pub use algorithm::activation::ActivationResult;
pub use algorithm::executor::{
    ArrowMode, Board, BoardConfig, GenerationReport, ensure_playable, generate, try_activate,
};
pub use io::error::{BoardError, Result};
pub use spatial::{Cell, Direction, Grid, Position};
