//! Spatial data structures for the board
//!
//! This module contains:
//! - Cardinal directions and their displacements
//! - The cell grid with bounds-checked accessors and mutators

/// Arrow directions and displacement vectors
pub mod direction;
/// Grid storage, cell states and edge distance helpers
pub mod grid;

pub use direction::Direction;
pub use grid::{Cell, Grid, Position};
