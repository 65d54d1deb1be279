/// Command-line interface and batch generation driver
pub mod cli;
/// Default parameters and hard limits
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Batch progress display
pub mod progress;
/// Aggregate statistics over generated boards
pub mod summary;
