/// Tap resolution for arrow cells
pub mod activation;
/// Direction assignment from potential fields, rules and randomness
pub mod assignment;
/// Edge-outward bias and orthogonal collision smoothing
pub mod bias;
/// Cycle detection and repair over the arrow successor graph
pub mod cycles;
/// Exit selection and multi-source distance fields
pub mod distance;
/// Board generation pipeline and public board API
pub mod executor;
/// Random blocker placement
pub mod obstacles;
/// Bounded regeneration with progress preservation
pub mod regeneration;
/// Immediate-move detection
pub mod solvability;
