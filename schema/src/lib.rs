// Polished Wiki Schema - Shared record definitions
// This crate contains the records produced by the parsers and consumed by the
// merge and render stages of the polished-wiki generator, so every stage
// agrees on one serializable shape.

// Re-export the main types
pub use builds::*;
pub use creature::*;
pub use evolution::*;
pub use moves::*;

pub mod builds;
pub mod creature;
pub mod evolution;
pub mod moves;
