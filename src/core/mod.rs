/*!
 * Core Module
 * Common types, limits, and errors shared across the crate
 */

pub mod errors;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use errors::RunError;
pub use types::{RunResult, WorkerId, EXIT_FAILURE, EXIT_SUCCESS};
