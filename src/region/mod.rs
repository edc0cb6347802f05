/*!
 * Shared Region Module
 * System V shared-memory region lifecycle and slot access
 */

pub mod segment;
pub mod types;

// Re-export public API
pub use segment::{RegionMap, SharedRegion};
pub use types::{RegionError, RegionResult};
