/*!
 * Error Types
 * Centralized error handling with thiserror
 */

use thiserror::Error;

// Re-export subsystem errors
pub use crate::input::InputError;
pub use crate::proc::SpawnError;
pub use crate::region::RegionError;

/// Top-level error for a run
///
/// Every variant is terminal: the run stops and the controller returns
/// the failure sentinel. Nothing is retried or recovered into a
/// degraded mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Region(#[from] RegionError),

    #[error(transparent)]
    Spawn(#[from] SpawnError),
}
