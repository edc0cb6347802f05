/*!
 * Shared Region Types
 * Errors for the shared-memory region lifecycle
 */

use nix::errno::Errno;
use thiserror::Error;

/// Shared region error types
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionError {
    /// The system could not satisfy the allocation request
    #[error("Shared region allocation failed: {0}")]
    AllocationFailed(Errno),

    /// Mapping the region into this process's address space failed
    #[error("Shared region attach failed: {0}")]
    AttachFailed(Errno),

    /// Unmapping the region from this process failed
    #[error("Shared region detach failed: {0}")]
    DetachFailed(Errno),

    /// Removing the underlying block system-wide failed
    #[error("Shared region removal failed: {0}")]
    DestroyFailed(Errno),
}

pub type RegionResult<T> = Result<T, RegionError>;
