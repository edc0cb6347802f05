/*!
 * Core Types
 * Common types used across the crate
 */

/// Worker identity: rank assigned at spawn time, doubling as the
/// worker's slot index into the shared region. Always in 1..=N.
pub type WorkerId = usize;

/// Process exit code for a clean run (controller and every worker)
pub const EXIT_SUCCESS: i32 = 0;

/// Shared failure sentinel for any fatal precondition violation
pub const EXIT_FAILURE: i32 = 1;

/// Common result type for whole-run operations
pub type RunResult<T> = Result<T, super::errors::RunError>;
