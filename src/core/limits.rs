/*!
 * Limits and Constants
 *
 * Centralized location for run-wide limits and magic numbers.
 */

/// Minimum number of workers (and seed values) per run
pub const MIN_WORKERS: usize = 1;

/// Maximum number of workers per run
/// Bounded so every identity has a spelled-out ordinal rank
pub const MAX_WORKERS: usize = 7;

/// Smallest accepted seed value
pub const VALUE_MIN: i32 = 0;

/// Largest accepted seed value
pub const VALUE_MAX: i32 = 9;

/// Slot 0 of the shared region is reserved; worker slots are 1-indexed
/// so that slot index and worker identity coincide
pub const SLOT_OFFSET: usize = 1;

/// Indentation (spaces per identity) for worker trace prefixes
pub const TRACE_INDENT: usize = 2;
