/*!
 * Shm Fanout Library
 * Fixed-topology fork fan-out over a System V shared-memory region
 */

pub mod controller;
pub mod core;
pub mod input;
pub mod proc;
pub mod region;
pub mod trace;
pub mod worker;

// Re-exports
pub use crate::core::errors::RunError;
pub use crate::core::types::{RunResult, WorkerId, EXIT_FAILURE, EXIT_SUCCESS};
pub use input::{InputError, ValidatedInput};
pub use proc::{
    exit_worker, spawn_workers, wait_for_all, FanOut, Forked, OsSpawner, SpawnError, SpawnFailure,
    SpawnResult, Spawner, TerminationRecord,
};
pub use region::{RegionError, RegionMap, SharedRegion};
