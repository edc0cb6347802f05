/*!
 * Process Module
 * Spawn duality, the identity-assigning fan-out loop, and child collection
 */

pub mod spawn;
pub mod wait;

// Re-export for convenience
pub use spawn::{
    exit_worker, spawn_workers, FanOut, Forked, OsSpawner, SpawnError, SpawnFailure, SpawnResult,
    Spawner,
};
pub use wait::{wait_for_all, TerminationRecord};
