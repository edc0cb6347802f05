/*!
 * Spawn Loop
 *
 * One fork call yields two continuations from the same call site. That
 * duality is modeled as a tagged [`Forked`] result so callers branch on
 * a variant instead of re-deriving which process they are. The fan-out
 * loop assigns identities 1..=N in strictly increasing spawn order, and
 * a worker continuation breaks out immediately: workers spawn nothing.
 */

use crate::core::types::WorkerId;
use crate::trace;
use log::{info, warn};
use nix::errno::Errno;
use nix::unistd::{fork, ForkResult, Pid};
use thiserror::Error;

/// Process creation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    #[error("Fork failed, worker couldn't be created: {0}")]
    ForkFailed(Errno),
}

pub type SpawnResult<T> = Result<T, SpawnError>;

/// A spawn failure, carrying the handles of workers already spawned
///
/// Fatal for the whole run, but the caller still needs the live handles
/// so it reaps exactly the workers that exist, never one that was never
/// created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct SpawnFailure {
    pub error: SpawnError,
    pub spawned: Vec<Pid>,
}

/// The two continuations of a single process-creation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forked {
    /// The pre-existing process, observing its new child's handle
    Controller { child: Pid },
    /// The newly created process, observing its assigned identity
    Worker { identity: WorkerId },
}

/// Process-creation seam
///
/// Production forks; tests substitute a spawner that fails on demand.
pub trait Spawner {
    fn spawn(&self, identity: WorkerId) -> SpawnResult<Forked>;
}

/// Spawner backed by `fork(2)`
pub struct OsSpawner;

impl Spawner for OsSpawner {
    fn spawn(&self, identity: WorkerId) -> SpawnResult<Forked> {
        // Safety: the controller is single-threaded when it forks, and
        // the child continuation runs only the worker unit.
        match unsafe { fork() } {
            Ok(ForkResult::Parent { child }) => Ok(Forked::Controller { child }),
            Ok(ForkResult::Child) => Ok(Forked::Worker { identity }),
            Err(errno) => Err(SpawnError::ForkFailed(errno)),
        }
    }
}

/// How the fan-out loop ended for the calling process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FanOut {
    /// Original controller: handles of all spawned workers, in identity order
    Controller(Vec<Pid>),
    /// A just-spawned worker: its own identity; it spawned nothing
    Worker(WorkerId),
}

/// Spawn exactly `count` workers, one at a time, identities 1..=count
///
/// Only the original controller iterates; each worker continuation
/// returns out of the loop at once, which is what keeps the fan-out
/// from exploding.
pub fn spawn_workers<S: Spawner>(spawner: &S, count: usize) -> Result<FanOut, SpawnFailure> {
    let mut spawned = Vec::with_capacity(count);
    for identity in 1..=count {
        println!(
            "Controller: forks {} worker process",
            trace::ordinal(identity)
        );
        match spawner.spawn(identity) {
            Ok(Forked::Controller { child }) => {
                info!("Spawned worker {} with PID {}", identity, child);
                spawned.push(child);
            }
            Ok(Forked::Worker { identity }) => return Ok(FanOut::Worker(identity)),
            Err(error) => {
                warn!(
                    "Spawn of worker {} failed with {} workers live: {}",
                    identity,
                    spawned.len(),
                    error
                );
                return Err(SpawnFailure { error, spawned });
            }
        }
    }
    Ok(FanOut::Controller(spawned))
}

/// Terminate the calling process immediately, skipping libc exit handlers
///
/// Worker continuations end here so they never fall back into the
/// controller's flow (or a test harness's).
pub fn exit_worker(code: i32) -> ! {
    unsafe { libc::_exit(code) }
}
