/*!
 * Spawn Loop Tests
 * Identity assignment, worker break-out, and spawn-failure injection
 */

use nix::errno::Errno;
use nix::unistd::Pid;
use pretty_assertions::assert_eq;
use shm_fanout::{spawn_workers, FanOut, Forked, SpawnError, SpawnResult, Spawner, WorkerId};
use std::cell::RefCell;

/// Spawner that never forks: records every requested identity and
/// hands back scripted continuations.
struct ScriptedSpawner {
    requested: RefCell<Vec<WorkerId>>,
    fail_at: Option<WorkerId>,
    become_worker_at: Option<WorkerId>,
}

impl ScriptedSpawner {
    fn new() -> Self {
        Self {
            requested: RefCell::new(Vec::new()),
            fail_at: None,
            become_worker_at: None,
        }
    }

    fn failing_at(identity: WorkerId) -> Self {
        Self {
            fail_at: Some(identity),
            ..Self::new()
        }
    }

    fn worker_at(identity: WorkerId) -> Self {
        Self {
            become_worker_at: Some(identity),
            ..Self::new()
        }
    }

    fn requested(&self) -> Vec<WorkerId> {
        self.requested.borrow().clone()
    }
}

impl Spawner for ScriptedSpawner {
    fn spawn(&self, identity: WorkerId) -> SpawnResult<Forked> {
        self.requested.borrow_mut().push(identity);
        if self.fail_at == Some(identity) {
            return Err(SpawnError::ForkFailed(Errno::EAGAIN));
        }
        if self.become_worker_at == Some(identity) {
            return Ok(Forked::Worker { identity });
        }
        Ok(Forked::Controller {
            child: Pid::from_raw(1000 + identity as i32),
        })
    }
}

#[test]
fn test_identities_assigned_in_increasing_order() {
    let spawner = ScriptedSpawner::new();
    let outcome = spawn_workers(&spawner, 3).unwrap();

    assert_eq!(spawner.requested(), vec![1, 2, 3]);
    match outcome {
        FanOut::Controller(spawned) => {
            let raw: Vec<i32> = spawned.iter().map(|pid| pid.as_raw()).collect();
            assert_eq!(raw, vec![1001, 1002, 1003]);
        }
        FanOut::Worker(identity) => panic!("unexpected worker continuation {}", identity),
    }
}

#[test]
fn test_worker_continuation_spawns_nothing_further() {
    let spawner = ScriptedSpawner::worker_at(2);
    let outcome = spawn_workers(&spawner, 5).unwrap();

    assert_eq!(outcome, FanOut::Worker(2));
    // The worker broke out of the loop at once: identities 3..=5 were
    // never requested
    assert_eq!(spawner.requested(), vec![1, 2]);
}

#[test]
fn test_spawn_failure_reports_only_live_workers() {
    let spawner = ScriptedSpawner::failing_at(2);
    let failure = spawn_workers(&spawner, 3).unwrap_err();

    assert_eq!(failure.error, SpawnError::ForkFailed(Errno::EAGAIN));
    // Exactly one worker was live when the run aborted; the third was
    // never created and must never be waited for
    assert_eq!(failure.spawned, vec![Pid::from_raw(1001)]);
    assert_eq!(spawner.requested(), vec![1, 2]);
}

#[test]
fn test_single_worker_fan_out() {
    let spawner = ScriptedSpawner::new();
    let outcome = spawn_workers(&spawner, 1).unwrap();

    match outcome {
        FanOut::Controller(spawned) => assert_eq!(spawned.len(), 1),
        FanOut::Worker(identity) => panic!("unexpected worker continuation {}", identity),
    }
}
