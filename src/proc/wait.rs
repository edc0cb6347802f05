/*!
 * Child Collection
 * Blocking wait/collect of worker termination records
 */

use crate::trace;
use log::{info, warn};
use nix::sys::wait::{wait, WaitStatus};
use nix::unistd::Pid;

/// One worker's termination: process handle plus exit status
///
/// Produced in termination order, which is unrelated to spawn order;
/// consumed exactly once by the controller's collection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminationRecord {
    pub pid: Pid,
    pub status: WaitStatus,
}

impl TerminationRecord {
    /// Exit code as reported to the controller
    ///
    /// Signal deaths map to 128 + signal number, shell style. Anything
    /// else (stopped, continued) cannot occur for a plain wait.
    pub fn exit_code(&self) -> i32 {
        match self.status {
            WaitStatus::Exited(_, code) => code,
            WaitStatus::Signaled(_, signal, _) => 128 + signal as i32,
            _ => -1,
        }
    }
}

/// Block once per worker, collecting exactly `count` termination records
///
/// Records arrive in whatever order the system delivers terminations;
/// the loop assumes only the count, never identity order. Each record
/// is displayed as it is collected.
pub fn wait_for_all(count: usize) -> Vec<TerminationRecord> {
    let mut records = Vec::with_capacity(count);
    for rank in 1..=count {
        println!("Controller: waits for {} worker", trace::ordinal(rank));
        match wait() {
            Ok(status) => {
                // A plain wait reports only terminations
                let pid = match status {
                    WaitStatus::Exited(pid, _) | WaitStatus::Signaled(pid, _, _) => pid,
                    other => unreachable!("non-termination status from wait: {:?}", other),
                };
                let record = TerminationRecord { pid, status };
                println!(
                    "Controller: detects {} worker completion",
                    trace::ordinal(rank)
                );
                println!(
                    "Controller: displays {} worker PID {} & exit code {}",
                    trace::ordinal(rank),
                    record.pid,
                    record.exit_code()
                );
                info!("Collected termination of PID {}", record.pid);
                records.push(record);
            }
            Err(errno) => {
                // Fewer children than expected; nothing left to collect
                warn!("Wait failed after {} of {} records: {}", records.len(), count, errno);
                break;
            }
        }
    }
    records
}
