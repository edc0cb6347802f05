/*!
 * Controller
 *
 * Owns the whole run: sizes and creates the shared region, seeds it
 * from validated input, fans out one process per worker, waits for
 * every worker, reports the final region, and tears the region down.
 *
 * State machine: Start -> AllocateRegion -> Seed -> SpawnLoop ->
 * {WaitForAll | BecomeWorker} -> Report -> Teardown -> Terminate.
 * Validation happens before control reaches here.
 */

use crate::core::limits::SLOT_OFFSET;
use crate::core::types::{RunResult, EXIT_SUCCESS};
use crate::input::ValidatedInput;
use crate::proc::{self, FanOut, OsSpawner, Spawner};
use crate::region::SharedRegion;
use crate::trace;
use crate::worker;
use log::{info, warn};

/// Run a complete fan-out batch for the given validated input
///
/// Returns only in the original controller process. Every spawned
/// worker executes its unit of work and terminates inside this call,
/// without ever resuming the controller's flow.
pub fn run(input: &ValidatedInput) -> RunResult<()> {
    run_with(&OsSpawner, input)
}

/// Run a fan-out batch with a caller-supplied process-creation seam
pub fn run_with<S: Spawner>(spawner: &S, input: &ValidatedInput) -> RunResult<()> {
    let count = input.count();
    info!("Controller run starting with {} workers", count);

    println!("Controller: requests shared region");
    let region = SharedRegion::create(count + SLOT_OFFSET)?;
    println!("Controller: receives shared region");

    println!("Controller: attaches shared region");
    let mut map = match region.attach() {
        Ok(map) => map,
        Err(error) => {
            // Nothing was spawned; the bare block is the only thing to undo
            let _ = region.destroy();
            return Err(error.into());
        }
    };

    println!("Controller: fills shared region");
    map.seed(input.values());
    println!(
        "Controller: displays shared region -> {}\n",
        trace::render(&map.snapshot())
    );

    match proc::spawn_workers(spawner, count) {
        Ok(FanOut::Worker(identity)) => {
            // Worker continuation: inherited mapping, own slot, then out
            worker::run(identity, &mut map);
            proc::exit_worker(EXIT_SUCCESS)
        }
        Ok(FanOut::Controller(spawned)) => {
            let records = proc::wait_for_all(spawned.len());
            info!("Collected {} of {} termination records", records.len(), spawned.len());

            println!(
                "\nController: displays shared region -> {}",
                trace::render(&map.snapshot())
            );

            println!("Controller: detaches shared region");
            map.detach()?;
            println!("Controller: removes shared region");
            region.destroy()?;
            println!("Controller: finished");
            Ok(())
        }
        Err(failure) => {
            // Fatal for the run, but the workers already spawned are
            // real: reap exactly those before tearing down, never one
            // that was never created.
            warn!(
                "Aborting run after spawn failure; reaping {} live workers",
                failure.spawned.len()
            );
            let _ = proc::wait_for_all(failure.spawned.len());
            if let Err(error) = map.detach() {
                warn!("Teardown after spawn failure: {}", error);
            }
            if let Err(error) = region.destroy() {
                warn!("Teardown after spawn failure: {}", error);
            }
            Err(failure.error.into())
        }
    }
}
