/*!
 * Worker Unit
 * The per-worker read-modify-display contract
 */

use crate::core::types::{WorkerId, EXIT_SUCCESS};
use crate::region::RegionMap;
use crate::trace;
use log::debug;

/// Execute one worker's unit of work against its own slot
///
/// The worker reads the full region, announces its identity, multiplies
/// its identity-indexed slot by its identity, and reads the region
/// again. The second read may show partial results from sibling workers
/// still running; there is no barrier between workers. A worker never
/// waits on another worker and never touches another worker's slot.
pub fn run(identity: WorkerId, map: &mut RegionMap) {
    let prefix = trace::worker_prefix(identity);
    println!("{} starts", prefix);

    println!(
        "{} displays shared region -> {}",
        prefix,
        trace::render(&map.snapshot())
    );
    println!("{} displays private identity -> {}", prefix, identity);

    println!("{} updates shared region", prefix);
    let seeded = map.get(identity);
    map.set(identity, seeded * identity as i32);
    debug!("Worker {} wrote slot {}", identity, identity);

    println!(
        "{} displays shared region -> {}",
        prefix,
        trace::render(&map.snapshot())
    );
    println!("{} exits with code {}", prefix, EXIT_SUCCESS);
}
