/*!
 * Shared Region Segment
 * System V shared-memory block and per-process mappings
 */

use super::types::{RegionError, RegionResult};
use crate::core::limits::SLOT_OFFSET;
use log::{debug, info};
use nix::errno::Errno;
use std::mem;
use std::ptr;

/// A System V shared-memory block of integer cells
///
/// Created once by the controller before any spawn. The block itself is
/// shared by all; each process that uses it holds its own [`RegionMap`].
/// Slot 0 is reserved so slots 1..capacity align with worker identities.
/// `destroy` must be called exactly once, by the controller, after every
/// worker has been waited for.
#[derive(Debug)]
pub struct SharedRegion {
    id: i32,
    capacity: usize,
}

impl SharedRegion {
    /// Allocate a shared block sized to hold `capacity` integer cells
    pub fn create(capacity: usize) -> RegionResult<Self> {
        let bytes = capacity * mem::size_of::<i32>();
        let id = unsafe { libc::shmget(libc::IPC_PRIVATE, bytes, libc::IPC_CREAT | 0o600) };
        if id < 0 {
            return Err(RegionError::AllocationFailed(Errno::last()));
        }
        info!("Created shared region {} ({} cells, {} bytes)", id, capacity, bytes);
        Ok(Self { id, capacity })
    }

    /// System-wide identifier of the underlying block
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Number of cells, including the reserved slot 0
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Map the block into the calling process's address space
    ///
    /// Callable independently from every process that holds the
    /// identifier; each call yields a fresh mapping of the same backing
    /// storage. A mapping established before `fork` is inherited by the
    /// child process.
    pub fn attach(&self) -> RegionResult<RegionMap> {
        let base = unsafe { libc::shmat(self.id, ptr::null(), 0) };
        if base as isize == -1 {
            return Err(RegionError::AttachFailed(Errno::last()));
        }
        debug!("Attached shared region {} at {:p}", self.id, base);
        Ok(RegionMap {
            base: base.cast::<i32>(),
            capacity: self.capacity,
        })
    }

    /// Remove the underlying block system-wide
    ///
    /// Every other process must have finished with the block (waited
    /// for) before this is called; lingering mappings are undefined.
    pub fn destroy(self) -> RegionResult<()> {
        let rc = unsafe { libc::shmctl(self.id, libc::IPC_RMID, ptr::null_mut()) };
        if rc < 0 {
            return Err(RegionError::DestroyFailed(Errno::last()));
        }
        info!("Destroyed shared region {}", self.id);
        Ok(())
    }
}

/// One process's mapping of a [`SharedRegion`]
///
/// Slot accessors are volatile: cells are written by other processes,
/// so reads must not be cached. Each worker owns exactly one slot;
/// nothing here enforces that partition, the spawn loop's identity
/// assignment does.
#[derive(Debug)]
pub struct RegionMap {
    base: *mut i32,
    capacity: usize,
}

impl RegionMap {
    /// Number of cells, including the reserved slot 0
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read one cell
    pub fn get(&self, slot: usize) -> i32 {
        assert!(slot < self.capacity, "slot {} out of range", slot);
        unsafe { self.base.add(slot).read_volatile() }
    }

    /// Write one cell
    pub fn set(&mut self, slot: usize, value: i32) {
        assert!(slot < self.capacity, "slot {} out of range", slot);
        unsafe { self.base.add(slot).write_volatile(value) }
    }

    /// Fill slots 1..=values.len() with the given seed values
    ///
    /// Controller-only, before any spawn; the controller never writes
    /// to the region afterwards.
    pub fn seed(&mut self, values: &[i32]) {
        assert!(values.len() < self.capacity, "seed larger than region");
        for (index, &value) in values.iter().enumerate() {
            self.set(index + SLOT_OFFSET, value);
        }
        debug!("Seeded {} region slots", values.len());
    }

    /// Current contents of slots 1..capacity, in slot order
    pub fn snapshot(&self) -> Vec<i32> {
        (SLOT_OFFSET..self.capacity).map(|slot| self.get(slot)).collect()
    }

    /// Unmap the region from the calling process
    ///
    /// Consumes the map, so a stale handle cannot be reused. Each
    /// process that attached detaches its own mapping.
    pub fn detach(self) -> RegionResult<()> {
        let rc = unsafe { libc::shmdt(self.base.cast()) };
        if rc < 0 {
            return Err(RegionError::DetachFailed(Errno::last()));
        }
        debug!("Detached shared region mapping at {:p}", self.base);
        Ok(())
    }
}
