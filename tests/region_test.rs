/*!
 * Shared Region Tests
 * Lifecycle and cross-mapping visibility of the System V region
 */

use pretty_assertions::assert_eq;
use serial_test::serial;
use shm_fanout::{RegionError, SharedRegion};

#[test]
#[serial]
fn test_create_seed_snapshot_destroy() {
    let region = SharedRegion::create(3).unwrap();
    assert_eq!(region.capacity(), 3);
    assert!(region.id() >= 0);

    let mut map = region.attach().unwrap();
    map.seed(&[3, 5]);
    assert_eq!(map.snapshot(), vec![3, 5]);
    assert_eq!(map.get(1), 3);
    assert_eq!(map.get(2), 5);

    map.detach().unwrap();
    region.destroy().unwrap();
}

#[test]
#[serial]
fn test_independent_mappings_share_storage() {
    let region = SharedRegion::create(4).unwrap();

    let mut writer = region.attach().unwrap();
    let reader = region.attach().unwrap();

    writer.seed(&[7, 8, 9]);
    writer.set(2, 16);

    // The second mapping observes writes made through the first
    assert_eq!(reader.snapshot(), vec![7, 16, 9]);

    writer.detach().unwrap();
    reader.detach().unwrap();
    region.destroy().unwrap();
}

#[test]
#[serial]
fn test_slot_zero_is_reserved_and_never_seeded() {
    let region = SharedRegion::create(3).unwrap();
    let mut map = region.attach().unwrap();

    map.set(0, -42);
    map.seed(&[1, 2]);

    // Seeding fills slots 1..=N only
    assert_eq!(map.get(0), -42);
    assert_eq!(map.snapshot(), vec![1, 2]);

    map.detach().unwrap();
    region.destroy().unwrap();
}

#[test]
#[serial]
fn test_zero_capacity_allocation_fails() {
    let result = SharedRegion::create(0);
    assert!(matches!(result, Err(RegionError::AllocationFailed(_))));
}
