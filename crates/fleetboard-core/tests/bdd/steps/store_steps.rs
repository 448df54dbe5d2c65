//! BDD step definitions for store reducers

use cucumber::{given, then, when};
use fleetboard_core::api::{self, DeviceParams};
use fleetboard_core::store::{Action, Store};
use serde_json::{json, Value};

use crate::world::FleetboardWorld;

fn device_records(count: u64) -> Value {
    Value::Array(
        (1..=count)
            .map(|id| json!({"id": id, "name": format!("Device {}", id)}))
            .collect(),
    )
}

#[given("an empty store")]
fn empty_store(world: &mut FleetboardWorld) {
    world.store = Store::new();
}

#[when(expr = "the devices fetch succeeds with {int} devices")]
fn devices_fetch_succeeds(world: &mut FleetboardWorld, count: u64) {
    let origin = api::devices_fetch(&DeviceParams::org(1)).unwrap();
    world.store.dispatch(&Action::Success {
        origin,
        data: device_records(count),
    });
}

#[when(expr = "the device update succeeds with {int} devices")]
fn device_update_succeeds(world: &mut FleetboardWorld, count: u64) {
    let origin = api::device_update(&DeviceParams::org(1), json!({})).unwrap();
    world.store.dispatch(&Action::Success {
        origin,
        data: device_records(count),
    });
}

#[when(expr = "the devices fetch fails with {string}")]
fn devices_fetch_fails(world: &mut FleetboardWorld, error: String) {
    let origin = api::devices_fetch(&DeviceParams::org(1)).unwrap();
    world.store.dispatch(&Action::Failure { origin, error });
}

#[then(expr = "the store should hold {int} devices")]
fn store_holds(world: &mut FleetboardWorld, count: usize) {
    assert_eq!(world.store.devices.devices.len(), count);
}

#[then(expr = "every device should carry {int} metadata fields")]
fn every_device_metadata(world: &mut FleetboardWorld, count: usize) {
    assert!(!world.store.devices.devices.is_empty());
    for device in &world.store.devices.devices {
        assert_eq!(device.meta_fields.len(), count);
    }
}

#[then(expr = "the last error should be for {string}")]
fn last_error_for(world: &mut FleetboardWorld, action: String) {
    let last = world.store.last_error.as_ref().expect("no error recorded");
    assert_eq!(last.action, action);
}
