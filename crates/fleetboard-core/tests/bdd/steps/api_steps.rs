//! BDD step definitions for API request builders

use cucumber::{then, when};
use fleetboard_core::api::{self, DeviceParams, Method, ResolveParams, TimelineQuery};
use fleetboard_core::ApiError;
use serde_json::json;

use crate::world::FleetboardWorld;

fn parse_method(s: &str) -> Method {
    match s {
        "GET" => Method::Get,
        "PUT" => Method::Put,
        "POST" => Method::Post,
        "DELETE" => Method::Delete,
        other => panic!("Unknown method: {}", other),
    }
}

#[when(expr = "devices are fetched for organization {int}")]
fn fetch_devices(world: &mut FleetboardWorld, org_id: u64) {
    world.request = Some(api::devices_fetch(&DeviceParams::org(org_id)));
}

#[when("devices are fetched without an organization")]
fn fetch_devices_without_org(world: &mut FleetboardWorld) {
    world.request = Some(api::devices_fetch(&DeviceParams::default()));
}

#[when(expr = "device delete is built for organization {int} without a device")]
fn delete_without_device(world: &mut FleetboardWorld, org_id: u64) {
    world.request = Some(api::device_delete(&DeviceParams::org(org_id)));
}

#[when(expr = "the timeline of device {int} in organization {int} is fetched at {int}")]
fn fetch_timeline(world: &mut FleetboardWorld, device_id: u64, org_id: u64, now_ms: i64) {
    let query = TimelineQuery {
        org_id: Some(org_id),
        device_id: Some(device_id),
        ..Default::default()
    };
    world.request = Some(api::timeline_fetch(&query, now_ms));
}

#[when(expr = "event resolution is built for device {int} in organization {int} without an event")]
fn resolve_without_event(world: &mut FleetboardWorld, device_id: u64, org_id: u64) {
    world.request = Some(api::timeline_resolve(&ResolveParams {
        org_id: Some(org_id),
        device_id: Some(device_id),
        event_id: None,
        comment: None,
    }));
}

#[when(expr = "metadata of device {int} in organization {int} is updated")]
fn update_metadata(world: &mut FleetboardWorld, device_id: u64, org_id: u64) {
    world.request = Some(api::device_metadata_update(
        &DeviceParams::device(org_id, device_id),
        json!([]),
    ));
}

#[then(expr = "the request should be {string} {string}")]
fn request_is(world: &mut FleetboardWorld, method: String, url: String) {
    let action = world
        .request
        .as_ref()
        .expect("no request built")
        .as_ref()
        .expect("builder failed");
    assert_eq!(action.request.method, parse_method(&method));
    assert_eq!(action.request.url, url);
}

#[then(expr = "the request param {string} should be {int}")]
fn request_param(world: &mut FleetboardWorld, name: String, value: i64) {
    let action = world
        .request
        .as_ref()
        .expect("no request built")
        .as_ref()
        .expect("builder failed");
    let params = action.request.params.as_ref().expect("no params");
    assert_eq!(params[&name], json!(value));
}

#[then(expr = "the builder should fail with missing {string}")]
fn builder_fails(world: &mut FleetboardWorld, parameter: String) {
    match world.request.as_ref().expect("no request built") {
        Err(ApiError::MissingParameter(name)) => assert_eq!(*name, parameter),
        Ok(action) => panic!("expected failure, got {:?}", action),
    }
}
