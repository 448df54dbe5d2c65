//! BDD step definitions for the request middleware

use cucumber::{given, then, when};
use fleetboard::io::HttpResponse;
use fleetboard::middleware::ApiMiddleware;
use fleetboard_core::api::{
    device_delete, devices_fetch, timeline_resolve, DeviceParams, Method, ResolveParams,
};
use fleetboard_core::store::Action;

use crate::world::FleetboardWorld;

const BASE_URL: &str = "http://api.test";

fn middleware(world: &mut FleetboardWorld) -> ApiMiddleware {
    let store = world.store();
    ApiMiddleware::new(world.http.clone(), BASE_URL, store)
}

#[given(expr = "the API answers {int} with body {string}")]
fn api_answers(world: &mut FleetboardWorld, status: u16, body: String) {
    world.http.push(Some(HttpResponse { status, body }));
}

#[given("the API is unreachable")]
fn api_unreachable(world: &mut FleetboardWorld) {
    world.http.push(None);
}

#[when(expr = "the devices of organization {int} are fetched")]
async fn fetch_devices(world: &mut FleetboardWorld, org_id: u64) {
    let action = devices_fetch(&DeviceParams::org(org_id)).expect("builder failed");
    let m = middleware(world);
    world.outcome = Some(m.dispatch(action).await);
}

#[when(expr = "device {int} of organization {int} is deleted")]
async fn delete_device(world: &mut FleetboardWorld, device_id: u64, org_id: u64) {
    let action = device_delete(&DeviceParams::device(org_id, device_id)).expect("builder failed");
    let m = middleware(world);
    world.outcome = Some(m.dispatch(action).await);
}

#[when(expr = "event {int} of device {int} in organization {int} is resolved with comment {string}")]
async fn resolve_event(
    world: &mut FleetboardWorld,
    event_id: u64,
    device_id: u64,
    org_id: u64,
    comment: String,
) {
    let action = timeline_resolve(&ResolveParams {
        org_id: Some(org_id),
        device_id: Some(device_id),
        event_id: Some(event_id),
        comment: Some(comment),
    })
    .expect("builder failed");
    let m = middleware(world);
    world.outcome = Some(m.dispatch(action).await);
}

#[then(expr = "the outcome should be {string}")]
fn outcome_is(world: &mut FleetboardWorld, expected: String) {
    let outcome = world.outcome.as_ref().expect("nothing dispatched");
    assert_eq!(outcome.type_name(), expected);
}

#[then(expr = "the failure should mention {string}")]
fn failure_mentions(world: &mut FleetboardWorld, text: String) {
    match world.outcome.as_ref().expect("nothing dispatched") {
        Action::Failure { error, .. } => assert!(error.contains(&text), "{error}"),
        other => panic!("expected a failure, got {other:?}"),
    }
}

#[then(expr = "a {word} request should have been sent to {string}")]
fn request_sent(world: &mut FleetboardWorld, method: String, path: String) {
    let requests = world.http.requests.lock().unwrap();
    let last = requests.last().expect("no request sent");
    let method = match method.as_str() {
        "GET" => Method::Get,
        "PUT" => Method::Put,
        "POST" => Method::Post,
        "DELETE" => Method::Delete,
        other => panic!("Unknown method: {}", other),
    };
    assert_eq!(last.method, method);
    assert_eq!(last.url, format!("{}{}", BASE_URL, path));
}

#[then(expr = "the request body should carry comment {string}")]
fn request_body_comment(world: &mut FleetboardWorld, comment: String) {
    let requests = world.http.requests.lock().unwrap();
    let body = requests
        .last()
        .and_then(|r| r.body.clone())
        .expect("no request body");
    assert_eq!(body["comment"], comment.as_str());
}

#[then(expr = "the store should cache {int} devices")]
async fn store_caches(world: &mut FleetboardWorld, count: usize) {
    let store = world.store();
    assert_eq!(store.read().await.devices.devices.len(), count);
}

#[then(expr = "the store should record the error for {string}")]
async fn store_error(world: &mut FleetboardWorld, action: String) {
    let store = world.store();
    let store = store.read().await;
    let error = store.last_error.as_ref().expect("no error recorded");
    assert_eq!(error.action, action);
}

#[then(expr = "{int} request(s) should have been sent")]
fn requests_sent(world: &mut FleetboardWorld, count: usize) {
    assert_eq!(world.http.requests.lock().unwrap().len(), count);
}
