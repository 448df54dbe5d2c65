//! BDD step definitions for dashboard feature

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use fleetboard::dashboard::{build_router, DashboardState};
use fleetboard::state::dispatch;
use fleetboard_core::api::{devices_fetch, DeviceParams};
use fleetboard_core::store::{Action, PinData, Sample};
use fleetboard_core::widget::{DataSource, DataStreamRef, Widget, WidgetType};
use serde_json::Value;
use tower::ServiceExt;

use crate::world::FleetboardWorld;

#[given(expr = "the store caches a device named {string}")]
async fn store_caches_device(world: &mut FleetboardWorld, name: String) {
    let store = world.store();
    dispatch(
        &store,
        Action::Success {
            origin: devices_fetch(&DeviceParams::org(1)).expect("builder failed"),
            data: serde_json::json!([{ "id": 1, "name": name }]),
        },
    )
    .await;
}

#[given(expr = "a chart widget {int} bound to pin {int} that is {int} units wide")]
fn chart_widget(world: &mut FleetboardWorld, id: u64, pin: i32, width: u32) {
    world.widgets.push(Widget {
        id,
        widget_type: WidgetType::LinearChart,
        label: format!("Chart {id}"),
        x: 0,
        y: 0,
        width,
        height: 3,
        sources: vec![DataSource {
            label: "Temperature".to_string(),
            color: "#e0493f".to_string(),
            data_stream: Some(DataStreamRef {
                name: "temperature".to_string(),
                pin,
            }),
        }],
    });
}

#[given(expr = "widget {int} has loaded a sample {float} at {int}")]
async fn widget_has_sample(world: &mut FleetboardWorld, widget_id: u64, y: f64, x: i64) {
    let pin = world
        .widgets
        .iter()
        .find(|w| w.id == widget_id)
        .and_then(|w| w.sources.first())
        .and_then(|s| s.data_stream.as_ref())
        .map(|s| s.pin_key())
        .expect("widget has no bound source");
    let mut pins = HashMap::new();
    pins.insert(
        pin,
        PinData {
            data: vec![Sample { x, y }],
        },
    );
    let store = world.store();
    dispatch(&store, Action::WidgetDataLoaded { widget_id, pins }).await;
}

#[when(expr = "{string} is requested from the dashboard")]
async fn request_path(world: &mut FleetboardWorld, path: String) {
    let router = build_router(DashboardState {
        store: world.store(),
        widgets: Arc::new(world.widgets.clone()),
        fetch_real_data: false,
    });
    let response = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut FleetboardWorld, status: u16) {
    assert_eq!(world.response_status, Some(status));
}

#[then(expr = "the page should contain {string}")]
fn page_contains(world: &mut FleetboardWorld, text: String) {
    let body = world.response_body.as_ref().expect("no response");
    assert!(body.contains(&text), "missing {text:?} in {body}");
}

#[then(expr = "the chart should request {int} x axis ticks")]
fn chart_ticks(world: &mut FleetboardWorld, ticks: u64) {
    let spec = chart_json(world);
    assert_eq!(spec["layout"]["xaxis"]["nticks"], ticks);
}

#[then(expr = "the chart should plot {int} points")]
fn chart_points(world: &mut FleetboardWorld, points: usize) {
    let spec = chart_json(world);
    assert_eq!(spec["data"][0]["y"].as_array().unwrap().len(), points);
}

#[then(expr = "the first point should be labelled {string}")]
fn first_point_label(world: &mut FleetboardWorld, label: String) {
    let spec = chart_json(world);
    assert_eq!(spec["data"][0]["x"][0], label.as_str());
}

fn chart_json(world: &FleetboardWorld) -> Value {
    serde_json::from_str(world.response_body.as_ref().expect("no response"))
        .expect("chart is not JSON")
}
