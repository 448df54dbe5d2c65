//! Web dashboard with JSON API endpoints

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use fleetboard_core::chart::ChartWidget;
use fleetboard_core::stub::FieldStub;
use fleetboard_core::widget::Widget;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::state::StoreHandle;

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub store: StoreHandle,
    pub widgets: Arc<Vec<Widget>>,
    pub fetch_real_data: bool,
}

/// Query string of the chart endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub width: Option<u32>,
    pub live: Option<bool>,
}

/// Build the dashboard axum router
pub fn build_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/devices", get(devices_handler))
        .route("/api/widgets/{id}/data", get(widget_data_handler))
        .route("/api/widgets/{id}/chart", get(chart_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let store = dashboard.store.read().await;

    let device_rows: String = store
        .devices
        .devices
        .iter()
        .map(|device| {
            let name = FieldStub::new(device.name.as_deref(), true, false);
            let id = device.id.map(|id| id.to_string()).unwrap_or_default();
            format!(
                r#"<tr style="border-bottom: 1px solid #dee2e6;">
                    <td style="padding: 0.5rem;">{}</td>
                    <td style="padding: 0.5rem;"><span class="{}">{}</span></td>
                    <td style="padding: 0.5rem;">{}</td>
                </tr>"#,
                id,
                name.class,
                escape_html(&name.text),
                device.meta_fields.len()
            )
        })
        .collect();

    let error_banner = store
        .last_error
        .as_ref()
        .map(|e| {
            format!(
                r#"<p style="color: #721c24; background-color: #f8d7da; padding: 0.5rem;">{}: {}</p>"#,
                e.action,
                escape_html(&e.error)
            )
        })
        .unwrap_or_default();

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Fleetboard</title>
</head>
<body style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
    <h1>Fleetboard</h1>
    {error_banner}
    <section>
        <h2>Devices</h2>
        <table style="width: 100%; border-collapse: collapse;">
            <thead>
                <tr style="border-bottom: 2px solid #dee2e6;">
                    <th style="padding: 0.5rem; text-align: left;">Id</th>
                    <th style="padding: 0.5rem; text-align: left;">Name</th>
                    <th style="padding: 0.5rem; text-align: left;">Metadata</th>
                </tr>
            </thead>
            <tbody id="device-body">{device_rows}</tbody>
        </table>
    </section>
</body>
</html>"#,
        error_banner = error_banner,
        device_rows = device_rows,
    );

    Html(html)
}

async fn devices_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let store = dashboard.store.read().await;
    Json(store.devices.devices.clone())
}

async fn widget_data_handler(
    State(dashboard): State<DashboardState>,
    Path(id): Path<u64>,
) -> Response {
    let store = dashboard.store.read().await;
    match store.widgets.get(id) {
        Some(data) => Json(data.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn chart_handler(
    State(dashboard): State<DashboardState>,
    Path(id): Path<u64>,
    Query(query): Query<ChartQuery>,
) -> Response {
    let Some(widget) = dashboard.widgets.iter().find(|w| w.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    // Seeding by id keeps placeholder data stable between requests
    let mut rng = StdRng::seed_from_u64(widget.id);
    let chart = ChartWidget::mount(
        widget.id,
        query.width.unwrap_or(widget.width),
        widget.sources.clone(),
        query.live.unwrap_or(dashboard.fetch_real_data),
        &mut rng,
    );

    let store = dashboard.store.read().await;
    match chart.render(&store.widgets) {
        Some(spec) => Json(spec).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
