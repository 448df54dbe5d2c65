//! Request middleware
//!
//! Executes request descriptors built by `fleetboard_core::api` against the
//! remote API and feeds the outcome back into the store as `*_SUCCESS` or
//! `*_FAIL` actions. No retries: a failed request is reported once.

use std::collections::HashMap;
use std::sync::Arc;

use fleetboard_core::api::{Method, RequestAction, RequestDescriptor};
use fleetboard_core::store::{Action, PinData};
use serde_json::Value;

use crate::io::{HttpClient, HttpRequest};
use crate::state::{self, StoreHandle};

pub struct ApiMiddleware {
    http: Arc<dyn HttpClient>,
    base_url: String,
    store: StoreHandle,
}

impl ApiMiddleware {
    pub fn new(http: Arc<dyn HttpClient>, base_url: &str, store: StoreHandle) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    /// Resolve a descriptor against the configured base URL
    pub fn resolve(&self, request: &RequestDescriptor) -> HttpRequest {
        let query = request
            .params
            .iter()
            .flatten()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect();

        HttpRequest {
            method: request.method,
            url: format!("{}{}", self.base_url, request.url),
            query,
            body: request.body.clone(),
        }
    }

    /// Dispatch a request action: record it, execute it, then record and
    /// return the outcome.
    pub async fn dispatch(&self, action: RequestAction) -> Action {
        state::dispatch(&self.store, Action::Request(action.clone())).await;

        let request = self.resolve(&action.request);
        let outcome = match self.http.execute(&request).await {
            Ok(response) if response.is_success() => match parse_body(&response.body) {
                Ok(data) => Action::Success {
                    origin: action,
                    data,
                },
                Err(e) => Action::Failure {
                    origin: action,
                    error: format!("Invalid response body: {}", e),
                },
            },
            Ok(response) => Action::Failure {
                origin: action,
                error: format!("HTTP {}: {}", response.status, response.body),
            },
            Err(e) => Action::Failure {
                origin: action,
                error: e.to_string(),
            },
        };

        state::dispatch(&self.store, outcome.clone()).await;
        outcome
    }

    /// Load telemetry for one widget into the store.
    ///
    /// On failure the previously cached samples are kept and only the
    /// loading flag is cleared.
    pub async fn load_widget_data(&self, widget_id: u64) -> bool {
        state::dispatch(&self.store, Action::WidgetDataLoading { widget_id }).await;

        let request = HttpRequest {
            method: Method::Get,
            url: format!("{}/widgets/{}/data", self.base_url, widget_id),
            query: Vec::new(),
            body: None,
        };
        let fetched = match self.http.execute(&request).await {
            Ok(response) if response.is_success() => {
                serde_json::from_str::<HashMap<String, PinData>>(&response.body)
                    .map_err(|e| format!("Invalid widget data: {}", e))
            }
            Ok(response) => Err(format!("HTTP {}", response.status)),
            Err(e) => Err(e.to_string()),
        };

        let (pins, loaded) = match fetched {
            Ok(pins) => (pins, true),
            Err(e) => {
                tracing::warn!("Loading data for widget {} failed: {}", widget_id, e);
                let cached = self
                    .store
                    .read()
                    .await
                    .widgets
                    .get(widget_id)
                    .map(|data| data.pins.clone())
                    .unwrap_or_default();
                (cached, false)
            }
        };

        state::dispatch(&self.store, Action::WidgetDataLoaded { widget_id, pins }).await;
        loaded
    }
}

fn parse_body(body: &str) -> serde_json::Result<Value> {
    if body.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str(body)
    }
}
