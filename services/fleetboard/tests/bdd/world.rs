//! BDD test world for fleetboard service

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cucumber::World;
use fleetboard::io::{HttpClient, HttpRequest, HttpResponse};
use fleetboard::state::StoreHandle;
use fleetboard::FleetboardError;
use fleetboard_core::store::Action;
use fleetboard_core::widget::Widget;

/// HTTP client that replays queued responses and records every request
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    responses: Mutex<VecDeque<Option<HttpResponse>>>,
    pub requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    /// Queue a response; `None` simulates a connection failure
    pub fn push(&self, response: Option<HttpResponse>) {
        self.responses.lock().unwrap().push_back(response);
    }
}

#[async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn execute(&self, request: &HttpRequest) -> fleetboard::Result<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match self.responses.lock().unwrap().pop_front() {
            Some(Some(response)) => Ok(response),
            _ => Err(FleetboardError::Http("connection refused".to_string())),
        }
    }
}

#[derive(Debug, Default, World)]
pub struct FleetboardWorld {
    // Shared store
    pub store: Option<StoreHandle>,

    // Middleware testing
    pub http: Arc<ScriptedHttpClient>,
    pub outcome: Option<Action>,

    // Dashboard testing
    pub widgets: Vec<Widget>,
    pub response_status: Option<u16>,
    pub response_body: Option<String>,
}

impl FleetboardWorld {
    pub fn store(&mut self) -> StoreHandle {
        Arc::clone(
            self.store
                .get_or_insert_with(fleetboard::state::new_store_handle),
        )
    }
}
