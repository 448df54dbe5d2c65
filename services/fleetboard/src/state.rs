//! Shared handle to the client-side store

use std::sync::Arc;

use fleetboard_core::store::{Action, Store};
use tokio::sync::RwLock;

/// Thread-safe store handle shared by the middleware and the dashboard
pub type StoreHandle = Arc<RwLock<Store>>;

pub fn new_store_handle() -> StoreHandle {
    Arc::new(RwLock::new(Store::new()))
}

/// Apply one action under the write lock, so reducers never interleave
pub async fn dispatch(store: &StoreHandle, action: Action) {
    let mut store = store.write().await;
    store.dispatch(&action);
}
