//! Client-side API fetch helpers
//!
//! The frontend talks to the fleetboard host service, which owns the store
//! fed by the remote device API.

use fleetboard_core::device::Device;
use fleetboard_core::store::PinData;
use std::collections::HashMap;

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let window = web_sys::window().ok_or("no window")?;
    let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
    let url = format!("{}{}", origin, path);

    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("{}", e))?;

    if !resp.ok() {
        return Err(format!("GET {} -> {}", path, resp.status()));
    }
    resp.json().await.map_err(|e| format!("{}", e))
}

/// Devices cached by the host service (`/api/devices`)
pub async fn fetch_devices() -> Result<Vec<Device>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/devices").await
    }

    #[cfg(not(feature = "hydrate"))]
    {
        Ok(vec![])
    }
}

/// Samples for one widget (`/api/widgets/{id}/data`), keyed by pin key
pub async fn fetch_widget_pins(widget_id: u64) -> Result<HashMap<String, PinData>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct WidgetDataResponse {
            pins: HashMap<String, PinData>,
        }
        let path = format!("/api/widgets/{}/data", widget_id);
        let data: WidgetDataResponse = get_json(&path).await?;
        Ok(data.pins)
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = widget_id;
        Ok(HashMap::new())
    }
}
