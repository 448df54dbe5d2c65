//! Refresh: keeps the cached device list and widget telemetry current

use std::sync::Arc;
use std::time::Duration;

use fleetboard_core::api::{devices_fetch, DeviceParams};
use fleetboard_core::widget::{Widget, WidgetType};
use tokio_util::sync::CancellationToken;

use crate::middleware::ApiMiddleware;

/// Periodically re-fetches everything the dashboard shows
pub struct Refresher {
    middleware: Arc<ApiMiddleware>,
    org_id: Option<u64>,
    chart_ids: Vec<u64>,
    interval: Duration,
    cancel: CancellationToken,
}

impl Refresher {
    /// `chart_ids` lists the widgets whose live telemetry is loaded on each
    /// pass; leave it empty when charts show placeholder data.
    pub fn new(
        middleware: Arc<ApiMiddleware>,
        org_id: Option<u64>,
        chart_ids: Vec<u64>,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            middleware,
            org_id,
            chart_ids,
            interval,
            cancel,
        }
    }

    /// One refresh pass
    pub async fn refresh_once(&self) {
        match self.org_id {
            Some(org_id) => match devices_fetch(&DeviceParams::org(org_id)) {
                Ok(action) => {
                    self.middleware.dispatch(action).await;
                }
                Err(e) => tracing::warn!("Skipping device refresh: {}", e),
            },
            None => tracing::debug!("No organization configured, skipping device refresh"),
        }

        for widget_id in &self.chart_ids {
            self.middleware.load_widget_data(*widget_id).await;
        }
    }

    /// Refresh until the cancellation token is triggered
    pub async fn run(&self) {
        loop {
            self.refresh_once().await;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Refresh loop cancelled");
                    break;
                }
            }
        }
    }
}

/// Ids of the chart widgets that need live telemetry
pub fn live_chart_ids(widgets: &[Widget], fetch_real_data: bool) -> Vec<u64> {
    if !fetch_real_data {
        return Vec::new();
    }
    widgets
        .iter()
        .filter(|w| w.widget_type == WidgetType::LinearChart)
        .map(|w| w.id)
        .collect()
}
