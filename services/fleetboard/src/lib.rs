//! Fleetboard - IoT device dashboard host service
//!
//! Executes request descriptors against the device API, folds the results into
//! the client store and serves the dashboard.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod io;
pub mod middleware;
pub mod refresh;
pub mod state;

pub use config::{load_config, Config};
pub use error::{FleetboardError, Result};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::dashboard::DashboardState;
use crate::io::ReqwestHttpClient;
use crate::middleware::ApiMiddleware;
use crate::refresh::{live_chart_ids, Refresher};

/// Run the fleetboard service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::new(Duration::from_secs(
        config.api.timeout_seconds,
    ))?);
    let cancel = CancellationToken::new();
    let store = state::new_store_handle();

    let middleware = Arc::new(ApiMiddleware::new(
        http,
        &config.api.base_url,
        Arc::clone(&store),
    ));

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    if config.refresh.enabled {
        let refresher = Refresher::new(
            Arc::clone(&middleware),
            config.api.org_id,
            live_chart_ids(
                &config.dashboard.widgets,
                config.dashboard.fetch_real_data,
            ),
            Duration::from_secs(config.refresh.interval_seconds),
            cancel.clone(),
        );
        tokio::spawn(async move {
            refresher.run().await;
        });
    }

    let router = dashboard::build_router(DashboardState {
        store,
        widgets: Arc::new(config.dashboard.widgets),
        fetch_real_data: config.dashboard.fetch_real_data,
    });
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        FleetboardError::Dashboard(format!(
            "Failed to bind port {}: {}",
            config.server.port, e
        ))
    })?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Fleetboard stopped");
    Ok(())
}
