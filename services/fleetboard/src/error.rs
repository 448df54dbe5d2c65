//! Error types for the fleetboard service

/// Errors that can occur in the fleetboard service
#[derive(Debug, thiserror::Error)]
pub enum FleetboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Api(#[from] fleetboard_core::ApiError),

    #[error("Dashboard error: {0}")]
    Dashboard(String),
}

/// Result type alias for fleetboard operations
pub type Result<T> = std::result::Result<T, FleetboardError>;
