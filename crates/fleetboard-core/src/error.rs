//! Error types for the fleetboard core

/// Errors raised by request builders before any request is constructed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0} parameter is missing")]
    MissingParameter(&'static str),
}

/// Errors raised by dashboard scene operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("Widget {0} not found")]
    WidgetNotFound(u64),
}

/// Metadata field validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetaFieldError {
    #[error("Metadata field name must not be empty")]
    EmptyName,

    #[error("Range field '{name}' has from ({from}) greater than to ({to})")]
    InvertedRange { name: String, from: f64, to: f64 },
}

/// Role parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}
