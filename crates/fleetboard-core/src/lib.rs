//! Fleetboard core
//!
//! Domain model and view logic for the device-management dashboard: widget
//! placement on responsive grids, chart series shaping, role gating, request
//! descriptors for the remote API, and the reducers that fold API responses
//! into the client-side store.

pub mod api;
pub mod chart;
pub mod dashboard;
pub mod device;
pub mod error;
pub mod event;
pub mod metadata;
pub mod placement;
pub mod role;
pub mod store;
pub mod stub;
pub mod widget;

pub use error::{ApiError, DashboardError, MetaFieldError, RoleError};
