//! BDD step definitions for fleetboard core

pub mod api_steps;
pub mod dashboard_steps;
pub mod placement_steps;
pub mod role_steps;
pub mod store_steps;
