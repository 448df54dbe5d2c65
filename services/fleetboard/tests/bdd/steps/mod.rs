//! BDD step definitions for fleetboard service

pub mod dashboard_steps;
pub mod middleware_steps;
