//! UI components

pub mod add_metadata_field;
pub mod critical_event;
pub mod dashboard_grid;
pub mod device_table;
pub mod field_stub;
pub mod linear_chart;
pub mod role_select;
