//! BDD test world for fleetboard core

use cucumber::World;
use fleetboard_core::api::RequestAction;
use fleetboard_core::dashboard::DashboardScene;
use fleetboard_core::placement::{Origin, Rect};
use fleetboard_core::role::RoleView;
use fleetboard_core::store::Store;
use fleetboard_core::widget::Widget;
use fleetboard_core::{ApiError, DashboardError};

#[derive(Debug, Default, World)]
pub struct FleetboardWorld {
    // Placement
    pub existing: Vec<Rect>,
    pub placed: Option<Origin>,

    // Request builders
    pub request: Option<Result<RequestAction, ApiError>>,

    // Store
    pub store: Store,

    // Dashboard scene
    pub widgets: Vec<Widget>,
    pub clone_result: Option<Result<u64, DashboardError>>,

    // Role selector
    pub role_view: Option<RoleView>,
}

impl FleetboardWorld {
    pub fn scene(&mut self) -> DashboardScene<&mut Vec<Widget>> {
        DashboardScene::new(&mut self.widgets)
    }
}
