//! BDD step definitions for the role selector

use cucumber::{then, when};
use fleetboard_core::role::{Role, RoleView};

use crate::world::FleetboardWorld;

#[when(expr = "the role selector shows {string}")]
fn selector_shows(world: &mut FleetboardWorld, role: String) {
    let role: Role = role.parse().expect("known role");
    world.role_view = Some(RoleView::for_role(role));
}

#[then(expr = "the selector should be read only with title {string}")]
fn read_only(world: &mut FleetboardWorld, expected: String) {
    match world.role_view.as_ref().expect("no view") {
        RoleView::ReadOnly { title } => assert_eq!(*title, expected),
        other => panic!("expected read only view, got {:?}", other),
    }
}

#[then(expr = "the selector should be editable with {int} options")]
fn editable(world: &mut FleetboardWorld, count: usize) {
    match world.role_view.as_ref().expect("no view") {
        RoleView::Editable { options, .. } => {
            assert_eq!(options.len(), count);
            assert!(options.iter().all(|r| !r.is_protected()));
        }
        other => panic!("expected editable view, got {:?}", other),
    }
}
