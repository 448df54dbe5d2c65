//! BDD step definitions for the dashboard scene

use cucumber::{given, then, when};
use fleetboard_core::placement::Breakpoint;
use fleetboard_core::widget::{Widget, WidgetType};
use fleetboard_core::DashboardError;

use crate::world::FleetboardWorld;

#[given("an empty dashboard")]
fn empty_dashboard(world: &mut FleetboardWorld) {
    world.widgets.clear();
}

#[when(expr = "a {int}x{int} chart {string} is added")]
fn add_chart(world: &mut FleetboardWorld, width: u32, height: u32, label: String) {
    world.scene().add_widget(Widget {
        id: 0,
        widget_type: WidgetType::LinearChart,
        label,
        x: 0,
        y: 0,
        width,
        height,
        sources: vec![],
    });
}

#[when(expr = "widget {int} is cloned on breakpoint {string}")]
fn clone_widget(world: &mut FleetboardWorld, id: u64, breakpoint: String) {
    let breakpoint: Breakpoint = breakpoint.parse().expect("valid breakpoint");
    let result = world.scene().clone_widget(id, breakpoint);
    world.clone_result = Some(result);
}

#[when(expr = "widget {int} is deleted")]
fn delete_widget(world: &mut FleetboardWorld, id: u64) {
    world.scene().delete_widget(id);
}

#[then(expr = "the dashboard should have {int} widgets")]
fn widget_count(world: &mut FleetboardWorld, count: usize) {
    assert_eq!(world.widgets.len(), count);
}

#[then(expr = "widget {int} should be at {int},{int}")]
fn widget_at(world: &mut FleetboardWorld, id: u64, x: u32, y: u32) {
    let widget = world
        .widgets
        .iter()
        .find(|w| w.id == id)
        .expect("widget not found");
    assert_eq!((widget.x, widget.y), (x, y));
}

fn cloned(world: &FleetboardWorld) -> &Widget {
    let id = *world
        .clone_result
        .as_ref()
        .expect("nothing cloned")
        .as_ref()
        .expect("clone failed");
    world
        .widgets
        .iter()
        .find(|w| w.id == id)
        .expect("clone not stored")
}

#[then("the clone should have a new id")]
fn clone_has_new_id(world: &mut FleetboardWorld) {
    let id = cloned(world).id;
    assert_eq!(world.widgets.iter().filter(|w| w.id == id).count(), 1);
}

#[then(expr = "the clone should be labelled {string}")]
fn clone_label(world: &mut FleetboardWorld, label: String) {
    assert_eq!(cloned(world).label, label);
}

#[then("no two widgets should overlap")]
fn no_overlap(world: &mut FleetboardWorld) {
    for (i, a) in world.widgets.iter().enumerate() {
        for b in world.widgets.iter().skip(i + 1) {
            assert!(!a.rect().overlaps(&b.rect()), "{:?} overlaps {:?}", a, b);
        }
    }
}

#[then(expr = "cloning should fail because widget {int} was not found")]
fn clone_fails(world: &mut FleetboardWorld, id: u64) {
    assert_eq!(
        world.clone_result,
        Some(Err(DashboardError::WidgetNotFound(id)))
    );
}
