//! BDD step definitions for widget placement

use cucumber::{given, then, when};
use fleetboard_core::placement::{compute_placement, Breakpoint, Rect, Size};

use crate::world::FleetboardWorld;

#[given("an empty grid")]
fn empty_grid(world: &mut FleetboardWorld) {
    world.existing.clear();
}

#[given(expr = "a widget at {int},{int} sized {int}x{int}")]
fn widget_at(world: &mut FleetboardWorld, x: u32, y: u32, width: u32, height: u32) {
    world.existing.push(Rect {
        x,
        y,
        width,
        height,
    });
}

#[when(expr = "a {int}x{int} widget is placed on breakpoint {string}")]
fn place_widget(world: &mut FleetboardWorld, width: u32, height: u32, breakpoint: String) {
    let breakpoint: Breakpoint = breakpoint.parse().expect("valid breakpoint");
    let size = Size { width, height };
    let origin = compute_placement(size, &world.existing, breakpoint);
    world.placed = Some(origin);
    world.existing.push(Rect::at(origin, size));
}

#[then(expr = "the widget should be placed at {int},{int}")]
fn placed_at(world: &mut FleetboardWorld, x: u32, y: u32) {
    let origin = world.placed.expect("no widget placed");
    assert_eq!((origin.x, origin.y), (x, y));
}

#[then("the placed widget should not overlap any existing widget")]
fn no_overlap(world: &mut FleetboardWorld) {
    let (placed, others) = world.existing.split_last().expect("no widget placed");
    for other in others {
        assert!(
            !placed.overlaps(other),
            "{:?} overlaps {:?}",
            placed,
            other
        );
    }
}
