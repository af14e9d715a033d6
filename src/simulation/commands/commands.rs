use crate::input;

use super::WorldCore;

pub(super) fn pointer_down(world: &mut WorldCore, x: f64, y: f64) -> u32 {
    input::begin_drag(&mut world.bodies, x, y)
}

pub(super) fn pointer_move(world: &mut WorldCore, x: f64, y: f64) {
    input::drag_to(&mut world.bodies, x, y);
}

pub(super) fn pointer_up(world: &mut WorldCore) {
    input::end_drag(&mut world.bodies);
}

pub(super) fn click(world: &mut WorldCore, x: f64, y: f64) -> u32 {
    input::apply_impulse(&mut world.bodies, x, y, &world.settings)
}
