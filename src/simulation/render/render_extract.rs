use super::surface::Surface;
use super::WorldCore;

/// x, y, radius, color (`0x00RRGGBB` stored as raw f32 bits)
pub const FLOATS_PER_CIRCLE: usize = 4;

pub(super) fn draw<S: Surface + ?Sized>(world: &WorldCore, surface: &mut S) {
    for body in world.bodies.iter().filter(|b| b.is_live()) {
        surface.fill_circle(body.x, body.y, body.radius, body.color);
    }
}

/// Refill the transfer buffer. JS reads it back as a Float32Array and
/// reinterprets every 4th slot through a Uint32Array view to get the color.
pub(super) fn extract_draw_list(world: &mut WorldCore) -> usize {
    world.draw_list.clear();
    let mut count = 0;
    for body in world.bodies.iter().filter(|b| b.is_live()) {
        world.draw_list.extend_from_slice(&[
            body.x as f32,
            body.y as f32,
            body.radius as f32,
            f32::from_bits(body.color.packed()),
        ]);
        count += 1;
    }
    count
}
