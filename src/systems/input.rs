//! Input Adapter - pointer drag and click kicks
//!
//! Pointer coordinates are canvas pixels, the same space as body positions.

use crate::body::Body;
use crate::domain::PhysicsSettings;

/// Grab the visible body under the pointer whose centre is nearest.
/// Returns 1 if a body was grabbed, 0 otherwise.
pub fn begin_drag(bodies: &mut [Body], x: f64, y: f64) -> u32 {
    let nearest = bodies
        .iter_mut()
        .filter(|b| b.is_live() && b.contains(x, y))
        .min_by(|a, b| {
            let da = (a.x - x).hypot(a.y - y);
            let db = (b.x - x).hypot(b.y - y);
            da.total_cmp(&db)
        });
    match nearest {
        Some(body) => {
            body.dragging = true;
            1
        }
        None => 0,
    }
}

/// Pin dragged bodies to the pointer. Velocity is left as it was, so a
/// released body carries on with its pre-drag motion.
pub fn drag_to(bodies: &mut [Body], x: f64, y: f64) {
    for body in bodies.iter_mut().filter(|b| b.dragging) {
        body.x = x;
        body.y = y;
    }
}

pub fn end_drag(bodies: &mut [Body]) {
    for body in bodies.iter_mut() {
        body.dragging = false;
    }
}

/// Upward kick for the free bodies under a click: vy = -sqrt(2·g·ppm·m) / 2.
/// Returns how many bodies were kicked.
pub fn apply_impulse(bodies: &mut [Body], x: f64, y: f64, settings: &PhysicsSettings) -> u32 {
    let mut kicked = 0;
    for body in bodies.iter_mut() {
        if body.is_live() && !body.dragging && body.contains(x, y) {
            body.vy = -(2.0 * settings.gravity * settings.pixels_per_meter * body.mass).sqrt() / 2.0;
            kicked += 1;
        }
    }
    kicked
}
