//! Integrator - gravity, motion and wall bounces for one body
//!
//! Units are mixed: `vx` is already pixels per frame,
//! `vy` is metres per second and is scaled by `pixels_per_meter * time_step`
//! when the body moves.

use crate::domain::PhysicsSettings;
use crate::body::Body;

/// Advance one body by one frame inside a `width` x `height` canvas.
///
/// Walls are checked after the move, each axis on its own. Vertical bounces
/// lose energy (`restitution`), horizontal ones do not.
pub fn integrate(body: &mut Body, settings: &PhysicsSettings, width: f64, height: f64) {
    body.vy += settings.gravity * settings.time_step;

    body.x += body.vx;
    body.y += body.vy * settings.pixels_per_meter * settings.time_step;

    if body.y + body.radius > height {
        body.y = height - body.radius;
        body.vy = -body.vy * settings.restitution;
    }

    if body.y - body.radius < 0.0 {
        body.y = body.radius;
        body.vy = -body.vy * settings.restitution;
    }

    if body.x + body.radius > width {
        body.x = width - body.radius;
        body.vx = -body.vx;
    }

    if body.x - body.radius < 0.0 {
        body.x = body.radius;
        body.vx = -body.vx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rgb;

    fn ball(x: f64, y: f64, radius: f64, mass: f64) -> Body {
        Body::new(x, y, radius, Rgb::default(), mass, 0.0)
    }

    #[test]
    fn gravity_adds_g_dt_regardless_of_mass() {
        let settings = PhysicsSettings::default();
        for mass in [0.1, 1.0, 250.0] {
            let mut body = ball(400.0, 300.0, 10.0, mass);
            body.vy = 1.5;
            integrate(&mut body, &settings, 800.0, 600.0);
            assert_eq!(body.vy, 1.5 + settings.gravity * settings.time_step);
        }
    }

    #[test]
    fn moves_x_in_pixels_and_y_in_scaled_metres() {
        let settings = PhysicsSettings::default();
        let mut body = ball(400.0, 300.0, 10.0, 1.0);
        body.vx = 2.0;
        integrate(&mut body, &settings, 800.0, 600.0);

        let vy = settings.gravity * settings.time_step;
        assert_eq!(body.x, 402.0);
        assert_eq!(body.y, 300.0 + vy * settings.pixels_per_meter * settings.time_step);
    }

    #[test]
    fn floor_bounce_clamps_and_damps() {
        let settings = PhysicsSettings::default();
        let mut body = ball(100.0, 590.0, 10.0, 1.0);
        body.vy = 3.0;
        integrate(&mut body, &settings, 800.0, 600.0);

        let before_bounce = 3.0 + settings.gravity * settings.time_step;
        assert_eq!(body.y, 590.0);
        assert_eq!(body.vy, -before_bounce * 0.8);
    }

    #[test]
    fn ceiling_bounce_clamps_and_damps() {
        let settings = PhysicsSettings::default();
        let mut body = ball(100.0, 12.0, 10.0, 1.0);
        body.vy = -5.0;
        integrate(&mut body, &settings, 800.0, 600.0);

        let before_bounce = -5.0 + settings.gravity * settings.time_step;
        assert_eq!(body.y, 10.0);
        assert_eq!(body.vy, -before_bounce * 0.8);
    }

    #[test]
    fn side_walls_reflect_without_loss() {
        let settings = PhysicsSettings::default();

        let mut right = ball(795.0, 300.0, 10.0, 1.0);
        right.vx = 3.0;
        integrate(&mut right, &settings, 800.0, 600.0);
        assert_eq!(right.x, 790.0);
        assert_eq!(right.vx, -3.0);

        let mut left = ball(11.0, 300.0, 10.0, 1.0);
        left.vx = -4.0;
        integrate(&mut left, &settings, 800.0, 600.0);
        assert_eq!(left.x, 10.0);
        assert_eq!(left.vx, 4.0);
    }
}
