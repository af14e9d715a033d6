use crate::domain::{BodySpec, Rgb};

/// Circular body
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    // === Physics State ===
    pub x: f64,
    pub y: f64,
    /// Horizontal velocity (pixels per frame)
    pub vx: f64,
    /// Vertical velocity (metres per second, scaled to pixels on integration)
    pub vy: f64,
    pub radius: f64,
    pub mass: f64,
    pub color: Rgb,

    // === Flags ===
    /// Held by the pointer: no integration, no collisions as the active body
    pub dragging: bool,
    /// Merged into another body: skipped by physics and drawing until split
    pub absorbed: bool,
    /// Never read or written by the simulation
    pub merge_countdown: u32,

    // === Snapshot at creation ===
    original_radius: f64,
    original_color: Rgb,
}

impl Body {
    pub fn new(x: f64, y: f64, radius: f64, color: Rgb, mass: f64, vx: f64) -> Self {
        Self {
            x,
            y,
            vx,
            vy: 0.0,
            radius,
            mass,
            color,
            dragging: false,
            absorbed: false,
            merge_countdown: 0,
            original_radius: radius,
            original_color: color,
        }
    }

    pub fn from_spec(spec: &BodySpec, vx: f64) -> Self {
        Self::new(spec.x, spec.y, spec.radius, spec.color, spec.mass, vx)
    }

    pub fn original_radius(&self) -> f64 {
        self.original_radius
    }

    pub fn original_color(&self) -> Rgb {
        self.original_color
    }

    /// Taking part in physics and drawing
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.absorbed
    }

    /// Point strictly inside the circle
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x - x).hypot(self.y - y) < self.radius
    }

    /// Put radius and color back to the creation snapshot and rejoin the world.
    /// Mass is left alone, it never changes on the absorbed side of a merge.
    pub fn restore(&mut self) {
        self.radius = self.original_radius;
        self.color = self.original_color;
        self.absorbed = false;
    }
}
