use crate::domain::Rgb;

/// Anything that can paint a filled circle
pub trait Surface {
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb);
}

impl Surface for web_sys::CanvasRenderingContext2d {
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        self.begin_path();
        // Only fails for a negative radius.
        if self.arc(x, y, radius, 0.0, std::f64::consts::TAU).is_err() {
            return;
        }
        self.set_fill_style_str(&color.to_hex());
        self.fill();
        self.close_path();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDraw {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
}

/// Keeps every draw call (headless hosts, tests)
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<CircleDraw>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb) {
        self.calls.push(CircleDraw { x, y, radius, color });
    }
}
