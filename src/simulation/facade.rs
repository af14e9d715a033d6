use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::domain::PairKeyMode;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with the built-in balls on a canvas of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = fromScene)]
    pub fn from_scene(width: u32, height: u32, json: String) -> Result<World, JsValue> {
        let mut core = WorldCore::new(width, height);
        core.load_scene_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Follow a canvas resize
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core.set_viewport(width, height);
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.core.set_gravity(gravity);
    }

    /// Key contact streaks by (min, max) index instead of scan order
    pub fn set_canonical_pair_keys(&mut self, enabled: bool) {
        let mode = if enabled { PairKeyMode::Canonical } else { PairKeyMode::Ordered };
        self.core.set_pair_key_mode(mode);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn load_scene(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_scene_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn scene_json(&self) -> Result<String, JsValue> {
        self.core.scene_json().map_err(|e| JsValue::from_str(&e))
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === POINTER API ===

    /// mousedown: grab the nearest body under the pointer, returns 1 or 0
    pub fn pointer_down(&mut self, x: f64, y: f64) -> u32 {
        self.core.pointer_down(x, y)
    }

    /// mousemove: dragged bodies follow the pointer
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.core.pointer_move(x, y);
    }

    /// mouseup: release everything
    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    /// click: kick free bodies under the pointer upwards, returns how many
    pub fn click(&mut self, x: f64, y: f64) -> u32 {
        self.core.click(x, y)
    }

    // === FRAME API ===

    /// Step the simulation one frame (fixed time step)
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Step one frame, feeding the real elapsed time to the split timer
    pub fn step_elapsed(&mut self, elapsed_ms: f64) {
        self.core.step_elapsed(elapsed_ms);
    }

    /// Paint visible bodies; the caller clears the canvas first
    pub fn draw(&self, mut ctx: CanvasRenderingContext2d) {
        self.core.draw(&mut ctx);
    }

    /// Pack visible bodies into the draw list, returns the circle count
    pub fn extract_draw_list(&mut self) -> usize {
        self.core.extract_draw_list()
    }

    /// Get pointer to the draw list (for JS rendering)
    pub fn draw_list_ptr(&self) -> *const f32 {
        self.core.draw_list_ptr()
    }

    /// Draw list length in f32 elements
    pub fn draw_list_len(&self) -> usize {
        self.core.draw_list_len()
    }

    // === QUERIES ===

    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    pub fn live_body_count(&self) -> usize {
        self.core.live_body_count()
    }

    pub fn split_pending(&self) -> bool {
        self.core.split_pending()
    }

    /// Pairs with a running contact streak
    pub fn pair_count(&self) -> usize {
        self.core.pair_count()
    }

    pub fn body_x(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.x).unwrap_or(0.0)
    }

    pub fn body_y(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.y).unwrap_or(0.0)
    }

    pub fn body_vx(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.vx).unwrap_or(0.0)
    }

    pub fn body_vy(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.vy).unwrap_or(0.0)
    }

    pub fn body_radius(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.radius).unwrap_or(0.0)
    }

    pub fn body_mass(&self, index: usize) -> f64 {
        self.core.body(index).map(|b| b.mass).unwrap_or(0.0)
    }

    /// `#rrggbb`, empty for an unknown index
    pub fn body_color(&self, index: usize) -> String {
        self.core.body(index).map(|b| b.color.to_hex()).unwrap_or_default()
    }

    pub fn body_absorbed(&self, index: usize) -> bool {
        self.core.body(index).map(|b| b.absorbed).unwrap_or(false)
    }

    pub fn body_dragging(&self, index: usize) -> bool {
        self.core.body(index).map(|b| b.dragging).unwrap_or(false)
    }
}
