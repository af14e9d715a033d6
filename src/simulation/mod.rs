//! World - the bouncing/merging circle simulation
//!
//! `WorldCore` owns everything a frame touches: the body registry, the
//! merge/split state, the canvas size and the render transfer buffer.
//! It only orchestrates; the physics live in `systems/`:
//! - integrator.rs - gravity, motion, wall bounces
//! - collision.rs  - circle contacts
//! - merge/        - contact streaks, merge, delayed split
//! - input.rs      - pointer drag and click kicks
//!
//! `World` (facade.rs) is the wasm-bindgen wrapper the page talks to.

use crate::body::Body;
use crate::domain::{PairKeyMode, PhysicsSettings, SceneConfig};
use crate::merge::MergeState;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/surface.rs"]
mod surface;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::FLOATS_PER_CIRCLE;
pub use surface::{CircleDraw, RecordingSurface, Surface};

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    scene: SceneConfig,
    settings: PhysicsSettings,
    bodies: Vec<Body>,
    merge: MergeState,

    // Canvas
    width: f64,
    height: f64,

    // State
    frame: u64,

    // Render transfer buffer (x, y, r, color bits) per visible body
    draw_list: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// World with the five built-in balls
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width as f64, height as f64, SceneConfig::default())
    }

    pub fn with_scene(width: u32, height: u32, scene: SceneConfig) -> Result<Self, String> {
        scene.validate()?;
        Ok(init::create_world_core(width as f64, height as f64, scene))
    }

    /// Replace the whole world from scene JSON.
    /// On error the current world is left untouched.
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        let scene = SceneConfig::from_json(json)?;
        init::load_scene(self, scene);
        Ok(())
    }

    /// Current settings and bodies as scene JSON
    pub fn scene_json(&self) -> Result<String, String> {
        init::snapshot_scene(self).to_json()
    }

    /// Rebuild the bodies of the loaded scene from scratch
    pub fn reset(&mut self) {
        let scene = self.scene.clone();
        init::load_scene(self, scene);
    }

    pub fn width(&self) -> f64 { self.width }

    pub fn height(&self) -> f64 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn settings(&self) -> &PhysicsSettings { &self.settings }

    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn body(&self, index: usize) -> Option<&Body> { self.bodies.get(index) }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    /// Bodies not currently absorbed
    pub fn live_body_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.is_live()).count()
    }

    pub fn split_pending(&self) -> bool { self.merge.split_pending() }

    /// Number of pairs with a running contact streak
    pub fn pair_count(&self) -> usize { self.merge.counters().len() }

    pub fn merge_state(&self) -> &MergeState { &self.merge }

    // === SETTINGS ===

    /// Canvas size; walls follow it from the next step on
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        settings::set_viewport(self, width, height);
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_pair_key_mode(&mut self, mode: PairKeyMode) {
        settings::set_pair_key_mode(self, mode);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === POINTER INPUT ===

    pub fn pointer_down(&mut self, x: f64, y: f64) -> u32 {
        commands::pointer_down(self, x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        commands::pointer_move(self, x, y)
    }

    pub fn pointer_up(&mut self) {
        commands::pointer_up(self)
    }

    pub fn click(&mut self, x: f64, y: f64) -> u32 {
        commands::click(self, x, y)
    }

    // === FRAME ===

    /// One frame at the fixed time step; the split timer sees the nominal
    /// frame duration.
    pub fn step(&mut self) {
        let frame_ms = self.settings.time_step * 1000.0;
        step::step(self, frame_ms);
    }

    /// One frame at the fixed time step; the split timer sees `elapsed_ms`
    /// of real time instead. Negative or non-finite values count as 0.
    pub fn step_elapsed(&mut self, elapsed_ms: f64) {
        step::step(self, elapsed_ms);
    }

    /// Issue one filled circle per visible body, in registry order
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        render_extract::draw(self, surface);
    }

    /// Pack visible bodies into the transfer buffer; returns the circle count
    pub fn extract_draw_list(&mut self) -> usize {
        render_extract::extract_draw_list(self)
    }

    pub fn draw_list(&self) -> &[f32] { &self.draw_list }

    /// Get pointer to the draw list (for JS rendering)
    pub fn draw_list_ptr(&self) -> *const f32 { self.draw_list.as_ptr() }

    pub fn draw_list_len(&self) -> usize { self.draw_list.len() }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
