use wasm_bindgen::prelude::*;

/// Snapshot of the last step (all zeros while metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) pairs_checked: u32,
    pub(super) contacts: u32,
    pub(super) merges: u32,
    pub(super) splits: u32,
    pub(super) live_bodies: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn pairs_checked(&self) -> u32 { self.pairs_checked }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn merges(&self) -> u32 { self.merges }
    #[wasm_bindgen(getter)]
    pub fn splits(&self) -> u32 { self.splits }
    #[wasm_bindgen(getter)]
    pub fn live_bodies(&self) -> u32 { self.live_bodies }
}
