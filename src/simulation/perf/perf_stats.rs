use wasm_bindgen::prelude::*;

/// Counters for the most recent step. All zero while metrics are off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) active_chunks: u32,
    pub(super) cells_visited: u32,
    pub(super) behaviors_invoked: u32,
    pub(super) moves: u32,
    pub(super) settled_skipped: u32,
    pub(super) particle_count: u32,
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
    pub fn active_chunks(&self) -> u32 { self.active_chunks }
    #[wasm_bindgen(getter)]
    pub fn cells_visited(&self) -> u32 { self.cells_visited }
    #[wasm_bindgen(getter)]
    pub fn behaviors_invoked(&self) -> u32 { self.behaviors_invoked }
    #[wasm_bindgen(getter)]
    pub fn moves(&self) -> u32 { self.moves }
    #[wasm_bindgen(getter)]
    pub fn settled_skipped(&self) -> u32 { self.settled_skipped }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
