use wasm_bindgen::prelude::*;

use crate::error::EngineError;

use super::perf_stats::PerfStats;
use super::WorldCore;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS handle. Cells are addressed by signed coordinates and numeric
/// element ids (see `el_*()`); bad input is ignored, never thrown.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world; throws on zero width, height or chunk size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, chunk_size: u32) -> Result<World, JsValue> {
        let core = WorldCore::new(width, height, chunk_size).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.core.tick() }

    #[wasm_bindgen(getter)]
    pub fn chunks_x(&self) -> u32 { self.core.chunks_x() }

    #[wasm_bindgen(getter)]
    pub fn chunks_y(&self) -> u32 { self.core.chunks_y() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_settle_threshold(&mut self, ticks: u8) {
        self.core.set_settle_threshold(ticks);
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn set(&mut self, x: i32, y: i32, element: u8) -> bool {
        self.core.set_by_id(x, y, element)
    }

    pub fn spawn_in_radius(&mut self, cx: i32, cy: i32, radius: i32, element: u8) -> u32 {
        self.core.spawn_in_radius_by_id(cx, cy, radius, element)
    }

    pub fn set_by_key(&mut self, x: i32, y: i32, key: &str) -> bool {
        self.core.set_by_key(x, y, key)
    }

    pub fn spawn_in_radius_by_key(&mut self, cx: i32, cy: i32, radius: i32, key: &str) -> u32 {
        self.core.spawn_in_radius_by_key(cx, cy, radius, key)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Element id at (x, y); empty outside the grid.
    pub fn get_kind(&self, x: i32, y: i32) -> u8 {
        self.core.get(x, y).kind.id()
    }

    pub fn types_ptr(&self) -> *const u8 {
        self.core.types_ptr()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn types_len(&self) -> usize {
        self.core.types_len()
    }

    /// RGBA copy of the colour buffer, ready for `ImageData`.
    pub fn get_color_buffer(&self) -> Vec<u8> {
        self.core.color_buffer_rgba()
    }

    pub fn get_active_chunk_indices(&self) -> Vec<u32> {
        self.core.active_chunk_indices()
    }

    pub fn pending_chunk_count(&self) -> usize {
        self.core.pending_chunk_count()
    }

    pub fn get_element_manifest_json(&self) -> String {
        self.core.element_manifest_json()
    }
}
