//! World - chunked falling-sand simulation
//!
//! `WorldCore` owns the Cell Store, the processed mask and the behavior
//! registry, and only orchestrates: stepping lives in `step/`, painting in
//! `commands/`, snapshot access in `render/`. `World` wraps it for JS.

use rand_chacha::ChaCha8Rng;

use crate::behaviors::BehaviorRegistry;
use crate::domain::content;
use crate::elements::ElementKind;
use crate::error::EngineError;
use crate::grid::{Cell, Grid, ProcessedMask};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "step/chunk_processing.rs"]
mod chunk_processing;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use config::EngineConfig;
pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    processed: ProcessedMask,
    behaviors: BehaviorRegistry,
    rng: ChaCha8Rng,

    // Settings
    settle_threshold: u8,

    // State
    tick: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with default seed and settling.
    pub fn new(width: u32, height: u32, chunk_size: u32) -> Result<Self, EngineError> {
        init::create_world_core(EngineConfig {
            width,
            height,
            chunk_size,
            ..EngineConfig::default()
        })
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        init::create_world_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        init::create_world_core(EngineConfig::from_json(json)?)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn chunk_size(&self) -> u32 { self.grid.chunks().chunk_size() }

    pub fn chunks_x(&self) -> u32 { self.grid.chunks().dimensions().0 }

    pub fn chunks_y(&self) -> u32 { self.grid.chunks().dimensions().1 }

    pub fn particle_count(&self) -> u32 { self.grid.particle_count() }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 { self.tick }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Idle ticks before a stuck particle is skipped; 0 turns settling off.
    pub fn set_settle_threshold(&mut self, ticks: u8) {
        settings::set_settle_threshold(self, ticks);
    }

    pub fn settle_threshold(&self) -> u8 { self.settle_threshold }

    // === Cell access ===

    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.grid.get(x, y)
    }

    /// Write one cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, kind: ElementKind) -> bool {
        commands::set(self, x, y, kind)
    }

    /// Write one cell by numeric element id; unknown ids are ignored.
    pub fn set_by_id(&mut self, x: i32, y: i32, id: u8) -> bool {
        commands::set_by_id(self, x, y, id)
    }

    /// Write one cell by element key (`"sand"`); unknown keys are ignored.
    pub fn set_by_key(&mut self, x: i32, y: i32, key: &str) -> bool {
        commands::set_by_key(self, x, y, key)
    }

    pub fn move_cell(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        self.grid.move_cell(from_x, from_y, to_x, to_y)
    }

    /// Brush: fill a disc, clipped to the grid. Returns the number of cells written.
    pub fn spawn_in_radius(&mut self, cx: i32, cy: i32, radius: i32, kind: ElementKind) -> u32 {
        commands::spawn_in_radius(self, cx, cy, radius, kind)
    }

    pub fn spawn_in_radius_by_id(&mut self, cx: i32, cy: i32, radius: i32, id: u8) -> u32 {
        commands::spawn_in_radius_by_id(self, cx, cy, radius, id)
    }

    pub fn spawn_in_radius_by_key(&mut self, cx: i32, cy: i32, radius: i32, key: &str) -> u32 {
        commands::spawn_in_radius_by_key(self, cx, cy, radius, key)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward by one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Snapshots ===

    pub fn get_grid(&self) -> &[ElementKind] {
        render_extract::get_grid(self)
    }

    /// ABGR colour per cell, row-major.
    pub fn get_color_buffer(&self) -> &[u32] {
        render_extract::get_color_buffer(self)
    }

    /// Colour buffer as tightly packed RGBA bytes.
    pub fn color_buffer_rgba(&self) -> Vec<u8> {
        render_extract::color_buffer_rgba(self)
    }

    /// Get pointer to types array (for JS rendering)
    pub fn types_ptr(&self) -> *const u8 {
        render_extract::types_ptr(self)
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.grid.colors_ptr()
    }

    pub fn types_len(&self) -> usize {
        self.grid.size()
    }

    /// Chunks processed by the most recent step, as `cy * chunks_x + cx`.
    pub fn active_chunk_indices(&self) -> Vec<u32> {
        self.grid.chunks().last_consumed_indices()
    }

    /// Chunks queued for the next step.
    pub fn pending_chunk_count(&self) -> usize {
        self.grid.chunks().pending_count()
    }

    pub fn element_manifest_json(&self) -> String {
        content::manifest_json()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
