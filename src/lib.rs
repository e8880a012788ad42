//! Sandfall Engine - chunked falling-sand simulation for native and WASM hosts
//!
//! Architecture:
//! - domain/      - element catalogue, palettes, manifest
//! - spatial/     - cell store (SoA grid) and chunk activity tracking
//! - systems/     - per-class movement behaviors
//! - simulation/  - stepping, commands, snapshots, JS facade

pub mod error;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Short paths used throughout the crate
pub use spatial::chunks;
pub use spatial::grid;
pub use domain::elements;
pub use domain::palette;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Thread pool setup for the `parallel` array passes on the web
#[cfg(all(target_arch = "wasm32", feature = "parallel"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("sandfall-engine {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use error::EngineError;
pub use grid::Cell;
pub use elements::{BehaviorKind, ElementKind};
pub use simulation::{EngineConfig, PerfStats, World, WorldCore};

// Export element constants for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { elements::EL_EMPTY }
#[wasm_bindgen]
pub fn el_stone() -> u8 { elements::EL_STONE }
#[wasm_bindgen]
pub fn el_wood() -> u8 { elements::EL_WOOD }
#[wasm_bindgen]
pub fn el_brick() -> u8 { elements::EL_BRICK }
#[wasm_bindgen]
pub fn el_sand() -> u8 { elements::EL_SAND }
#[wasm_bindgen]
pub fn el_dirt() -> u8 { elements::EL_DIRT }
#[wasm_bindgen]
pub fn el_water() -> u8 { elements::EL_WATER }
#[wasm_bindgen]
pub fn el_steam() -> u8 { elements::EL_STEAM }
#[wasm_bindgen]
pub fn el_helium() -> u8 { elements::EL_HELIUM }
#[wasm_bindgen]
pub fn el_rainbow_sand() -> u8 { elements::EL_RAINBOW_SAND }

/// Full element manifest as JSON (ids, keys, classes, swatch colours).
#[wasm_bindgen]
pub fn get_element_manifest_json() -> String {
    domain::content::manifest_json()
}
