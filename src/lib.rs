//! Particle Life Engine - particle life simulation in WASM
//!
//! Particles of a handful of colors attract and repel each other according
//! to a per color pair force matrix, on a wrapping 2-D world.
//!
//! Architecture:
//! - core/       - SoA particle store, safety and logging macros
//! - domain/     - force law, force matrix, palette, configuration
//! - spatial/    - torus arithmetic and the neighbor grid
//! - simulation/ - engine orchestration and the JS facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
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

    console_log!("Particle life engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Force profile, exported so the UI can plot it next to the sliders.
#[wasm_bindgen]
pub fn attraction(dist: f32, force: f32, min_dist: f32, max_dist: f32) -> f32 {
    domain::forces::attraction(dist, force, min_dist, max_dist)
}

/// Every color the UI can add, in order, as a JSON array.
#[wasm_bindgen]
pub fn palette_json() -> String {
    serde_json::to_string(&domain::palette::COLOR_LIST).unwrap_or_default()
}

// Re-export main types
pub use crate::core::particles::{ParticleStore, ParticleView};
pub use domain::{ConfigError, ForceMatrix, SimulationConfig};
pub use simulation::{
    default_store, EngineEvent, KeyValueStore, Listener, MemoryStore, ParticleLife, PerfStats,
    SimulationEngine, SubscriptionId, SETTINGS_KEY,
};
