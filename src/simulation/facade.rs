use wasm_bindgen::prelude::*;

use crate::domain::config::SimulationConfig;

use super::perf_stats::PerfStats;
use super::storage::{default_store, KeyValueStore};
use super::subscribers::{EngineEvent, SubscriptionId};
use super::SimulationEngine;

fn to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS handle to one simulation plus its settings store.
#[wasm_bindgen]
pub struct ParticleLife {
    engine: SimulationEngine,
    store: Box<dyn KeyValueStore>,
}

impl ParticleLife {
    /// The engine behind the handle, for Rust-side hosts and tests.
    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }
}

#[wasm_bindgen]
impl ParticleLife {
    /// New simulation with the default settings. A `seed` of 0 picks the
    /// built-in seed.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, capacity: usize, seed: u32) -> Result<ParticleLife, JsValue> {
        let engine = SimulationEngine::new(width, height, capacity, seed).map_err(to_js)?;
        Ok(Self {
            engine,
            store: default_store(),
        })
    }

    /// New simulation starting from a JSON settings blob.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        width: f32,
        height: f32,
        capacity: usize,
        seed: u32,
        config_json: &str,
    ) -> Result<ParticleLife, JsValue> {
        let config = SimulationConfig::from_json(config_json).map_err(to_js)?;
        let engine = SimulationEngine::with_config(width, height, capacity, seed, config).map_err(to_js)?;
        Ok(Self {
            engine,
            store: default_store(),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.engine.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.engine.height() }

    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> usize { self.engine.capacity() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize { self.engine.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn color_count(&self) -> usize { self.engine.color_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.engine.frame() }

    #[wasm_bindgen(getter)]
    pub fn min_dist(&self) -> f32 { self.engine.config().min_dist }

    #[wasm_bindgen(getter)]
    pub fn max_dist(&self) -> f32 { self.engine.config().max_dist }

    #[wasm_bindgen(getter)]
    pub fn render_size(&self) -> u32 { self.engine.config().render_size }

    #[wasm_bindgen(getter)]
    pub fn max_velocity(&self) -> f32 { self.engine.config().max_velocity }

    /// Current settings as JSON (camelCase fields).
    pub fn config_json(&self) -> String {
        self.engine.settings_json()
    }

    /// Apply a full or partial settings blob. Rejected blobs change nothing.
    pub fn configure(&mut self, config_json: &str) -> Result<(), JsValue> {
        self.engine.load_settings_json(config_json).map_err(to_js)
    }

    /// Active colors as a JSON array of `#rrggbb` strings.
    pub fn colors_json(&self) -> String {
        serde_json::to_string(&self.engine.config().colors).unwrap_or_default()
    }

    /// Active force block as JSON rows.
    pub fn forces_json(&self) -> String {
        let rows = self.engine.config().forces.rows(self.engine.color_count());
        serde_json::to_string(&rows).unwrap_or_default()
    }

    pub fn get_force(&self, color_a: usize, color_b: usize) -> f32 {
        if color_a < self.engine.color_count() && color_b < self.engine.color_count() {
            self.engine.config().forces.get(color_a, color_b)
        } else {
            0.0
        }
    }

    pub fn set_force(&mut self, color_a: usize, color_b: usize, value: f32) -> Result<(), JsValue> {
        self.engine.set_force(color_a, color_b, value).map_err(to_js)
    }

    pub fn set_particle_count(&mut self, count: usize) -> Result<(), JsValue> {
        self.engine.set_particle_count(count).map_err(to_js)
    }

    pub fn set_min_dist(&mut self, min_dist: f32) -> Result<(), JsValue> {
        self.engine.set_min_dist(min_dist).map_err(to_js)
    }

    pub fn set_max_dist(&mut self, max_dist: f32) -> Result<(), JsValue> {
        self.engine.set_max_dist(max_dist).map_err(to_js)
    }

    pub fn set_render_size(&mut self, render_size: u32) -> Result<(), JsValue> {
        self.engine.set_render_size(render_size).map_err(to_js)
    }

    pub fn set_max_velocity(&mut self, max_velocity: f32) -> Result<(), JsValue> {
        self.engine.set_max_velocity(max_velocity).map_err(to_js)
    }

    /// Index of the added color, or `undefined` when the palette is used up.
    pub fn add_color(&mut self) -> Option<usize> {
        self.engine.add_color()
    }

    pub fn remove_color(&mut self, index: usize) -> Result<(), JsValue> {
        self.engine.remove_color(index).map_err(to_js)
    }

    pub fn randomize_forces(&mut self) {
        self.engine.randomize_forces();
    }

    pub fn reset_particles(&mut self) {
        self.engine.reset_particles();
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.engine.step();
    }

    // === ZERO-COPY VIEWS ===
    // Valid until the next call that may grow wasm memory.

    /// `Uint8Array(memory.buffer, colors_ptr(), particle_count)`
    pub fn colors_ptr(&self) -> *const u8 {
        self.engine.store().colors_ptr()
    }

    /// `Float32Array(memory.buffer, pos_x_ptr(), particle_count)`
    pub fn pos_x_ptr(&self) -> *const f32 {
        self.engine.store().pos_x_ptr()
    }

    pub fn pos_y_ptr(&self) -> *const f32 {
        self.engine.store().pos_y_ptr()
    }

    /// ABGR per active color, indexed by the values in the colors array.
    pub fn palette_abgr(&self) -> Vec<u32> {
        self.engine.palette().to_vec()
    }

    /// Draw the frame and return a pointer to `frame_len()` ABGR pixels,
    /// ready for `ImageData`.
    pub fn render_frame(&mut self) -> *const u32 {
        self.engine.render_frame().as_ptr()
    }

    pub fn frame_len(&self) -> usize {
        self.engine.width() as usize * self.engine.height() as usize
    }

    // === OBSERVERS ===

    /// Call `callback(current, previous)` with both configs as plain objects
    /// after every applied settings change. Returns an id for `unsubscribe`.
    pub fn subscribe(&mut self, callback: js_sys::Function) -> u32 {
        let listener = Box::new(move |event: &EngineEvent<'_>| {
            if let EngineEvent::Configured { current, previous } = event {
                let current = js_sys::JSON::parse(&current.to_json()).unwrap_or(JsValue::NULL);
                let previous = js_sys::JSON::parse(&previous.to_json()).unwrap_or(JsValue::NULL);
                if let Err(e) = callback.call2(&JsValue::NULL, &current, &previous) {
                    console_warn!("settings listener threw: {:?}", e);
                }
            }
        });
        self.engine.subscribe(listener).raw()
    }

    /// `true` when a listener was removed.
    pub fn unsubscribe(&mut self, id: u32) -> bool {
        self.engine.unsubscribe(SubscriptionId::from_raw(id)).is_some()
    }

    // === PERSISTENCE ===

    pub fn save_settings(&mut self) -> Result<(), JsValue> {
        self.engine.save_settings(self.store.as_mut()).map_err(to_js)
    }

    /// Apply stored settings; `false` when none were stored.
    pub fn load_settings(&mut self) -> Result<bool, JsValue> {
        self.engine.restore_settings(self.store.as_ref()).map_err(to_js)
    }

    pub fn clear_saved_settings(&mut self) {
        self.store.remove_item(super::storage::SETTINGS_KEY);
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.engine.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.engine.perf_stats()
    }
}
