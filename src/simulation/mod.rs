//! SimulationEngine - particle life on a torus
//!
//! The engine owns every piece of mutable state: the particle arrays, the
//! neighbor grid, the active configuration, the RNG and the render buffer.
//! It only orchestrates; each phase lives in its own file:
//!
//! - step/      grid rebuild, force pass, integration
//! - init/      construction, RNG, configuration updates
//! - commands/  population and color-set changes
//! - render/    ABGR frame extraction
//! - observers/ change listeners
//! - persist/   settings storage backends
//!
//! Control flow per frame: the host applies any pending configuration
//! change, calls `step()`, then reads the particle arrays or the frame.

use crate::core::particles::{ParticleStore, ParticleView};
use crate::domain::config::{SimulationConfig, DEFAULT_PARTICLE_COUNT};
use crate::domain::error::ConfigError;
use crate::spatial::{SpatialGrid, Torus};

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
#[path = "step/step_forces.rs"]
mod step_forces;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "observers/subscribers.rs"]
mod subscribers;
#[path = "persist/storage.rs"]
pub mod storage;
mod facade;

pub use facade::ParticleLife;
pub use perf_stats::PerfStats;
pub use storage::{default_store, KeyValueStore, MemoryStore, SETTINGS_KEY};
pub use subscribers::{EngineEvent, Listener, SubscriptionId};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;

use perf_timer::PerfTimer;
use subscribers::Subscribers;

/// Seed used when the caller passes 0 (xorshift never leaves the zero state).
pub const DEFAULT_SEED: u32 = 12345;

/// The simulation world
pub struct SimulationEngine {
    torus: Torus,
    particles: ParticleStore,
    grid: SpatialGrid,

    // Settings
    config: SimulationConfig,
    palette: Vec<u32>,

    // State
    frame: u64,
    rng_state: u32,
    subscribers: Subscribers,
    frame_buffer: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationEngine {
    /// Engine with the default configuration (particle count capped at
    /// `capacity`).
    pub fn new(width: f32, height: f32, capacity: usize, seed: u32) -> Result<Self, ConfigError> {
        let config = SimulationConfig {
            particle_count: DEFAULT_PARTICLE_COUNT.min(capacity),
            ..SimulationConfig::default()
        };
        init::create_engine(width, height, capacity, seed, config)
    }

    /// Engine starting from `config`, which must be valid for this world.
    pub fn with_config(
        width: f32,
        height: f32,
        capacity: usize,
        seed: u32,
        config: SimulationConfig,
    ) -> Result<Self, ConfigError> {
        init::create_engine(width, height, capacity, seed, config)
    }

    pub fn width(&self) -> f32 { self.torus.width() }

    pub fn height(&self) -> f32 { self.torus.height() }

    pub fn torus(&self) -> &Torus { &self.torus }

    pub fn capacity(&self) -> usize { self.particles.capacity() }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn color_count(&self) -> usize { self.config.color_count() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn config(&self) -> &SimulationConfig { &self.config }

    /// ABGR value per active color.
    pub fn palette(&self) -> &[u32] { &self.palette }

    pub fn grid(&self) -> &SpatialGrid { &self.grid }

    /// Colors and positions of the active particles.
    pub fn particles(&self) -> ParticleView<'_> {
        self.particles.view()
    }

    /// The whole store (raw pointers for typed-array views, velocities).
    pub fn store(&self) -> &ParticleStore {
        &self.particles
    }

    // === Configuration ===

    /// Validate and apply a full configuration. On error nothing changes.
    pub fn configure(&mut self, config: SimulationConfig) -> Result<(), ConfigError> {
        settings::configure(self, config)
    }

    pub fn set_force(&mut self, color_a: usize, color_b: usize, value: f32) -> Result<(), ConfigError> {
        settings::set_force(self, color_a, color_b, value)
    }

    pub fn set_particle_count(&mut self, count: usize) -> Result<(), ConfigError> {
        settings::set_particle_count(self, count)
    }

    pub fn set_min_dist(&mut self, min_dist: f32) -> Result<(), ConfigError> {
        settings::set_min_dist(self, min_dist)
    }

    pub fn set_max_dist(&mut self, max_dist: f32) -> Result<(), ConfigError> {
        settings::set_max_dist(self, max_dist)
    }

    pub fn set_render_size(&mut self, render_size: u32) -> Result<(), ConfigError> {
        settings::set_render_size(self, render_size)
    }

    pub fn set_max_velocity(&mut self, max_velocity: f32) -> Result<(), ConfigError> {
        settings::set_max_velocity(self, max_velocity)
    }

    /// Add the next unused palette color with random couplings.
    /// Returns its index, or `None` when every palette color is in use.
    pub fn add_color(&mut self) -> Option<usize> {
        commands::add_color(self)
    }

    pub fn remove_color(&mut self, index: usize) -> Result<(), ConfigError> {
        commands::remove_color(self, index)
    }

    pub fn randomize_forces(&mut self) {
        commands::randomize_forces(self)
    }

    /// Re-randomize color and position of every active particle.
    pub fn reset_particles(&mut self) {
        commands::reset_particles(self)
    }

    // === Persistence ===

    pub fn settings_json(&self) -> String {
        self.config.to_json()
    }

    /// Apply a full or partial settings blob on top of the current
    /// settings; fields it leaves out keep their values.
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = self.config.merged_with_json(json)?;
        self.configure(config)
    }

    pub fn save_settings(&self, store: &mut dyn KeyValueStore) -> Result<(), ConfigError> {
        storage::save_settings(self, store)
    }

    /// Apply stored settings. `Ok(false)` when nothing was stored.
    pub fn restore_settings(&mut self, store: &dyn KeyValueStore) -> Result<bool, ConfigError> {
        storage::restore_settings(self, store)
    }

    // === Observers ===

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Detach a listener and hand it back.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Option<Listener> {
        self.subscribers.unsubscribe(id)
    }

    // === Simulation ===

    /// Advance one frame.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Draw the current particles into the ABGR frame buffer
    /// (`floor(width) x floor(height)` pixels, row-major).
    pub fn render_frame(&mut self) -> &[u32] {
        render_extract::render_frame(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
