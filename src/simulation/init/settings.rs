//! Configuration updates
//!
//! Every update path ends in `apply`, which swaps the config in and then
//! brings the derived state (palette, grid layout, population) in line.

use crate::domain::config::SimulationConfig;
use crate::domain::error::ConfigError;

use super::commands;
use super::perf_stats::PerfStats;
use super::subscribers::EngineEvent;
use super::SimulationEngine;

pub(super) fn configure(engine: &mut SimulationEngine, config: SimulationConfig) -> Result<(), ConfigError> {
    config.validate(engine.particles.capacity(), engine.torus.min_extent())?;
    apply(engine, config);
    Ok(())
}

/// Swap in an already validated config.
pub(super) fn apply(engine: &mut SimulationEngine, config: SimulationConfig) {
    debug_assert!(
        config.validate(engine.particles.capacity(), engine.torus.min_extent()).is_ok(),
        "apply: config was not validated"
    );

    let previous = std::mem::replace(&mut engine.config, config);

    if previous.colors != engine.config.colors {
        engine.palette = engine.config.palette_abgr();
    }

    if previous.max_dist != engine.config.max_dist {
        let (w, h) = (engine.torus.width(), engine.torus.height());
        if engine.grid.resize(w, h, engine.config.max_dist) {
            let (cols, rows) = engine.grid.dimensions();
            console_log!("grid resized to {}x{} cells (maxDist {})", cols, rows, engine.config.max_dist);
        }
    }

    let count = engine.config.particle_count;
    if previous.color_count() != engine.config.color_count() {
        // Existing color indices may no longer exist.
        commands::reset_population(engine, count);
    } else if previous.particle_count != count {
        commands::resize_population(engine, count);
    }

    engine.subscribers.emit(&EngineEvent::Configured {
        current: &engine.config,
        previous: &previous,
    });
}

/// Clone the active config, let `edit` change it, then configure.
fn update(
    engine: &mut SimulationEngine,
    edit: impl FnOnce(&mut SimulationConfig),
) -> Result<(), ConfigError> {
    let mut next = engine.config.clone();
    edit(&mut next);
    configure(engine, next)
}

pub(super) fn set_force(
    engine: &mut SimulationEngine,
    color_a: usize,
    color_b: usize,
    value: f32,
) -> Result<(), ConfigError> {
    let colors = engine.config.color_count();
    if color_a >= colors || color_b >= colors {
        return Err(ConfigError::out_of_range(
            "colorIndex",
            format!("({}, {}) with {} active colors", color_a, color_b, colors),
        ));
    }
    update(engine, |cfg| cfg.forces.set(color_a, color_b, value))
}

pub(super) fn set_particle_count(engine: &mut SimulationEngine, count: usize) -> Result<(), ConfigError> {
    update(engine, |cfg| cfg.particle_count = count)
}

pub(super) fn set_min_dist(engine: &mut SimulationEngine, min_dist: f32) -> Result<(), ConfigError> {
    update(engine, |cfg| cfg.min_dist = min_dist)
}

pub(super) fn set_max_dist(engine: &mut SimulationEngine, max_dist: f32) -> Result<(), ConfigError> {
    update(engine, |cfg| cfg.max_dist = max_dist)
}

pub(super) fn set_render_size(engine: &mut SimulationEngine, render_size: u32) -> Result<(), ConfigError> {
    update(engine, |cfg| cfg.render_size = render_size)
}

pub(super) fn set_max_velocity(engine: &mut SimulationEngine, max_velocity: f32) -> Result<(), ConfigError> {
    update(engine, |cfg| cfg.max_velocity = max_velocity)
}

pub(super) fn enable_perf_metrics(engine: &mut SimulationEngine, enabled: bool) {
    engine.perf_enabled = enabled;
    if !enabled {
        engine.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(engine: &SimulationEngine) -> PerfStats {
    engine.perf_stats.clone()
}
