use crate::core::particles::ParticleStore;
use crate::domain::config::SimulationConfig;
use crate::domain::error::ConfigError;
use crate::spatial::{SpatialGrid, Torus};

use super::commands;
use super::perf_stats::PerfStats;
use super::subscribers::Subscribers;
use super::{SimulationEngine, DEFAULT_SEED};

pub(super) fn create_engine(
    width: f32,
    height: f32,
    capacity: usize,
    seed: u32,
    config: SimulationConfig,
) -> Result<SimulationEngine, ConfigError> {
    check_extent("width", width)?;
    check_extent("height", height)?;

    let torus = Torus::new(width, height);
    config.validate(capacity, torus.min_extent())?;

    let mut engine = SimulationEngine {
        torus,
        particles: ParticleStore::new(capacity),
        grid: SpatialGrid::new(width, height, config.max_dist),
        palette: config.palette_abgr(),
        config,
        frame: 0,
        rng_state: if seed == 0 { DEFAULT_SEED } else { seed },
        subscribers: Subscribers::default(),
        // Allocated by the first `render_frame`.
        frame_buffer: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };

    let count = engine.config.particle_count;
    commands::resize_population(&mut engine, count);

    let (cols, rows) = engine.grid.dimensions();
    console_log!(
        "particle life: {}x{} world, {} of {} particles, {}x{} grid cells",
        width,
        height,
        count,
        capacity,
        cols,
        rows
    );

    Ok(engine)
}

/// World sides must be finite and at least one pixel.
fn check_extent(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, format!("{} must be at least 1", value)))
    }
}
