use super::integrate::integrate;
use super::step_forces::{compute_velocities, ForceSnapshot};
use super::subscribers::EngineEvent;
use super::{PerfTimer, SimulationEngine};

pub(super) fn step(engine: &mut SimulationEngine) {
    let perf_on = engine.perf_enabled;
    if perf_on {
        engine.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    if engine.particles.is_empty() {
        engine.grid.clear();
    } else {
        // === GRID REBUILD ===
        if perf_on {
            let t0 = PerfTimer::start();
            rebuild_grid(engine);
            engine.perf_stats.grid_ms = t0.elapsed_ms();
        } else {
            rebuild_grid(engine);
        }

        // === FORCE PASS ===
        // Reads positions only; writes velocities only.
        let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
        let counts = {
            let (particles, vel_x, vel_y) = engine.particles.split_for_forces();
            let snapshot = ForceSnapshot {
                particles,
                grid: &engine.grid,
                torus: engine.torus,
                forces: &engine.config.forces,
                min_dist: engine.config.min_dist,
                max_dist: engine.config.max_dist,
                max_velocity: engine.config.max_velocity,
            };
            compute_velocities(&snapshot, vel_x, vel_y)
        };
        if let Some(t0) = t0 {
            engine.perf_stats.forces_ms = t0.elapsed_ms();
            engine.perf_stats.candidate_pairs = saturate(counts.candidates);
            engine.perf_stats.interacting_pairs = saturate(counts.interacting);
        }

        // === INTEGRATION ===
        // The only place positions are written during a step.
        if perf_on {
            let t0 = PerfTimer::start();
            integrate(&mut engine.particles, &engine.torus);
            engine.perf_stats.integrate_ms = t0.elapsed_ms();
        } else {
            integrate(&mut engine.particles, &engine.torus);
        }
    }

    if perf_on {
        let (cols, rows) = engine.grid.dimensions();
        engine.perf_stats.particle_count = saturate(engine.particles.len() as u64);
        engine.perf_stats.max_cell_occupancy = saturate(engine.grid.max_occupancy() as u64);
        engine.perf_stats.grid_cols = cols as u32;
        engine.perf_stats.grid_rows = rows as u32;
        if let Some(start) = step_start {
            engine.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    engine.frame += 1;
    let frame = engine.frame;
    engine.subscribers.emit(&EngineEvent::Stepped { frame });
}

/// Clear the grid and insert every active particle once.
fn rebuild_grid(engine: &mut SimulationEngine) {
    engine.grid.clear();
    for (id, (_, x, y)) in engine.particles.view().iter().enumerate() {
        engine.grid.insert(id, x, y);
    }
}

#[inline]
fn saturate(v: u64) -> u32 {
    v.min(u32::MAX as u64) as u32
}
