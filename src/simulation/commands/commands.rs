use crate::domain::error::ConfigError;
use crate::domain::palette;

use super::random::{below, next_f32, range_f32};
use super::settings;
use super::SimulationEngine;

/// Random color and position, zero velocity.
fn spawn_random(engine: &mut SimulationEngine, id: usize) {
    let colors = engine.config.color_count();
    let color = below(&mut engine.rng_state, colors) as u8;
    let x = engine.torus.wrap_x(next_f32(&mut engine.rng_state) * engine.torus.width());
    let y = engine.torus.wrap_y(next_f32(&mut engine.rng_state) * engine.torus.height());
    engine.particles.spawn(id, color, x, y);
}

/// Grow or shrink the active population. New slots are spawned at random;
/// existing particles are untouched.
pub(super) fn resize_population(engine: &mut SimulationEngine, count: usize) {
    let new_ids = engine.particles.set_len(count);
    for id in new_ids {
        spawn_random(engine, id);
    }
}

/// Set the population to `count` and respawn all of it.
pub(super) fn reset_population(engine: &mut SimulationEngine, count: usize) {
    engine.particles.set_len(count);
    reset_particles(engine);
}

pub(super) fn reset_particles(engine: &mut SimulationEngine) {
    for id in 0..engine.particles.len() {
        spawn_random(engine, id);
    }
    console_log!(
        "reset {} particles across {} colors",
        engine.particles.len(),
        engine.config.color_count()
    );
}

pub(super) fn add_color(engine: &mut SimulationEngine) -> Option<usize> {
    let color = palette::next_unused(&engine.config.colors)?;

    let mut next = engine.config.clone();
    next.colors.push(color.to_string());
    let added = next.colors.len() - 1;
    for other in 0..=added {
        next.forces.set(added, other, range_f32(&mut engine.rng_state, -1.0, 1.0));
        next.forces.set(other, added, range_f32(&mut engine.rng_state, -1.0, 1.0));
    }

    console_log!("added color {} at index {}", color, added);
    settings::apply(engine, next);
    Some(added)
}

pub(super) fn remove_color(engine: &mut SimulationEngine, index: usize) -> Result<(), ConfigError> {
    let colors = engine.config.color_count();
    if index >= colors {
        return Err(ConfigError::out_of_range(
            "colorIndex",
            format!("{} with {} active colors", index, colors),
        ));
    }
    if colors == 1 {
        return Err(ConfigError::out_of_range("colors", "cannot remove the last color"));
    }

    let mut next = engine.config.clone();
    let removed = next.colors.remove(index);
    next.forces.remove_color(index);

    settings::configure(engine, next)?;
    console_log!("removed color {} (index {})", removed, index);
    Ok(())
}

/// Every active coupling uniform in `[-1, 1)`.
pub(super) fn randomize_forces(engine: &mut SimulationEngine) {
    let colors = engine.config.color_count();
    let mut next = engine.config.clone();
    for a in 0..colors {
        for b in 0..colors {
            next.forces.set(a, b, range_f32(&mut engine.rng_state, -1.0, 1.0));
        }
    }
    settings::apply(engine, next);
}
