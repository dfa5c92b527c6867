//! Force model and velocity shaping
//!
//! Pure functions, no state. The attraction profile is a triangle rather
//! than an inverse-square law, which keeps every force bounded.

/// Strength of the hard-core repulsion inside `min_dist`.
pub const CORE_REPULSION: f32 = 1.0;

/// Default asymptote of the soft velocity clamp.
pub const DEFAULT_MAX_VELOCITY: f32 = 1.0;

/// Signed force magnitude between two particles `dist` apart.
///
/// - `dist > max_dist`: 0
/// - `dist < min_dist`: `-(1 - dist / min_dist)`, always repulsive
/// - otherwise a triangle rising from 0 at `min_dist` to `force` at the
///   midpoint and back to 0 at `max_dist`
///
/// Expects `0 < min_dist < max_dist`; the configuration layer enforces it.
#[inline]
pub fn attraction(dist: f32, force: f32, min_dist: f32, max_dist: f32) -> f32 {
    if dist > max_dist {
        return 0.0;
    }

    if dist < min_dist {
        return -(1.0 - dist / min_dist) * CORE_REPULSION;
    }

    let d = dist - min_dist;
    let half = (max_dist - min_dist) / 2.0;

    if d <= half {
        force * (d / half)
    } else {
        force * ((2.0 * half - d) / half)
    }
}

/// Scale factor that maps a velocity of magnitude `mag` onto
/// `mag * max_velocity / (mag + 1)`.
///
/// Multiplying both components by this keeps direction and bounds the
/// magnitude below `max_velocity` without a hard cutoff.
#[inline]
pub fn clamp_velocity_factor(mag: f32, max_velocity: f32) -> f32 {
    max_velocity / (mag + 1.0)
}

/// Magnitude after the soft clamp.
#[inline]
pub fn clamp_velocity(mag: f32, max_velocity: f32) -> f32 {
    mag * clamp_velocity_factor(mag, max_velocity)
}
