//! Force pass
//!
//! For each particle, sum the attraction of every neighbor the grid hands
//! back, then soft-clamp the result into the particle's velocity slot.
//! Each particle's sum runs sequentially in grid order, so the rayon path
//! produces the same bits as the sequential one.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::particles::ParticleView;
use crate::domain::force_matrix::ForceMatrix;
use crate::domain::forces::{attraction, clamp_velocity_factor};
use crate::spatial::{SpatialGrid, Torus};

/// Everything the force pass reads, frozen for the whole pass.
#[derive(Clone, Copy)]
pub(super) struct ForceSnapshot<'a> {
    pub(super) particles: ParticleView<'a>,
    pub(super) grid: &'a SpatialGrid,
    pub(super) torus: Torus,
    pub(super) forces: &'a ForceMatrix,
    pub(super) min_dist: f32,
    pub(super) max_dist: f32,
    pub(super) max_velocity: f32,
}

/// Pair counters for perf stats.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(super) struct PairCounts {
    /// Neighbor ids returned by grid queries (self excluded).
    pub(super) candidates: u64,
    /// Pairs within `max_dist` that contributed a force.
    pub(super) interacting: u64,
}

impl PairCounts {
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    #[inline]
    fn merge(self, other: PairCounts) -> PairCounts {
        PairCounts {
            candidates: self.candidates + other.candidates,
            interacting: self.interacting + other.interacting,
        }
    }
}

/// Net velocity of `id` after the soft clamp.
#[inline]
pub(super) fn net_velocity(snap: &ForceSnapshot<'_>, id: usize, counts: &mut PairCounts) -> (f32, f32) {
    let p = snap.particles;
    // `id` comes from the active range; neighbors are checked normally.
    let x1 = *fast!(p.pos_x, [id]);
    let y1 = *fast!(p.pos_y, [id]);
    let c1 = *fast!(p.colors, [id]) as usize;

    let mut vx = 0.0f32;
    let mut vy = 0.0f32;

    for id2 in snap.grid.query_neighborhood(x1, y1) {
        if id2 == id {
            continue;
        }
        counts.candidates += 1;

        let dx = snap.torus.delta_x(x1, p.pos_x[id2]);
        if dx.abs() > snap.max_dist {
            continue;
        }
        let dy = snap.torus.delta_y(y1, p.pos_y[id2]);
        if dy.abs() > snap.max_dist {
            continue;
        }

        let dist = (dx * dx + dy * dy).sqrt();
        if dist == 0.0 || dist > snap.max_dist {
            continue;
        }

        let c2 = p.colors[id2] as usize;
        let a = attraction(dist, snap.forces.get(c1, c2), snap.min_dist, snap.max_dist);

        // (dx, dy) points from id2 to id1: positive `a` pulls id1 toward id2.
        vx -= dx / dist * a;
        vy -= dy / dist * a;
        counts.interacting += 1;
    }

    let mag = (vx * vx + vy * vy).sqrt();
    let k = clamp_velocity_factor(mag, snap.max_velocity);
    (vx * k, vy * k)
}

/// Overwrite every velocity slot with the particle's net velocity.
pub(super) fn compute_velocities(
    snap: &ForceSnapshot<'_>,
    vel_x: &mut [f32],
    vel_y: &mut [f32],
) -> PairCounts {
    debug_assert_eq!(vel_x.len(), snap.particles.len());
    debug_assert_eq!(vel_y.len(), snap.particles.len());

    #[cfg(feature = "parallel")]
    {
        vel_x
            .par_iter_mut()
            .zip(vel_y.par_iter_mut())
            .enumerate()
            .map(|(id, (vx, vy))| {
                let mut counts = PairCounts::default();
                let (nx, ny) = net_velocity(snap, id, &mut counts);
                *vx = nx;
                *vy = ny;
                counts
            })
            .reduce(PairCounts::default, PairCounts::merge)
    }

    #[cfg(not(feature = "parallel"))]
    {
        let mut counts = PairCounts::default();
        for id in 0..vel_x.len() {
            let (nx, ny) = net_velocity(snap, id, &mut counts);
            fast!(vel_x, [id] = nx);
            fast!(vel_y, [id] = ny);
        }
        counts
    }
}
