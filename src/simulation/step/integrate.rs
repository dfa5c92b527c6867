#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::particles::ParticleStore;
use crate::spatial::Torus;

/// `pos = wrap(pos + vel)` for every active particle.
pub(super) fn integrate(particles: &mut ParticleStore, torus: &Torus) {
    let n = particles.len();
    let (w, h) = (torus.width(), torus.height());

    #[cfg(feature = "parallel")]
    {
        particles.pos_x[..n]
            .par_iter_mut()
            .zip(particles.vel_x[..n].par_iter())
            .for_each(|(x, &vx)| *x = torus.wrap_x(*x + vx));
        particles.pos_y[..n]
            .par_iter_mut()
            .zip(particles.vel_y[..n].par_iter())
            .for_each(|(y, &vy)| *y = torus.wrap_y(*y + vy));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for id in 0..n {
            let x = torus.wrap_x(*fast!(particles.pos_x, [id]) + *fast!(particles.vel_x, [id]));
            let y = torus.wrap_y(*fast!(particles.pos_y, [id]) + *fast!(particles.vel_y, [id]));
            fast!(particles.pos_x, [id] = x);
            fast!(particles.pos_y, [id] = y);
        }
    }

    debug_assert!(
        particles.view().iter().all(|(_, x, y)| torus.contains(x, y)),
        "integrate: position left the {}x{} world",
        w,
        h
    );
}
