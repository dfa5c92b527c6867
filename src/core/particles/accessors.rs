use super::*;

impl ParticleStore {
    // === Dimensions ===
    #[inline]
    pub fn len(&self) -> usize { self.len }

    #[inline]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    #[inline]
    pub fn capacity(&self) -> usize { self.capacity }

    // === Raw array access (for JS typed-array views) ===
    #[inline]
    pub fn colors_ptr(&self) -> *const ColorIndex { self.colors.as_ptr() }

    #[inline]
    pub fn pos_x_ptr(&self) -> *const f32 { self.pos_x.as_ptr() }

    #[inline]
    pub fn pos_y_ptr(&self) -> *const f32 { self.pos_y.as_ptr() }

    // === Per-particle reads ===
    #[inline]
    pub fn velocity(&self, id: usize) -> (f32, f32) {
        (self.vel_x[id], self.vel_y[id])
    }

    /// Active velocities, as left by the last step.
    pub fn velocities(&self) -> (&[f32], &[f32]) {
        (&self.vel_x[..self.len], &self.vel_y[..self.len])
    }
}
