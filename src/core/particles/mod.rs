//! ParticleStore - Structure of Arrays (SoA) for particle attributes
//!
//! Every attribute lives in its own contiguous array, indexed by particle id:
//!
//!   colors[], pos_x[], pos_y[], vel_x[], vel_y[]
//!
//! The arrays are allocated once at `capacity`. Only the active length moves
//! at runtime, so growing or shrinking the population never reallocates and
//! the JS side can keep typed-array views over the same memory.

use std::ops::Range;

mod accessors;

/// Palette index of a particle (row/column into the force matrix)
pub type ColorIndex = u8;

/// SoA particle store with fixed capacity and a logical active length
pub struct ParticleStore {
    capacity: usize,
    len: usize,

    pub(crate) colors: Vec<ColorIndex>,
    pub(crate) pos_x: Vec<f32>,
    pub(crate) pos_y: Vec<f32>,
    pub(crate) vel_x: Vec<f32>,
    pub(crate) vel_y: Vec<f32>,
}

impl ParticleStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            len: 0,
            colors: vec![0; capacity],
            pos_x: vec![0.0; capacity],
            pos_y: vec![0.0; capacity],
            vel_x: vec![0.0; capacity],
            vel_y: vec![0.0; capacity],
        }
    }

    /// Change the active length and return the ids that just became active.
    ///
    /// Slots in the returned range hold stale data until the caller spawns
    /// into them. Shrinking returns an empty range; contents past the new
    /// length are left as they are.
    pub fn set_len(&mut self, len: usize) -> Range<usize> {
        assert!(
            len <= self.capacity,
            "set_len: {} exceeds particle capacity {}",
            len,
            self.capacity
        );
        let previous = self.len;
        self.len = len;
        if len > previous {
            previous..len
        } else {
            len..len
        }
    }

    /// Initialize one slot: color, position and zero velocity.
    pub fn spawn(&mut self, id: usize, color: ColorIndex, x: f32, y: f32) {
        debug_assert!(id < self.len, "spawn: id {} outside active range {}", id, self.len);
        self.colors[id] = color;
        self.pos_x[id] = x;
        self.pos_y[id] = y;
        self.vel_x[id] = 0.0;
        self.vel_y[id] = 0.0;
    }

    /// Read-only view of the active particles.
    pub fn view(&self) -> ParticleView<'_> {
        let n = self.len;
        ParticleView {
            colors: &self.colors[..n],
            pos_x: &self.pos_x[..n],
            pos_y: &self.pos_y[..n],
        }
    }

    /// Split the store for the force pass: an immutable snapshot of colors
    /// and positions next to the writable velocity slots.
    pub fn split_for_forces(&mut self) -> (ParticleView<'_>, &mut [f32], &mut [f32]) {
        let n = self.len;
        (
            ParticleView {
                colors: &self.colors[..n],
                pos_x: &self.pos_x[..n],
                pos_y: &self.pos_y[..n],
            },
            &mut self.vel_x[..n],
            &mut self.vel_y[..n],
        )
    }
}

/// Borrowed view of `{color, x, y}` for every active particle
#[derive(Clone, Copy)]
pub struct ParticleView<'a> {
    pub colors: &'a [ColorIndex],
    pub pos_x: &'a [f32],
    pub pos_y: &'a [f32],
}

impl<'a> ParticleView<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn position(&self, id: usize) -> (f32, f32) {
        (self.pos_x[id], self.pos_y[id])
    }

    #[inline]
    pub fn color(&self, id: usize) -> ColorIndex {
        self.colors[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorIndex, f32, f32)> + 'a {
        let ParticleView { colors, pos_x, pos_y } = *self;
        colors
            .iter()
            .zip(pos_x.iter())
            .zip(pos_y.iter())
            .map(|((&c, &x), &y)| (c, x, y))
    }
}
