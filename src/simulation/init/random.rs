//! Seeded xorshift32 RNG
//!
//! Everything random in the engine (spawn positions, colors, force
//! randomization) draws from the engine's single `rng_state`, so a given
//! seed and call sequence always reproduces the same world.

/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform in `[0, 1)` (24 bits of mantissa).
#[inline]
pub(super) fn next_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform in `[lo, hi)`.
#[inline]
pub(super) fn range_f32(state: &mut u32, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * next_f32(state)
}

/// Uniform in `[0, n)`; `n` must be positive.
#[inline]
pub(super) fn below(state: &mut u32, n: usize) -> usize {
    ((xorshift32(state) as u64 * n as u64) >> 32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = 12345;
        let mut b = 12345;
        for _ in 0..100 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }

    #[test]
    fn draws_stay_in_range() {
        let mut state = 7;
        for _ in 0..10_000 {
            let f = next_f32(&mut state);
            assert!((0.0..1.0).contains(&f));
            let r = range_f32(&mut state, -1.0, 1.0);
            assert!((-1.0..1.0).contains(&r));
            assert!(below(&mut state, 3) < 3);
        }
    }
}
