//! Checked-in-debug, unchecked-in-release slice access
//!
//! The force pass reads the particle arrays millions of times per second.
//! `fast!` keeps ordinary bounds checks in debug builds (so a broken index
//! panics with a clear message) and drops them in release builds.
//!
//! Only use it where the index is proven in range by the surrounding loop,
//! e.g. `for id in 0..store.len()` over arrays of at least that length.
//!
//! ```rust
//! use particle_life_engine::fast;
//!
//! let pos_x = vec![10.0f32, 20.0, 30.0];
//! let x = *fast!(pos_x, [1]);
//! assert_eq!(x, 20.0);
//!
//! let mut vel_x = vec![0.0f32; 3];
//! fast!(vel_x, [2] = 0.5);
//! assert_eq!(vel_x[2], 0.5);
//! ```

/// Index a slice, bounds-checked only when `debug_assertions` is on.
///
/// - `fast!(slice, [i])` yields `&slice[i]`
/// - `fast!(slice, [i] = value)` stores `value` at `slice[i]`
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
