//! Toroidal world arithmetic
//!
//! Positions live in `[0, width) x [0, height)` and both axes wrap, so the
//! distance between two points is always taken along the shorter way around.

/// Map `v` into `[0, range)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `range`;
/// that case maps to 0 so the half-open bound always holds.
#[inline]
pub fn wrap(v: f32, range: f32) -> f32 {
    let r = v.rem_euclid(range);
    if r >= range {
        0.0
    } else {
        r
    }
}

/// Signed displacement `a - b` taken the short way around an axis of
/// length `range`. The result's magnitude never exceeds `range / 2`.
#[inline]
pub fn shortest_delta(a: f32, b: f32, range: f32) -> f32 {
    let forward = wrap(a - b, range);
    let backward = wrap(b - a, range);
    if forward < backward {
        forward
    } else {
        -backward
    }
}

/// World extents plus the wrap/delta helpers bound to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    width: f32,
    height: f32,
}

impl Torus {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "Torus: invalid world size {}x{}",
            width,
            height
        );
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> f32 { self.width }

    #[inline]
    pub fn height(&self) -> f32 { self.height }

    /// Shorter side; `max_dist` may not exceed it.
    #[inline]
    pub fn min_extent(&self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn wrap_x(&self, x: f32) -> f32 { wrap(x, self.width) }

    #[inline]
    pub fn wrap_y(&self, y: f32) -> f32 { wrap(y, self.height) }

    #[inline]
    pub fn delta_x(&self, a: f32, b: f32) -> f32 { shortest_delta(a, b, self.width) }

    #[inline]
    pub fn delta_y(&self, a: f32, b: f32) -> f32 { shortest_delta(a, b, self.height) }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_maps_into_half_open_range() {
        assert_eq!(wrap(10.0, 512.0), 10.0);
        assert_eq!(wrap(512.0, 512.0), 0.0);
        assert_eq!(wrap(-1.0, 512.0), 511.0);
        assert_eq!(wrap(1030.0, 512.0), 6.0);

        let tiny = wrap(-1.0e-9, 512.0);
        assert!((0.0..512.0).contains(&tiny), "{tiny}");
    }

    #[test]
    fn delta_takes_the_short_way_around() {
        assert_eq!(shortest_delta(120.0, 100.0, 512.0), 20.0);
        assert_eq!(shortest_delta(100.0, 120.0, 512.0), -20.0);
        assert_eq!(shortest_delta(5.0, 507.0, 512.0), 10.0);
        assert_eq!(shortest_delta(507.0, 5.0, 512.0), -10.0);
    }

    #[test]
    fn delta_is_bounded_by_half_the_range() {
        let range = 100.0;
        let mut a = 0.0;
        while a < range {
            let mut b = 0.0;
            while b < range {
                let d = shortest_delta(a, b, range);
                assert!(d.abs() <= range / 2.0, "a={a} b={b} d={d}");
                b += 3.7;
            }
            a += 4.1;
        }
    }

    #[test]
    fn torus_uses_each_axis_length() {
        let t = Torus::new(200.0, 100.0);
        assert_eq!(t.min_extent(), 100.0);
        assert_eq!(t.wrap_x(150.0), 150.0);
        assert_eq!(t.wrap_y(150.0), 50.0);
        assert_eq!(t.delta_y(95.0, 5.0), -10.0);
        assert!(t.contains(199.0, 99.0));
        assert!(!t.contains(200.0, 0.0));
    }
}
