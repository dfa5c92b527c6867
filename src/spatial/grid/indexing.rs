use super::SpatialGrid;

/// Cells along an axis of length `extent` such that each is at least
/// `max_dist` long. Always at least one.
#[inline]
pub(super) fn axis_cells(extent: f32, max_dist: f32) -> usize {
    if !max_dist.is_finite() || max_dist <= 0.0 {
        return 1;
    }
    ((extent / max_dist).floor() as usize).max(1)
}

/// Cell coordinate of `v` along an axis of `dim` cells of size `cell`,
/// wrapped into `[0, dim)`.
#[inline]
pub(super) fn cell_coord(v: f32, cell: f32, dim: usize) -> usize {
    let c = (v / cell).floor() as i64;
    c.rem_euclid(dim as i64) as usize
}

/// Cells visited along one axis of a neighborhood query.
///
/// Normally the three cells `c - 1, c, c + 1` (wrapped). When the axis has
/// fewer than three cells, every cell once, starting at 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct AxisSpan {
    start: usize,
    len: usize,
    dim: usize,
}

impl AxisSpan {
    #[inline]
    pub(super) fn around(c: usize, dim: usize) -> Self {
        if dim < 3 {
            AxisSpan { start: 0, len: dim, dim }
        } else {
            AxisSpan { start: c + dim - 1, len: 3, dim }
        }
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.len
    }

    /// The `k`-th cell of the span.
    #[inline]
    pub(super) fn at(&self, k: usize) -> usize {
        (self.start + k) % self.dim
    }
}

impl SpatialGrid {
    #[inline]
    pub(super) fn cell_coords(&self, x: f32, y: f32) -> (usize, usize) {
        (
            cell_coord(x, self.cell_w, self.cols),
            cell_coord(y, self.cell_h, self.rows),
        )
    }

    #[inline]
    pub(super) fn cell_index(&self, x: f32, y: f32) -> usize {
        let (cx, cy) = self.cell_coords(x, y);
        cy * self.cols + cx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_cells_floors_and_never_returns_zero() {
        assert_eq!(axis_cells(512.0, 32.0), 16);
        assert_eq!(axis_cells(512.0, 100.0), 5);
        assert_eq!(axis_cells(512.0, 512.0), 1);
        assert_eq!(axis_cells(100.0, 512.0), 1);
        assert_eq!(axis_cells(100.0, 0.0), 1);
    }

    #[test]
    fn cell_coord_wraps_out_of_range_values() {
        assert_eq!(cell_coord(0.0, 32.0, 16), 0);
        assert_eq!(cell_coord(511.9, 32.0, 16), 15);
        assert_eq!(cell_coord(512.0, 32.0, 16), 0);
        assert_eq!(cell_coord(-0.5, 32.0, 16), 15);
    }

    #[test]
    fn span_wraps_around_the_axis() {
        let span = AxisSpan::around(0, 8);
        let cells: Vec<usize> = (0..span.len()).map(|k| span.at(k)).collect();
        assert_eq!(cells, vec![7, 0, 1]);

        let span = AxisSpan::around(7, 8);
        let cells: Vec<usize> = (0..span.len()).map(|k| span.at(k)).collect();
        assert_eq!(cells, vec![6, 7, 0]);
    }

    #[test]
    fn short_axes_are_covered_once() {
        let span = AxisSpan::around(1, 2);
        let cells: Vec<usize> = (0..span.len()).map(|k| span.at(k)).collect();
        assert_eq!(cells, vec![0, 1]);
        assert_eq!(AxisSpan::around(0, 1).len(), 1);
    }
}
