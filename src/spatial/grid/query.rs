use super::indexing::AxisSpan;
use super::SpatialGrid;

/// Iterator over the ids in the 3x3 block of cells around a point.
///
/// Cells are visited row by row, left to right; ids within a cell come out
/// in insertion order.
pub struct Neighborhood<'a> {
    grid: &'a SpatialGrid,
    xs: AxisSpan,
    ys: AxisSpan,
    next_cell: usize,
    current: std::slice::Iter<'a, u32>,
}

impl<'a> Neighborhood<'a> {
    pub(super) fn new(grid: &'a SpatialGrid, cx: usize, cy: usize) -> Self {
        Self {
            grid,
            xs: AxisSpan::around(cx, grid.cols),
            ys: AxisSpan::around(cy, grid.rows),
            next_cell: 0,
            current: [].iter(),
        }
    }
}

impl<'a> Iterator for Neighborhood<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if let Some(&id) = self.current.next() {
                return Some(id as usize);
            }

            let block = self.xs.len() * self.ys.len();
            if self.next_cell >= block {
                return None;
            }

            let row = self.ys.at(self.next_cell / self.xs.len());
            let col = self.xs.at(self.next_cell % self.xs.len());
            self.current = self.grid.cell(col, row).iter();
            self.next_cell += 1;
        }
    }
}
