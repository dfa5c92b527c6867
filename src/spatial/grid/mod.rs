//! SpatialGrid - uniform bucket grid over the torus
//!
//! Cells are at least `max_dist` wide on each axis, so every particle that
//! can interact with a point sits in the 3x3 block of cells around it.
//! Each particle is inserted once per step; queries walk the block.
//!
//!   cells[cy * cols + cx] = [id, id, ...]   (insertion order)
//!
//! Cell lists are cleared, never freed, so after the first few frames a
//! rebuild allocates nothing.

mod indexing;
mod query;

pub use query::Neighborhood;

use indexing::axis_cells;

pub struct SpatialGrid {
    cols: usize,
    rows: usize,
    cell_w: f32,
    cell_h: f32,
    cells: Vec<Vec<u32>>,
}

impl SpatialGrid {
    /// Grid over a `width x height` world for interactions up to `max_dist`.
    pub fn new(width: f32, height: f32, max_dist: f32) -> Self {
        let mut grid = Self {
            cols: 0,
            rows: 0,
            cell_w: 0.0,
            cell_h: 0.0,
            cells: Vec::new(),
        };
        grid.resize(width, height, max_dist);
        grid
    }

    /// Recompute the layout for a new `max_dist`. Returns `true` when the
    /// cell count changed; the grid is empty afterwards either way.
    pub fn resize(&mut self, width: f32, height: f32, max_dist: f32) -> bool {
        let cols = axis_cells(width, max_dist);
        let rows = axis_cells(height, max_dist);
        let changed = cols != self.cols || rows != self.rows;

        self.cols = cols;
        self.rows = rows;
        self.cell_w = width / cols as f32;
        self.cell_h = height / rows as f32;

        if changed {
            self.cells.resize_with(cols * rows, Vec::new);
        }
        self.clear();
        changed
    }

    /// Empty every cell, keeping its storage.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
    }

    /// Append `id` to the cell containing `(x, y)`.
    #[inline]
    pub fn insert(&mut self, id: usize, x: f32, y: f32) {
        let idx = self.cell_index(x, y);
        self.cells[idx].push(id as u32);
    }

    /// Candidate neighbors of `(x, y)`: every id in the surrounding 3x3 block.
    #[inline]
    pub fn query_neighborhood(&self, x: f32, y: f32) -> Neighborhood<'_> {
        let (cx, cy) = self.cell_coords(x, y);
        Neighborhood::new(self, cx, cy)
    }

    /// Ids stored in one cell.
    #[inline]
    pub fn cell(&self, cx: usize, cy: usize) -> &[u32] {
        &self.cells[cy * self.cols + cx]
    }

    /// `(cols, rows)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// `(cell width, cell height)`
    #[inline]
    pub fn cell_size(&self) -> (f32, f32) {
        (self.cell_w, self.cell_h)
    }

    /// Largest number of ids in any one cell.
    pub fn max_occupancy(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total ids currently stored.
    pub fn len(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut ids: Vec<usize>) -> Vec<usize> {
        ids.sort_unstable();
        ids
    }

    #[test]
    fn cells_are_at_least_max_dist_and_tile_the_world() {
        let grid = SpatialGrid::new(512.0, 512.0, 30.0);
        let (cols, rows) = grid.dimensions();
        assert_eq!((cols, rows), (17, 17));
        let (w, h) = grid.cell_size();
        assert!(w >= 30.0 && h >= 30.0);
        assert!((w * cols as f32 - 512.0).abs() < 1.0e-3);
    }

    #[test]
    fn resize_reports_layout_changes() {
        let mut grid = SpatialGrid::new(512.0, 512.0, 32.0);
        assert_eq!(grid.dimensions(), (16, 16));
        assert!(!grid.resize(512.0, 512.0, 32.0));
        assert!(grid.resize(512.0, 512.0, 64.0));
        assert_eq!(grid.dimensions(), (8, 8));
        assert_eq!(grid.cells.len(), 64);
    }

    #[test]
    fn insert_places_ids_by_cell() {
        let mut grid = SpatialGrid::new(512.0, 512.0, 64.0);
        grid.insert(0, 10.0, 10.0);
        grid.insert(1, 70.0, 10.0);
        grid.insert(2, 511.9, 511.9);
        assert_eq!(grid.cell(0, 0), &[0]);
        assert_eq!(grid.cell(1, 0), &[1]);
        assert_eq!(grid.cell(7, 7), &[2]);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.max_occupancy(), 1);
    }

    #[test]
    fn clear_empties_cells() {
        let mut grid = SpatialGrid::new(512.0, 512.0, 64.0);
        grid.insert(0, 10.0, 10.0);
        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn neighborhood_wraps_across_edges() {
        let mut grid = SpatialGrid::new(512.0, 512.0, 64.0);
        grid.insert(0, 5.0, 5.0); // cell (0, 0)
        grid.insert(1, 500.0, 500.0); // cell (7, 7): diagonal neighbor via wrap
        grid.insert(2, 200.0, 200.0); // cell (3, 3): too far

        let found = sorted(grid.query_neighborhood(5.0, 5.0).collect());
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn neighborhood_order_is_row_major_then_insertion() {
        let mut grid = SpatialGrid::new(512.0, 512.0, 64.0);
        grid.insert(4, 140.0, 140.0); // (2, 2)
        grid.insert(3, 70.0, 140.0); // (1, 2)
        grid.insert(2, 140.0, 70.0); // (2, 1)
        grid.insert(1, 70.0, 70.0); // (1, 1)
        grid.insert(0, 75.0, 75.0); // (1, 1)

        let found: Vec<usize> = grid.query_neighborhood(70.0, 70.0).collect();
        assert_eq!(found, vec![1, 0, 2, 3, 4]);
    }

    #[test]
    fn small_grids_visit_each_cell_once() {
        // 2x1 cells: the 3x3 block would revisit cells without the guard.
        let mut grid = SpatialGrid::new(128.0, 64.0, 60.0);
        assert_eq!(grid.dimensions(), (2, 1));
        grid.insert(0, 10.0, 10.0);
        grid.insert(1, 100.0, 10.0);

        let found = sorted(grid.query_neighborhood(10.0, 10.0).collect());
        assert_eq!(found, vec![0, 1]);
    }
}
