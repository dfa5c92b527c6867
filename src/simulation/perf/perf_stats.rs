use wasm_bindgen::prelude::*;

/// Snapshot of the last step. All zeros unless perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) grid_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) particle_count: u32,
    pub(super) candidate_pairs: u32,
    pub(super) interacting_pairs: u32,
    pub(super) max_cell_occupancy: u32,
    pub(super) grid_cols: u32,
    pub(super) grid_rows: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn grid_ms(&self) -> f64 { self.grid_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    /// Neighbor ids visited by grid queries (self excluded).
    #[wasm_bindgen(getter)]
    pub fn candidate_pairs(&self) -> u32 { self.candidate_pairs }
    /// Pairs close enough to exert a force.
    #[wasm_bindgen(getter)]
    pub fn interacting_pairs(&self) -> u32 { self.interacting_pairs }
    #[wasm_bindgen(getter)]
    pub fn max_cell_occupancy(&self) -> u32 { self.max_cell_occupancy }
    #[wasm_bindgen(getter)]
    pub fn grid_cols(&self) -> u32 { self.grid_cols }
    #[wasm_bindgen(getter)]
    pub fn grid_rows(&self) -> u32 { self.grid_rows }
}
