//! Spatial structures: toroidal arithmetic and the neighbor grid

pub mod grid;
pub mod torus;

pub use grid::{Neighborhood, SpatialGrid};
pub use torus::Torus;
