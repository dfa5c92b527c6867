//! Domain model: force law, force matrix, palette and configuration

pub mod config;
pub mod error;
pub mod force_matrix;
pub mod forces;
pub mod palette;

pub use config::SimulationConfig;
pub use error::ConfigError;
pub use force_matrix::ForceMatrix;
