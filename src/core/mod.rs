//! Core building blocks shared by every system: the SoA particle store and
//! the safety/logging macros.

#[macro_use]
pub mod utils;
pub mod particles;
