//! Raster visualization for regosink
//!
//! Pure consumer of the model's output: takes the depth profile and a
//! `SimulationResult` and produces the labeled compression image.

pub mod palette;
pub mod scene;

pub use scene::{render_scene, render_to_file};
