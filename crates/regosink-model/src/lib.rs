//! Regolith column model
//!
//! Core of regosink: a per-centimeter depth profile of lunar soil and a
//! compression simulator that sinks a vehicle wheel into it. Pure,
//! deterministic, no I/O; rendering and output formatting live in the
//! sibling crates.

pub mod constants;
pub mod force;
pub mod profile;
pub mod scenario;
pub mod simulator;

pub use constants::ModelConstants;
pub use force::ForceModel;
pub use profile::{DepthLayer, DepthProfile};
pub use scenario::{get_scenario, scenario_names, VehicleConfig};
pub use simulator::{simulate, CompressedLayer, SimulationResult};
