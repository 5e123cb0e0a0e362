//! Compression simulator
//!
//! Walks the depth profile from the surface downward. Each layer either
//! supports the pressure applied to it or collapses to grain density,
//! passing the whole load on to the next layer over a slightly wider
//! footprint. The scan stops at the first layer that holds.

use serde::{Deserialize, Serialize};

use regosink_types::SimulationError;

use crate::constants::ModelConstants;
use crate::force::ForceModel;
use crate::profile::DepthProfile;

/// One collapsed centimeter of regolith
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedLayer {
    /// Edge length of the square load footprint at this depth (cm)
    pub footprint_edge_cm: f64,
    /// Thickness after collapse, in (0, 1] cm
    pub compressed_thickness_cm: f64,
    /// Pressure that crushed the layer (N/cm²)
    pub applied_pressure_n_cm2: f64,
}

/// Complete outcome of one compression run.
///
/// Self-contained: rendering and reporting need nothing beyond this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Collapsed layers, surface first
    pub compressed_layers: Vec<CompressedLayer>,
    /// Total sinkage: Σ (1 − compressed thickness) over all layers (cm)
    pub total_compression_cm: f64,
    /// Depth of the first layer that supported the load (cm)
    pub first_uncompressed_depth_cm: u32,
    /// Lowest pressure seen during the scan (N/cm²)
    pub min_pressure_n_cm2: f64,
    /// Highest pressure seen during the scan (N/cm²)
    pub max_pressure_n_cm2: f64,
}

/// Run the compression scan.
///
/// # Algorithm
/// For each centimeter of depth: pressure = force per wheel / footprint
/// edge². If the layer's bearing capacity meets or exceeds the pressure
/// (≥, so an exact tie holds), compression stops there. Otherwise the
/// layer collapses to grain density and the footprint edge grows by
/// 2 × spread factor before the next centimeter.
///
/// # Errors
/// `DegenerateProfile` if every layer down to the bottom of the profile
/// collapses; the caller must supply a profile deep enough that a
/// supporting layer exists.
pub fn simulate(
    profile: &DepthProfile,
    force: &ForceModel,
    wheel_contact_width_cm: f64,
    constants: &ModelConstants,
) -> Result<SimulationResult, SimulationError> {
    if profile.is_empty() {
        return Err(SimulationError::EmptyProfile);
    }
    if !(wheel_contact_width_cm > 0.0) {
        return Err(SimulationError::NonPositiveContactWidth(
            wheel_contact_width_cm,
        ));
    }

    let mut compressed_layers = Vec::new();
    let mut total_compression_cm = 0.0;
    let mut min_pressure = f64::INFINITY;
    let mut max_pressure = f64::NEG_INFINITY;
    let mut footprint_edge_cm = wheel_contact_width_cm;

    for layer in profile.layers() {
        let pressure = force.force_per_wheel_n / (footprint_edge_cm * footprint_edge_cm);

        // Recorded before the support check, so the pressure at the
        // first supporting layer still counts toward the range.
        max_pressure = max_pressure.max(pressure);
        min_pressure = min_pressure.min(pressure);

        if layer.bearing_cap_n_cm2 >= pressure {
            // This layer holds; everything below it is untouched.
            return Ok(SimulationResult {
                compressed_layers,
                total_compression_cm,
                first_uncompressed_depth_cm: layer.depth_cm,
                min_pressure_n_cm2: min_pressure,
                max_pressure_n_cm2: max_pressure,
            });
        }

        // Overloaded: the layer packs down to grain density and the
        // full load transfers to the next centimeter.
        let compressed_thickness_cm = layer.density_g_cm3 / constants.grain_density_g_cm3;
        total_compression_cm += 1.0 - compressed_thickness_cm;
        compressed_layers.push(CompressedLayer {
            footprint_edge_cm,
            compressed_thickness_cm,
            applied_pressure_n_cm2: pressure,
        });

        // Interlocking between particles spreads the load sideways a
        // little with every centimeter of depth, on both sides.
        footprint_edge_cm += 2.0 * force.spread_factor;
    }

    Err(SimulationError::DegenerateProfile {
        max_depth_cm: profile.len() as u32,
        last_pressure_n_cm2: force.force_per_wheel_n / (footprint_edge_cm * footprint_edge_cm),
    })
}
