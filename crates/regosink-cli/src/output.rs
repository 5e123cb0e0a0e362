//! Output formatting module

use serde::Serialize;

use regosink_model::{DepthProfile, ForceModel, SimulationResult, VehicleConfig};
use regosink_types::{OutputFormat, Result};

/// Everything a caller needs to know about one run, in one value
#[derive(Debug, Serialize)]
pub struct SimulationReport<'a> {
    pub vehicle: &'a VehicleConfig,
    pub force: &'a ForceModel,
    pub result: &'a SimulationResult,
}

pub fn output_result(
    format: OutputFormat,
    vehicle: &VehicleConfig,
    force: &ForceModel,
    result: &SimulationResult,
) -> Result<()> {
    if format == OutputFormat::Json {
        let report = SimulationReport { vehicle, force, result };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\nCompression Result");
        println!("==================");
        println!("Vehicle:            {}", vehicle.name);
        println!("Mass:               {:.0} kg", vehicle.mass_kg);
        println!(
            "Wheel contact:      {:.0} x {:.0} cm ({} wheels)",
            vehicle.wheel_contact_width_cm, vehicle.wheel_contact_width_cm, vehicle.wheel_count
        );
        println!("Force per wheel:    {:.1} N", force.force_per_wheel_n);

        println!("\n--- Compression ---");
        println!("Collapsed layers:   {}", result.compressed_layers.len());
        println!("Total sinkage:      {:.2} cm", result.total_compression_cm);
        println!(
            "Load supported at:  {} cm depth",
            result.first_uncompressed_depth_cm
        );
        println!(
            "Pressure range:     {:.2} - {:.2} N/cm2",
            result.min_pressure_n_cm2, result.max_pressure_n_cm2
        );
    }

    Ok(())
}

/// Per-layer collapse trace, the diagnostic the table view leaves out:
/// depth, footprint, pressure, the support the layer had to offer, and
/// the thickness it collapsed to.
pub fn trace_report(profile: &DepthProfile, result: &SimulationResult) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "\n{:>5} {:>14} {:>14} {:>14} {:>12}\n",
        "depth", "footprint", "pressure", "support", "thickness"
    ));
    for (layer, soil) in result.compressed_layers.iter().zip(profile.layers()) {
        report.push_str(&format!(
            "{:>2} cm {:>11.3} cm {:>8.2} N/cm2 {:>8.2} N/cm2 {:>9.3} cm\n",
            soil.depth_cm,
            layer.footprint_edge_cm,
            layer.applied_pressure_n_cm2,
            soil.bearing_cap_n_cm2,
            layer.compressed_thickness_cm
        ));
    }
    report.push_str(&format!(
        "load supported at {} cm depth after {:.2} cm of sinkage\n",
        result.first_uncompressed_depth_cm, result.total_compression_cm
    ));
    report
}

pub fn output_trace(profile: &DepthProfile, result: &SimulationResult) {
    eprint!("{}", trace_report(profile, result));
}
