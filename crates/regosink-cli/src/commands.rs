//! Command handlers

use std::path::PathBuf;

use regosink_model::{
    get_scenario, scenario_names, simulate, DepthProfile, ForceModel, ModelConstants,
};
use regosink_render::render_to_file;
use regosink_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_result, output_trace};

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Simulate {
            scenario,
            output,
            no_image,
        } => run_simulation(&scenario, output, no_image, cli.format, cli.verbose),
        Commands::Profile { depth } => print_profile(depth, cli.format),
        Commands::Scenarios => list_scenarios(cli.format),
    }
}

fn run_simulation(
    scenario: &str,
    output: PathBuf,
    no_image: bool,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let constants = ModelConstants::default();
    let vehicle = get_scenario(scenario)?;
    let force = ForceModel::from_vehicle(vehicle, &constants)?;
    let profile = DepthProfile::generate(constants.max_depth_cm, &constants);

    let result = simulate(&profile, &force, vehicle.wheel_contact_width_cm, &constants)?;

    if verbose {
        output_trace(&profile, &result);
    }
    output_result(format, vehicle, &force, &result)?;

    if !no_image {
        render_to_file(&profile, vehicle, &force, &result, &output)?;
        println!("\nWrote image to {}", output.display());
    }

    Ok(())
}

fn print_profile(depth: u32, format: OutputFormat) -> Result<()> {
    let constants = ModelConstants::default();
    let profile = DepthProfile::generate(depth, &constants);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(profile.layers())?);
    } else {
        println!("\n{:>5} {:>14} {:>18}", "depth", "density", "bearing cap");
        for layer in profile.layers() {
            println!(
                "{:>3} cm {:>8.3} g/cm3 {:>12.2} N/cm2",
                layer.depth_cm, layer.density_g_cm3, layer.bearing_cap_n_cm2
            );
        }
    }

    Ok(())
}

fn list_scenarios(format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let mut entries = Vec::new();
        for name in scenario_names() {
            let vehicle = get_scenario(name)?;
            entries.push(serde_json::json!({ "scenario": name, "vehicle": vehicle }));
        }
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("\nRegistered scenarios");
        println!("====================");
        for name in scenario_names() {
            let vehicle = get_scenario(name)?;
            println!(
                "{:<12} {} ({:.0} kg, {:.0} cm wheel, {} wheels)",
                name,
                vehicle.name,
                vehicle.mass_kg,
                vehicle.wheel_contact_width_cm,
                vehicle.wheel_count
            );
        }
    }

    Ok(())
}
