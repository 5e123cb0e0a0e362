//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use regosink_types::OutputFormat;

#[derive(Parser)]
#[command(name = "regosink")]
#[command(version)]
#[command(about = "Simulates a vehicle wheel sinking into lunar regolith")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table)
    #[arg(long, short = 'f', global = true, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print the per-layer collapse trace
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the compression simulation for a scenario and render the image
    Simulate {
        /// Scenario name (e.g., "moon-buggy", "ppl")
        scenario: String,

        /// Output image path
        #[arg(long, short = 'o', default_value = "./image.png")]
        output: PathBuf,

        /// Skip writing the image, print the result only
        #[arg(long)]
        no_image: bool,
    },

    /// Print the generated depth profile
    Profile {
        /// Profile depth in cm
        #[arg(long, short = 'd', default_value = "30")]
        depth: u32,
    },

    /// List the registered vehicle scenarios
    Scenarios,
}
