//! Regosink - lunar regolith wheel-sinkage simulator
//!
//! Simulates, centimeter by centimeter, how far a vehicle wheel sinks
//! into lunar soil before a layer can bear its load, and renders the
//! compressed column as a labeled image.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
