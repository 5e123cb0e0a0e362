//! Error types for regosink

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown scenario '{0}' (use the `scenarios` command to list the registered ones)")]
    UnknownScenario(String),

    #[error("Invalid vehicle configuration: {0}")]
    InvalidVehicle(String),
}

/// Errors raised by the compression simulator
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The scan reached the bottom of the profile without ever finding a
    /// layer whose bearing capacity meets the applied pressure. The profile
    /// depth must be chosen large enough that a supporting layer exists.
    #[error(
        "Degenerate profile: no layer down to {max_depth_cm} cm can support the load \
         (last pressure {last_pressure_n_cm2:.2} N/cm2)"
    )]
    DegenerateProfile {
        max_depth_cm: u32,
        last_pressure_n_cm2: f64,
    },

    #[error("Wheel contact width must be strictly positive, got {0}")]
    NonPositiveContactWidth(f64),

    #[error("Depth profile is empty")]
    EmptyProfile,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

pub type Result<T> = std::result::Result<T, Error>;
