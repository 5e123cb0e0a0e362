//! Vehicle scenario registry
//!
//! A fixed, compile-time set of vehicles. Exactly one scenario is
//! selected per run; an unrecognized name is a fatal configuration
//! error, never a silent default.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use regosink_types::ConfigError;

/// A vehicle pressing one wheel into the regolith
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Display name (e.g., "Apollo Rover")
    pub name: String,
    /// Vehicle mass (kg)
    pub mass_kg: f64,
    /// Edge length of the square wheel contact patch (cm)
    pub wheel_contact_width_cm: f64,
    /// Number of wheels sharing the load
    pub wheel_count: u32,
}

impl VehicleConfig {
    /// Reject configurations that would break the simulation
    /// (zero/negative mass or width divides by zero downstream).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass_kg > 0.0) {
            return Err(ConfigError::InvalidVehicle(format!(
                "mass must be strictly positive, got {} kg",
                self.mass_kg
            )));
        }
        if !(self.wheel_contact_width_cm > 0.0) {
            return Err(ConfigError::InvalidVehicle(format!(
                "wheel contact width must be strictly positive, got {} cm",
                self.wheel_contact_width_cm
            )));
        }
        if self.wheel_count == 0 {
            return Err(ConfigError::InvalidVehicle(
                "wheel count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Registered scenarios. The wheel contact widths are estimates based
/// on wheel width. The PP&L bulldozer is fictional (so far); it has a
/// smaller contact patch under far more mass than the Apollo rover.
pub static SCENARIOS: LazyLock<HashMap<&'static str, VehicleConfig>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        "moon-buggy",
        VehicleConfig {
            name: "Apollo Rover".to_string(),
            mass_kg: 660.0,
            wheel_contact_width_cm: 15.0,
            wheel_count: 4,
        },
    );

    m.insert(
        "ppl",
        VehicleConfig {
            name: "PP&L Bulldozer".to_string(),
            mass_kg: 6000.0,
            wheel_contact_width_cm: 10.0,
            wheel_count: 4,
        },
    );

    m
});

/// Look up a scenario by name
pub fn get_scenario(name: &str) -> Result<&'static VehicleConfig, ConfigError> {
    SCENARIOS
        .get(name)
        .ok_or_else(|| ConfigError::UnknownScenario(name.to_string()))
}

/// All registered scenario names, sorted for stable listings
pub fn scenario_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = SCENARIOS.keys().copied().collect();
    names.sort_unstable();
    names
}
