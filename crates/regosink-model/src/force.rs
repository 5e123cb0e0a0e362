//! Force model derived from a vehicle configuration

use serde::{Deserialize, Serialize};

use regosink_types::ConfigError;

use crate::constants::ModelConstants;
use crate::scenario::VehicleConfig;

/// Scalar forces derived once from a vehicle and the model constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceModel {
    /// Force needed to support the whole vehicle (N)
    pub total_support_force_n: f64,
    /// Share of that force carried by one wheel (N)
    pub force_per_wheel_n: f64,
    /// Footprint edge growth per cm of depth, per side
    pub spread_factor: f64,
}

impl ForceModel {
    /// Derive the per-wheel load from a validated vehicle.
    pub fn from_vehicle(
        vehicle: &VehicleConfig,
        constants: &ModelConstants,
    ) -> Result<Self, ConfigError> {
        vehicle.validate()?;
        let total_support_force_n = vehicle.mass_kg * constants.gravity_m_s2;
        Ok(Self {
            total_support_force_n,
            force_per_wheel_n: total_support_force_n / vehicle.wheel_count as f64,
            spread_factor: constants.spread_factor(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::get_scenario;

    #[test]
    fn test_bulldozer_force_per_wheel() {
        // 6000 kg × 1.6 m/s² / 4 wheels = 2400 N
        let constants = ModelConstants::default();
        let vehicle = get_scenario("ppl").unwrap();
        let force = ForceModel::from_vehicle(vehicle, &constants).unwrap();
        assert!((force.total_support_force_n - 9600.0).abs() < 1e-9);
        assert!((force.force_per_wheel_n - 2400.0).abs() < 1e-9);
    }

    #[test]
    fn test_rover_force_per_wheel() {
        // 660 kg × 1.6 m/s² / 4 wheels = 264 N
        let constants = ModelConstants::default();
        let vehicle = get_scenario("moon-buggy").unwrap();
        let force = ForceModel::from_vehicle(vehicle, &constants).unwrap();
        assert!((force.force_per_wheel_n - 264.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_vehicle_is_rejected() {
        let constants = ModelConstants::default();
        let vehicle = VehicleConfig {
            name: "broken".to_string(),
            mass_kg: 1000.0,
            wheel_contact_width_cm: -5.0,
            wheel_count: 4,
        };
        assert!(ForceModel::from_vehicle(&vehicle, &constants).is_err());
    }
}
