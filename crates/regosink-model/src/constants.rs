//! Fixed physical parameters of the regolith model
//!
//! Everything the simulator treats as a constant lives in one immutable
//! struct that is passed explicitly, so the core stays reusable and
//! testable independent of any scenario.

use serde::{Deserialize, Serialize};

/// Physical constants of the regolith compression model.
///
/// `Default` yields the lunar values used by the shipped scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConstants {
    /// Gravitational acceleration (m/s²)
    pub gravity_m_s2: f64,
    /// Shallow angle of force-spreading with depth (degrees). Lunar
    /// regolith spreads load at a very flat angle, which is why the
    /// Apollo footprints show no depressed ring around them.
    pub spread_angle_deg: f64,
    /// Density to which each overloaded layer collapses (g/cm³)
    pub grain_density_g_cm3: f64,
    /// Near-surface bearing capacity (N/cm²)
    pub min_bearing_cap_n_cm2: f64,
    /// Bearing capacity growth per cm of depth (N/cm² per cm).
    /// NASA (ntrs.nasa.gov/citations/19720035207) gives only the
    /// near-surface minimum and a value at 30 cm, so the growth is
    /// scaled linearly between the two known points.
    pub bearing_cap_per_cm: f64,
    /// Depth of the generated profile (cm)
    pub max_depth_cm: u32,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            gravity_m_s2: 1.6,
            spread_angle_deg: 5.0,
            grain_density_g_cm3: 2.0,
            min_bearing_cap_n_cm2: 0.03,
            bearing_cap_per_cm: 65.0 / 30.0,
            max_depth_cm: 30,
        }
    }
}

impl ModelConstants {
    /// Horizontal growth of the load footprint per cm of depth,
    /// on each side: tan(spread angle).
    pub fn spread_factor(&self) -> f64 {
        self.spread_angle_deg.to_radians().tan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunar_defaults() {
        let c = ModelConstants::default();
        assert!((c.gravity_m_s2 - 1.6).abs() < f64::EPSILON);
        assert!((c.grain_density_g_cm3 - 2.0).abs() < f64::EPSILON);
        assert_eq!(c.max_depth_cm, 30);
    }

    #[test]
    fn test_spread_factor_is_tangent_of_angle() {
        let c = ModelConstants::default();
        let expected = (5.0_f64).to_radians().tan();
        assert!((c.spread_factor() - expected).abs() < 1e-12);
        // ~0.0875 for the 5 degree lunar angle
        assert!((c.spread_factor() - 0.0875).abs() < 0.001);
    }
}
