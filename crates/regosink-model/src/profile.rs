//! Depth profile generation
//!
//! Density and bearing capacity are closed-form functions of depth,
//! precomputed once per centimeter and immutable thereafter.

use serde::{Deserialize, Serialize};

use crate::constants::ModelConstants;

/// One centimeter of regolith
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthLayer {
    /// Depth below the surface (cm)
    pub depth_cm: u32,
    /// In-situ density (g/cm³)
    pub density_g_cm3: f64,
    /// Maximum load per unit area this layer supports (N/cm²)
    pub bearing_cap_n_cm2: f64,
}

/// Per-centimeter soil column, surface first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthProfile {
    layers: Vec<DepthLayer>,
}

/// Empirical density curve for lunar regolith (g/cm³).
///
/// # Formula
/// density = 1.89 × (depth + 1.69) / (depth + 2.9)
pub fn density_at_depth(depth_cm: u32) -> f64 {
    let d = depth_cm as f64;
    1.89 * (d + 1.69) / (d + 2.9)
}

/// Bearing capacity at depth (N/cm²), scaled linearly between the
/// near-surface minimum and the known value at 30 cm.
///
/// Kept as its own function because the linear scaling is an
/// acknowledged approximation with only two data points behind it;
/// a better curve can replace this without touching the simulator.
pub fn bearing_cap_at_depth(depth_cm: u32, constants: &ModelConstants) -> f64 {
    constants.min_bearing_cap_n_cm2 + depth_cm as f64 * constants.bearing_cap_per_cm
}

impl DepthProfile {
    /// Precompute density and bearing capacity for each centimeter
    /// down to `max_depth_cm`.
    pub fn generate(max_depth_cm: u32, constants: &ModelConstants) -> Self {
        let layers = (0..max_depth_cm)
            .map(|depth_cm| DepthLayer {
                depth_cm,
                density_g_cm3: density_at_depth(depth_cm),
                bearing_cap_n_cm2: bearing_cap_at_depth(depth_cm, constants),
            })
            .collect();
        Self { layers }
    }

    pub fn layers(&self) -> &[DepthLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Build a profile from explicit layers (test fixtures, alternate
    /// bearing-capacity curves).
    pub fn from_layers(layers: Vec<DepthLayer>) -> Self {
        Self { layers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================
    // Density curve
    // ==========================================

    #[test]
    fn test_density_is_monotonically_non_decreasing() {
        let constants = ModelConstants::default();
        let profile = DepthProfile::generate(30, &constants);
        for pair in profile.layers().windows(2) {
            assert!(
                pair[1].density_g_cm3 >= pair[0].density_g_cm3,
                "density dropped between {} and {} cm",
                pair[0].depth_cm,
                pair[1].depth_cm
            );
        }
    }

    #[test]
    fn test_density_stays_in_observed_range() {
        // Observed by printing the curve from 0 to 29 cm deep:
        // 1.101 at the surface up to 1.818 at 29 cm.
        for depth in 0..30 {
            let d = density_at_depth(depth);
            assert!(d >= 1.10 && d <= 1.82, "density {} at {} cm", d, depth);
        }
        assert!((density_at_depth(0) - 1.101).abs() < 0.001);
        assert!((density_at_depth(29) - 1.818).abs() < 0.001);
    }

    // ==========================================
    // Bearing capacity curve
    // ==========================================

    #[test]
    fn test_bearing_cap_is_strictly_increasing_and_linear() {
        let constants = ModelConstants::default();
        let profile = DepthProfile::generate(30, &constants);
        for pair in profile.layers().windows(2) {
            let slope = pair[1].bearing_cap_n_cm2 - pair[0].bearing_cap_n_cm2;
            assert!(slope > 0.0);
            assert!((slope - constants.bearing_cap_per_cm).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bearing_cap_endpoints() {
        let constants = ModelConstants::default();
        // Near-surface minimum, and 65 N/cm² a hair above 30 cm
        assert!((bearing_cap_at_depth(0, &constants) - 0.03).abs() < 1e-12);
        assert!((bearing_cap_at_depth(30, &constants) - 65.03).abs() < 1e-9);
    }

    // ==========================================
    // Generation
    // ==========================================

    #[test]
    fn test_generate_length_and_ordering() {
        let constants = ModelConstants::default();
        let profile = DepthProfile::generate(30, &constants);
        assert_eq!(profile.len(), 30);
        for (i, layer) in profile.layers().iter().enumerate() {
            assert_eq!(layer.depth_cm, i as u32);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let constants = ModelConstants::default();
        let a = DepthProfile::generate(30, &constants);
        let b = DepthProfile::generate(30, &constants);
        for (la, lb) in a.layers().iter().zip(b.layers()) {
            assert_eq!(la.density_g_cm3.to_bits(), lb.density_g_cm3.to_bits());
            assert_eq!(la.bearing_cap_n_cm2.to_bits(), lb.bearing_cap_n_cm2.to_bits());
        }
    }
}
