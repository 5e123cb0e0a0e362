//! Colors for the compression image

use image::Rgb;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHEEL_COLOR: Rgb<u8> = Rgb([0, 26, 128]);
pub const BACKGROUND: Rgb<u8> = Rgb([200, 200, 200]);

/// Gray value (0.0–1.0) representing regolith density at a depth.
/// Darker as depth increases: a gentle linear fade over the top 6 cm,
/// a steeper one down to 11 cm, pure black beyond.
pub fn gray_for_depth(depth_cm: u32) -> f64 {
    let d = depth_cm as f64;
    if depth_cm <= 6 {
        0.9 - 0.1 * d
    } else if depth_cm <= 11 {
        0.25 - 0.05 * (d - 7.0)
    } else {
        0.0
    }
}

/// Convert a 0.0–1.0 gray value to a pixel
pub fn gray_rgb(value: f64) -> Rgb<u8> {
    let v = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb([v, v, v])
}

/// Red intensity proportional to normalized pressure; the brightest
/// red marks the highest pressure.
pub fn pressure_rgb(normalized: f64) -> Rgb<u8> {
    let r = (normalized.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb([r, 0, 0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_fades_in_three_tiers() {
        assert!((gray_for_depth(0) - 0.9).abs() < 1e-12);
        assert!((gray_for_depth(6) - 0.3).abs() < 1e-12);
        assert!((gray_for_depth(7) - 0.25).abs() < 1e-12);
        assert!((gray_for_depth(11) - 0.05).abs() < 1e-12);
        assert!((gray_for_depth(12) - 0.0).abs() < f64::EPSILON);
        assert!((gray_for_depth(25) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gray_is_non_increasing_with_depth() {
        for depth in 0..29 {
            assert!(gray_for_depth(depth + 1) <= gray_for_depth(depth));
        }
    }

    #[test]
    fn test_pressure_scale_endpoints() {
        assert_eq!(pressure_rgb(0.0), Rgb([0, 0, 0]));
        assert_eq!(pressure_rgb(1.0), Rgb([255, 0, 0]));
        // Out-of-range values are clamped, not wrapped
        assert_eq!(pressure_rgb(2.0), Rgb([255, 0, 0]));
        assert_eq!(pressure_rgb(-1.0), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_gray_rgb_conversion() {
        assert_eq!(gray_rgb(1.0), Rgb([255, 255, 255]));
        assert_eq!(gray_rgb(0.0), Rgb([0, 0, 0]));
        assert_eq!(gray_rgb(0.9), Rgb([230, 230, 230]));
    }
}
