//! Compression image layout
//!
//! Draws, top to bottom: the wheel, the collapsed layer stack in red,
//! and the original regolith bands in gray, then labels everything.
//! Consumes only the self-contained `SimulationResult`; no simulator
//! internals are needed.

use std::path::Path;
use std::sync::LazyLock;

use ab_glyph::{FontRef, PxScale};
use image::RgbImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut};
use imageproc::rect::Rect;

use regosink_model::{DepthProfile, ForceModel, SimulationResult, VehicleConfig};
use regosink_types::Result;

use crate::palette;

pub const IMAGE_WIDTH: u32 = 2000;
pub const IMAGE_HEIGHT: u32 = 1000;
pub const PIXELS_PER_CM: u32 = 50;
/// Y pixel of the undisturbed ground surface
pub const GROUND_LEVEL: u32 = 200;
/// How many profile bands fit between ground level and the bottom edge
const PROFILE_BANDS: u32 = 12;

const LABEL_SCALE: f32 = 22.0;

static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

// The font ships inside the binary; failing to parse it is a build
// packaging bug, not a runtime condition.
static LABEL_FONT: LazyLock<FontRef<'static>> =
    LazyLock::new(|| FontRef::try_from_slice(FONT_BYTES).expect("embedded font is valid"));

fn draw_label(img: &mut RgbImage, x: i32, y: i32, color: image::Rgb<u8>, text: &str) {
    draw_text_mut(img, color, x, y, PxScale::from(LABEL_SCALE), &*LABEL_FONT, text);
}

fn horizontal_line(img: &mut RgbImage, y: f32, color: image::Rgb<u8>) {
    draw_line_segment_mut(img, (0.0, y), (IMAGE_WIDTH as f32 - 1.0, y), color);
}

/// Render the full compression scene into a pixel buffer.
pub fn render_scene(
    profile: &DepthProfile,
    vehicle: &VehicleConfig,
    force: &ForceModel,
    result: &SimulationResult,
) -> RgbImage {
    let mut img = RgbImage::from_pixel(IMAGE_WIDTH, IMAGE_HEIGHT, palette::BACKGROUND);
    let ppc = PIXELS_PER_CM as f64;
    let center_x = IMAGE_WIDTH as f64 / 2.0;

    // ---- Original regolith bands, darker gray as depth increases ----
    let bands = (PROFILE_BANDS as usize).min(profile.len());
    let mut y = GROUND_LEVEL;
    for layer in &profile.layers()[..bands] {
        let gray = palette::gray_rgb(palette::gray_for_depth(layer.depth_cm));
        draw_filled_rect_mut(
            &mut img,
            Rect::at(0, y as i32).of_size(IMAGE_WIDTH, PIXELS_PER_CM),
            gray,
        );

        // Dark labels read better on the light top bands.
        let label_color = if layer.depth_cm < 4 {
            palette::BLACK
        } else {
            palette::WHITE
        };
        draw_label(
            &mut img,
            300,
            y as i32 + 30,
            label_color,
            &format!("depth {}: {:.2} g/cm3", layer.depth_cm + 1, layer.density_g_cm3),
        );
        draw_label(
            &mut img,
            1400,
            y as i32 + 30,
            label_color,
            &format!("bearing cap: {:.2} N/cm2", layer.bearing_cap_n_cm2),
        );

        horizontal_line(&mut img, y as f32, palette::BLACK);
        y += PIXELS_PER_CM;
    }

    // ---- Collapsed layers, red scaled by applied pressure ----
    let pressure_range = result.max_pressure_n_cm2 - result.min_pressure_n_cm2;
    let mut layer_y = GROUND_LEVEL as f64 + result.total_compression_cm * ppc;
    let mut wheel_left = center_x - vehicle.wheel_contact_width_cm * ppc / 2.0;
    let mut wheel_width = vehicle.wheel_contact_width_cm * ppc;

    for (i, layer) in result.compressed_layers.iter().enumerate() {
        let width = layer.footprint_edge_cm * ppc;
        let height = layer.compressed_thickness_cm * ppc;
        let left = center_x - width / 2.0;
        if i == 0 {
            wheel_left = left;
            wheel_width = width;
        }

        let normalized = if pressure_range > 0.0 {
            (layer.applied_pressure_n_cm2 - result.min_pressure_n_cm2) / pressure_range
        } else {
            1.0
        };
        draw_filled_rect_mut(
            &mut img,
            Rect::at(left.round() as i32, layer_y.round() as i32)
                .of_size((width.round() as u32).max(1), (height.round() as u32).max(1)),
            palette::pressure_rgb(normalized),
        );
        draw_label(
            &mut img,
            (center_x - 100.0) as i32,
            layer_y.round() as i32 + 5,
            palette::WHITE,
            &format!("{:.2} N/cm2", layer.applied_pressure_n_cm2),
        );

        layer_y += height;
    }

    // ---- Boundary between compressed and uncompressed material ----
    let boundary_y = GROUND_LEVEL + result.first_uncompressed_depth_cm * PIXELS_PER_CM;
    if boundary_y < IMAGE_HEIGHT {
        horizontal_line(&mut img, boundary_y as f32, palette::WHITE);
    }

    // ---- The wheel, from the top of the image to its sinkage depth ----
    let wheel_bottom = GROUND_LEVEL as f64 + result.total_compression_cm * ppc;
    draw_filled_rect_mut(
        &mut img,
        Rect::at(wheel_left.round() as i32, 0)
            .of_size((wheel_width.round() as u32).max(1), wheel_bottom.round() as u32),
        palette::WHEEL_COLOR,
    );

    let labels = [
        format!("wheel of: {}", vehicle.name),
        format!("vehicle mass: {:.0} kg", vehicle.mass_kg),
        format!("force on wheel: {:.0} N", force.force_per_wheel_n),
        format!("sinks to {:.2} cm", result.total_compression_cm),
    ];
    let mut label_y = 30;
    for label in &labels {
        draw_label(&mut img, wheel_left.round() as i32 + 20, label_y, palette::WHITE, label);
        label_y += 40;
    }

    img
}

/// Render and save the scene as a PNG.
pub fn render_to_file(
    profile: &DepthProfile,
    vehicle: &VehicleConfig,
    force: &ForceModel,
    result: &SimulationResult,
    path: &Path,
) -> Result<()> {
    let img = render_scene(profile, vehicle, force, result);
    img.save(path)?;
    Ok(())
}
