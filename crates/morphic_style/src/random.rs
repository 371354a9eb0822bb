//! Random designs

use morphic_core::Rgb;
use rand::Rng;

use crate::bounds::ParameterBounds;
use crate::params::{GlassSettings, Material, ParameterVector};

/// Draw a full parameter vector uniformly within `bounds`
///
/// The material is a coin flip. With `color_linked` the background copies the
/// new primary color instead of being drawn on its own.
pub fn random_parameters<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &ParameterBounds,
    color_linked: bool,
) -> ParameterVector {
    let primary_color = random_color(rng);
    let background_color = if color_linked {
        primary_color
    } else {
        random_color(rng)
    };

    let size = bounds.size.sample(rng);
    let corner_radius_percent = bounds.corner_radius.sample(rng);
    let bevel_width = bounds.bevel.sample(rng);
    let light_angle_degrees = bounds.angle.sample(rng);
    let elevation = bounds.elevation.sample(rng);
    let intensity = bounds.intensity.sample(rng);
    let diffusion = bounds.diffusion.sample(rng);

    let material = if rng.random_bool(0.5) {
        Material::Glass(GlassSettings {
            blurriness: bounds.blurriness.sample(rng),
            translucency: bounds.translucency.sample(rng),
        })
    } else {
        Material::Matte
    };

    ParameterVector {
        primary_color,
        background_color,
        color_linked,
        size,
        corner_radius_percent,
        bevel_width,
        light_angle_degrees,
        elevation,
        intensity,
        diffusion,
        material,
    }
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::from_hex(rng.random_range(0..=0xFF_FFFF))
}
