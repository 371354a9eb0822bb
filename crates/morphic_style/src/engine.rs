//! Style mapping engine
//!
//! A pure function from [`ParameterVector`] to [`DerivedStyle`]. The lighting
//! model decomposes the light angle into sine and cosine terms, pushes the
//! drop shadow away from the light in proportion to elevation, and assigns
//! each edge a lightness from its phase term.
//!
//! The coefficients below are calibration constants. The stylesheet emitter
//! writes the same constants into its formulas, so both projections agree.

use morphic_core::{normalize_degrees, readable_foreground, unit_vector, Edge, EdgePhases};
use tracing::debug;

use crate::derived::{
    BlendMode, DerivedStyle, GradientStop, LayerColor, LinearGradient, ShadowLayer, ShadowRole,
    ShadowStack, SurfaceFill,
};
use crate::params::{Material, ParameterVector};

/// Added to elevation so a shadow is cast even at zero elevation
pub const ELEVATION_FLOOR: f64 = 1.0;

pub const EDGE_OPACITY_PER_INTENSITY: f64 = 0.006;
pub const EDGE_OPACITY_PER_DIFFUSION: f64 = 0.002;

pub const SURFACE_CONTRAST_PER_INTENSITY: f64 = 0.01;
pub const SURFACE_CONTRAST_PER_DIFFUSION: f64 = 0.005;

pub const SHADOW_BLUR_PER_DIFFUSION: f64 = 0.3;
pub const SHADOW_BLUR_PER_ELEVATION: f64 = 0.15;
pub const SHADOW_SPREAD_PER_ELEVATION: f64 = 0.5;
pub const SHADOW_OPACITY_PER_INTENSITY: f64 = 0.006;

pub const GLOW_BLUR_PER_DIFFUSION: f64 = 0.5;
pub const GLOW_OPACITY_PER_INTENSITY: f64 = 0.004;

pub const EDGE_BLUR_PER_BEVEL: f64 = 1.5;

/// Gradient angle relative to the light angle
pub const GRADIENT_ANGLE_OFFSET: f64 = 90.0;

/// Where the glass sheen fades out, in percent
pub const SHEEN_STOP_PERCENT: f64 = 40.0;

/// Map a phase term in [-1, 1] to an HSL lightness in [0, 100]
pub fn phase_lightness(phase: f64) -> f64 {
    (phase + 1.0) * 50.0
}

pub fn edge_opacity(intensity: f64, diffusion: f64) -> f64 {
    intensity * EDGE_OPACITY_PER_INTENSITY - diffusion * EDGE_OPACITY_PER_DIFFUSION
}

pub fn surface_contrast(intensity: f64, diffusion: f64) -> f64 {
    intensity * SURFACE_CONTRAST_PER_INTENSITY - diffusion * SURFACE_CONTRAST_PER_DIFFUSION
}

/// Compute every derived style value from the parameters
pub fn compute_derived_style(params: &ParameterVector) -> DerivedStyle {
    let light_angle = normalize_degrees(params.light_angle_degrees);
    let gradient_angle = normalize_degrees(light_angle + GRADIENT_ANGLE_OFFSET);
    let (sin, cos) = unit_vector(light_angle);

    let lift = params.elevation + ELEVATION_FLOOR;
    let horizontal_displacement = -cos * lift;
    let vertical_displacement = -sin * lift;

    let edge_phases = EdgePhases::from_angle(light_angle);
    let edge_opacity = edge_opacity(params.intensity, params.diffusion);
    let surface_contrast = surface_contrast(params.intensity, params.diffusion);

    let mut shadows = ShadowStack::new();
    shadows.push(ShadowLayer::outer(
        ShadowRole::Directional,
        horizontal_displacement,
        vertical_displacement,
        params.diffusion * SHADOW_BLUR_PER_DIFFUSION + params.elevation * SHADOW_BLUR_PER_ELEVATION,
        params.elevation * SHADOW_SPREAD_PER_ELEVATION,
        LayerColor::black(params.intensity * SHADOW_OPACITY_PER_INTENSITY),
    ));
    shadows.push(ShadowLayer::outer(
        ShadowRole::Ambient,
        0.0,
        0.0,
        params.diffusion * GLOW_BLUR_PER_DIFFUSION,
        0.0,
        LayerColor::white(params.intensity * GLOW_OPACITY_PER_INTENSITY),
    ));
    let edge_blur = params.bevel_width * EDGE_BLUR_PER_BEVEL;
    for edge in Edge::ALL {
        let color = LayerColor::Gray {
            lightness: phase_lightness(edge_phases.get(edge)),
            alpha: edge_opacity,
        };
        shadows.push(ShadowLayer::inset(edge, edge_blur, color));
    }

    let fill = match params.material {
        Material::Matte => SurfaceFill::Matte {
            base: params.primary_color,
            overlay: LinearGradient {
                angle: gradient_angle,
                stops: [
                    GradientStop::new(LayerColor::black(surface_contrast)),
                    GradientStop::new(LayerColor::white(surface_contrast)),
                ],
            },
            blend: BlendMode::SoftLight,
        },
        Material::Glass(glass) => SurfaceFill::Glass {
            tint: params.primary_color,
            tint_percent: glass.translucency,
            backdrop_blur: glass.blurriness,
            sheen: LinearGradient {
                angle: gradient_angle,
                stops: [
                    GradientStop::at(LayerColor::white(surface_contrast), 0.0),
                    GradientStop::at(LayerColor::Transparent, SHEEN_STOP_PERCENT),
                ],
            },
        },
    };

    debug!(
        material = params.material.name(),
        light_angle, edge_opacity, surface_contrast, "derived style recomputed"
    );

    DerivedStyle {
        light_angle,
        gradient_angle,
        size: params.size,
        corner_radius_percent: params.corner_radius_percent,
        horizontal_displacement,
        vertical_displacement,
        edge_phases,
        edge_opacity,
        surface_contrast,
        fill,
        shadows,
        parent_background: params.background_color,
        foreground: readable_foreground(params.background_color),
    }
}
