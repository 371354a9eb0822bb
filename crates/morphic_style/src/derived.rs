//! Derived style values
//!
//! Everything here is recomputed from a [`ParameterVector`](crate::ParameterVector)
//! and never stored on its own.

use morphic_core::{Edge, EdgePhases, Rgb};
use smallvec::SmallVec;

/// Color of a shadow layer or gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayerColor {
    /// An RGB color with alpha
    Rgba(Rgb, f64),
    /// Achromatic color by HSL lightness (0-100%) with alpha
    Gray { lightness: f64, alpha: f64 },
    Transparent,
}

impl LayerColor {
    pub fn black(alpha: f64) -> Self {
        Self::Rgba(Rgb::BLACK, alpha)
    }

    pub fn white(alpha: f64) -> Self {
        Self::Rgba(Rgb::WHITE, alpha)
    }

    pub fn alpha(&self) -> f64 {
        match self {
            Self::Rgba(_, alpha) | Self::Gray { alpha, .. } => *alpha,
            Self::Transparent => 0.0,
        }
    }
}

/// What a shadow layer simulates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadowRole {
    /// Drop shadow cast away from the light
    Directional,
    /// Zero-offset glow from scattered light
    Ambient,
    /// Inset highlight or shade along one edge
    Edge(Edge),
}

/// A single box shadow layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowLayer {
    pub role: ShadowRole,
    pub inset: bool,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: LayerColor,
}

impl ShadowLayer {
    pub fn outer(
        role: ShadowRole,
        offset_x: f64,
        offset_y: f64,
        blur: f64,
        spread: f64,
        color: LayerColor,
    ) -> Self {
        Self {
            role,
            inset: false,
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub fn inset(edge: Edge, blur: f64, color: LayerColor) -> Self {
        let (offset_x, offset_y) = edge.inset_offset();
        Self {
            role: ShadowRole::Edge(edge),
            inset: true,
            offset_x,
            offset_y,
            blur,
            spread: 0.0,
            color,
        }
    }
}

/// Ordered shadow layers: directional, ambient, then one per edge
pub type ShadowStack = SmallVec<[ShadowLayer; 6]>;

/// Gradient stop with an optional position in percent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: LayerColor,
    pub position: Option<f64>,
}

impl GradientStop {
    pub fn new(color: LayerColor) -> Self {
        Self {
            color,
            position: None,
        }
    }

    pub fn at(color: LayerColor, position: f64) -> Self {
        Self {
            color,
            position: Some(position),
        }
    }
}

/// Two-stop linear gradient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    /// Direction in degrees, [0, 360)
    pub angle: f64,
    pub stops: [GradientStop; 2],
}

/// Blend mode between a gradient overlay and the base color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    SoftLight,
}

impl BlendMode {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::SoftLight => "soft-light",
        }
    }
}

/// How the face of the element is filled
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceFill {
    /// Flat primary color under a blended shading gradient
    Matte {
        base: Rgb,
        overlay: LinearGradient,
        blend: BlendMode,
    },
    /// Primary color blended over a blurred backdrop, plus a sheen overlay
    Glass {
        tint: Rgb,
        /// Share of the tint over the backdrop, 0-100
        tint_percent: f64,
        backdrop_blur: f64,
        sheen: LinearGradient,
    },
}

/// Every visual quantity derived from a parameter vector
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedStyle {
    /// Light angle normalized to [0, 360)
    pub light_angle: f64,
    /// Direction of the face gradients, light angle + 90°
    pub gradient_angle: f64,
    pub size: f64,
    pub corner_radius_percent: f64,
    pub horizontal_displacement: f64,
    pub vertical_displacement: f64,
    pub edge_phases: EdgePhases,
    /// May be negative; not clamped
    pub edge_opacity: f64,
    /// May be negative; not clamped
    pub surface_contrast: f64,
    pub fill: SurfaceFill,
    pub shadows: ShadowStack,
    /// Background of the element's parent
    pub parent_background: Rgb,
    /// Readable text color over the parent background
    pub foreground: Rgb,
}

impl DerivedStyle {
    /// Lightness of each edge in edge order (top, right, bottom, left)
    pub fn per_edge_lightness(&self) -> [f64; 4] {
        self.edge_phases.to_array()
    }

    pub fn shadow(&self, role: ShadowRole) -> Option<&ShadowLayer> {
        self.shadows.iter().find(|layer| layer.role == role)
    }
}
