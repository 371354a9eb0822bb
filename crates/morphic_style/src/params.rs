//! The parameter vector: the only input state of the style engine

use std::fmt;

use morphic_core::Rgb;
use serde::{Deserialize, Serialize};

use crate::bounds::ParameterBounds;

/// Default element and background color
pub const DEFAULT_COLOR: Rgb = Rgb::from_hex(0x59a680);

/// Numeric parameters that can be set from a slider
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Size,
    CornerRadius,
    Bevel,
    Angle,
    Elevation,
    Intensity,
    Diffusion,
    Blurriness,
    Translucency,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Size,
        Field::CornerRadius,
        Field::Bevel,
        Field::Angle,
        Field::Elevation,
        Field::Intensity,
        Field::Diffusion,
        Field::Blurriness,
        Field::Translucency,
    ];

    /// Stable name, also used as the custom property name in stylesheets
    pub fn name(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::CornerRadius => "radius",
            Self::Bevel => "bevel",
            Self::Angle => "angle",
            Self::Elevation => "elevation",
            Self::Intensity => "intensity",
            Self::Diffusion => "diffusion",
            Self::Blurriness => "blur",
            Self::Translucency => "opacity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings carried by the glass material
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassSettings {
    /// Backdrop blur radius in pixels
    pub blurriness: f64,
    /// How much of the primary color covers the backdrop, 0-100
    pub translucency: f64,
}

impl Default for GlassSettings {
    fn default() -> Self {
        Self {
            blurriness: 3.0,
            translucency: 50.0,
        }
    }
}

/// Lighting and translucency model applied to the surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Material {
    /// Opaque surface shaded by a soft-light gradient
    #[default]
    Matte,
    /// Translucent surface over a blurred backdrop
    Glass(GlassSettings),
}

impl Material {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Matte => "matte",
            Self::Glass(_) => "glass",
        }
    }

    pub fn is_glass(&self) -> bool {
        matches!(self, Self::Glass(_))
    }

    pub fn glass(&self) -> Option<&GlassSettings> {
        match self {
            Self::Glass(settings) => Some(settings),
            Self::Matte => None,
        }
    }
}

/// Every user-controlled input of the engine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterVector {
    pub primary_color: Rgb,
    pub background_color: Rgb,
    /// While set, both colors are edited together
    pub color_linked: bool,
    /// Element width and height in pixels
    pub size: f64,
    /// Corner radius as a percentage of `size`, 0-50
    pub corner_radius_percent: f64,
    /// Width of the edge highlight rim in pixels
    pub bevel_width: f64,
    /// Compass direction the light arrives from, 0-360
    pub light_angle_degrees: f64,
    pub elevation: f64,
    pub intensity: f64,
    pub diffusion: f64,
    pub material: Material,
}

impl Default for ParameterVector {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_COLOR,
            background_color: DEFAULT_COLOR,
            color_linked: true,
            size: 175.0,
            corner_radius_percent: 8.0,
            bevel_width: 1.5,
            light_angle_degrees: 237.0,
            elevation: 20.0,
            intensity: 50.0,
            diffusion: 0.0,
            material: Material::Matte,
        }
    }
}

impl ParameterVector {
    /// Current value of a numeric field, `None` for glass fields on a matte surface
    pub fn get(&self, field: Field) -> Option<f64> {
        let value = match field {
            Field::Size => self.size,
            Field::CornerRadius => self.corner_radius_percent,
            Field::Bevel => self.bevel_width,
            Field::Angle => self.light_angle_degrees,
            Field::Elevation => self.elevation,
            Field::Intensity => self.intensity,
            Field::Diffusion => self.diffusion,
            Field::Blurriness => self.material.glass()?.blurriness,
            Field::Translucency => self.material.glass()?.translucency,
        };
        Some(value)
    }

    /// Store a value as-is; glass fields are ignored on a matte surface
    pub(crate) fn put(&mut self, field: Field, value: f64) {
        match field {
            Field::Size => self.size = value,
            Field::CornerRadius => self.corner_radius_percent = value,
            Field::Bevel => self.bevel_width = value,
            Field::Angle => self.light_angle_degrees = value,
            Field::Elevation => self.elevation = value,
            Field::Intensity => self.intensity = value,
            Field::Diffusion => self.diffusion = value,
            Field::Blurriness | Field::Translucency => {
                if let Material::Glass(settings) = &mut self.material {
                    if field == Field::Blurriness {
                        settings.blurriness = value;
                    } else {
                        settings.translucency = value;
                    }
                }
            }
        }
    }

    /// Copy with every numeric field clamped into `bounds` and snapped to
    /// its step grid
    ///
    /// Idempotent, and a no-op for vectors already on the grid. Linked
    /// colors are re-synchronized to the primary color.
    pub fn clamped(&self, bounds: &ParameterBounds) -> Self {
        let mut clamped = self.clone();
        for field in Field::ALL {
            if let Some(value) = self.get(field) {
                let next = bounds.constrain(field, value);
                if next != value {
                    tracing::warn!(%field, value, adjusted = next, "parameter off its grid");
                }
                clamped.put(field, next);
            }
        }
        if clamped.color_linked {
            clamped.background_color = clamped.primary_color;
        }
        clamped
    }

    /// True if every present field lies inside `bounds`
    pub fn is_within(&self, bounds: &ParameterBounds) -> bool {
        Field::ALL.iter().all(|&field| {
            self.get(field)
                .map_or(true, |value| bounds.get(field).contains(value))
        })
    }
}
