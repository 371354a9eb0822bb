//! Input bounds for every numeric parameter
//!
//! Bounds are data rather than constants so a project file can narrow or
//! widen them. Clamping an in-range value is a no-op.

use morphic_core::normalize_degrees;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleError};
use crate::params::Field;

/// Stylesheets print at most this many fractional digits
pub const MAX_DECIMALS: i32 = 4;

/// Fractional digits needed to write `value` exactly, up to [`MAX_DECIMALS`]
fn decimals_of(value: f64) -> Option<i32> {
    (0..=MAX_DECIMALS).find(|&d| {
        let scaled = value * 10f64.powi(d);
        (scaled - scaled.round()).abs() < 1e-9
    })
}

/// Inclusive `[min, max]` range with an input step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into the range; NaN maps to `min`
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Number of fractional digits a grid value needs
    fn decimals(&self) -> i32 {
        let step = decimals_of(self.step).unwrap_or(MAX_DECIMALS);
        let min = decimals_of(self.min).unwrap_or(MAX_DECIMALS);
        step.max(min)
    }

    /// Round a value to the grid's precision
    fn round_to_step_precision(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals());
        (value * scale).round() / scale
    }

    /// Number of whole steps between `min` and `max`
    fn step_count(&self) -> u64 {
        ((self.max - self.min) / self.step + 1e-9).floor().max(0.0) as u64
    }

    /// Clamp into the range and move to the nearest step from `min`
    ///
    /// Values already on the grid come back unchanged.
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((self.clamp(value) - self.min) / self.step).round();
        let value = self.round_to_step_precision(self.min + steps * self.step);
        value.clamp(self.min, self.max)
    }

    /// Draw a value uniformly from the step grid inside the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let k = rng.random_range(0..=self.step_count());
        let value = self.round_to_step_precision(self.min + k as f64 * self.step);
        value.clamp(self.min, self.max)
    }

    fn validate(&self, field: Field) -> Result<()> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.step.is_finite();
        let printable = decimals_of(self.min).is_some() && decimals_of(self.step).is_some();
        if !finite || !printable || self.min > self.max || self.step <= 0.0 {
            return Err(StyleError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }
}

/// Bounds for every numeric field of a [`ParameterVector`](crate::ParameterVector)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterBounds {
    pub size: Range,
    pub corner_radius: Range,
    pub bevel: Range,
    pub angle: Range,
    pub elevation: Range,
    pub intensity: Range,
    pub diffusion: Range,
    pub blurriness: Range,
    pub translucency: Range,
}

impl ParameterBounds {
    /// Get the range for a field
    pub fn get(&self, field: Field) -> Range {
        match field {
            Field::Size => self.size,
            Field::CornerRadius => self.corner_radius,
            Field::Bevel => self.bevel,
            Field::Angle => self.angle,
            Field::Elevation => self.elevation,
            Field::Intensity => self.intensity,
            Field::Diffusion => self.diffusion,
            Field::Blurriness => self.blurriness,
            Field::Translucency => self.translucency,
        }
    }

    /// Bring a value for `field` onto its grid inside the bounds
    ///
    /// The angle is circular, so an out-of-range angle wraps before it is
    /// clamped.
    pub fn constrain(&self, field: Field, value: f64) -> f64 {
        let range = self.get(field);
        let value = if field == Field::Angle && value.is_finite() && !range.contains(value) {
            normalize_degrees(value)
        } else {
            value
        };
        range.snap(value)
    }

    /// Check every range is well formed
    pub fn validate(&self) -> Result<()> {
        Field::ALL
            .iter()
            .try_for_each(|&field| self.get(field).validate(field))
    }
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            size: Range::new(25.0, 225.0, 1.0),
            corner_radius: Range::new(0.0, 50.0, 1.0),
            bevel: Range::new(0.0, 5.0, 0.1),
            angle: Range::new(0.0, 360.0, 1.0),
            elevation: Range::new(0.0, 40.0, 1.0),
            intensity: Range::new(0.0, 100.0, 1.0),
            diffusion: Range::new(0.0, 100.0, 1.0),
            blurriness: Range::new(0.0, 10.0, 0.1),
            translucency: Range::new(0.0, 100.0, 1.0),
        }
    }
}
