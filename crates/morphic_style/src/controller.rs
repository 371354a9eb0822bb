//! Parameter controller
//!
//! Owns the current [`ParameterVector`] and applies user edits to it: slider
//! values, color picks, color linking, material toggles, randomize and light
//! dragging. Every edit leaves the vector inside its bounds, and the derived
//! style is recomputed on demand from a snapshot.

use morphic_core::{Rect, Rgb};
use rand::Rng;
use tracing::debug;

use crate::bounds::ParameterBounds;
use crate::derived::DerivedStyle;
use crate::drag::DragSession;
use crate::engine::compute_derived_style;
use crate::error::Result;
use crate::params::{Field, GlassSettings, Material, ParameterVector};
use crate::random::random_parameters;

/// Owner of the editable parameter state
#[derive(Clone, Debug)]
pub struct ParameterController {
    params: ParameterVector,
    bounds: ParameterBounds,
    /// Restored when switching back to glass
    last_glass: GlassSettings,
}

impl ParameterController {
    /// Create a controller, clamping `params` into `bounds`
    pub fn new(params: ParameterVector, bounds: ParameterBounds) -> Result<Self> {
        bounds.validate()?;
        let params = params.clamped(&bounds);
        let last_glass = params.material.glass().copied().unwrap_or_else(|| GlassSettings {
            blurriness: bounds.constrain(Field::Blurriness, GlassSettings::default().blurriness),
            translucency: bounds
                .constrain(Field::Translucency, GlassSettings::default().translucency),
        });
        Ok(Self {
            params,
            bounds,
            last_glass,
        })
    }

    pub fn params(&self) -> &ParameterVector {
        &self.params
    }

    pub fn bounds(&self) -> &ParameterBounds {
        &self.bounds
    }

    /// Recompute the derived style for the current parameters
    pub fn derived(&self) -> DerivedStyle {
        compute_derived_style(&self.params)
    }

    /// Set a numeric field, returning the value actually stored
    ///
    /// The value is clamped and snapped to the field's step grid. Glass-only
    /// fields edited on a matte surface are remembered and take effect the
    /// next time glass is selected.
    pub fn set(&mut self, field: Field, value: f64) -> f64 {
        let value = self.bounds.constrain(field, value);
        match field {
            Field::Blurriness => self.last_glass.blurriness = value,
            Field::Translucency => self.last_glass.translucency = value,
            _ => {}
        }
        self.params.put(field, value);
        value
    }

    pub fn set_primary_color(&mut self, color: Rgb) {
        self.params.primary_color = color;
        if self.params.color_linked {
            self.params.background_color = color;
        }
    }

    pub fn set_background_color(&mut self, color: Rgb) {
        self.params.background_color = color;
        if self.params.color_linked {
            self.params.primary_color = color;
        }
    }

    /// Link or unlink the two colors
    ///
    /// Linking copies the primary color onto the background. Unlinking keeps
    /// both colors as they are.
    pub fn set_linked(&mut self, linked: bool) {
        self.params.color_linked = linked;
        if linked {
            self.params.background_color = self.params.primary_color;
        }
        debug!(linked, "color link changed");
    }

    pub fn toggle_link(&mut self) -> bool {
        let linked = !self.params.color_linked;
        self.set_linked(linked);
        linked
    }

    /// Swapping is offered only when the colors are unlinked and differ
    pub fn can_swap(&self) -> bool {
        !self.params.color_linked && self.params.primary_color != self.params.background_color
    }

    /// Exchange primary and background colors; returns false when unavailable
    pub fn swap_colors(&mut self) -> bool {
        if !self.can_swap() {
            return false;
        }
        std::mem::swap(&mut self.params.primary_color, &mut self.params.background_color);
        debug!(
            primary = %self.params.primary_color,
            background = %self.params.background_color,
            "colors swapped"
        );
        true
    }

    /// Switch between matte and glass, keeping the last glass settings
    pub fn set_glass(&mut self, glass: bool) {
        self.params.material = if glass {
            Material::Glass(self.last_glass)
        } else {
            Material::Matte
        };
        debug!(material = self.params.material.name(), "material changed");
    }

    pub fn toggle_material(&mut self) -> &Material {
        self.set_glass(!self.params.material.is_glass());
        &self.params.material
    }

    /// Replace every field with a random value inside the bounds
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.params = random_parameters(rng, &self.bounds, self.params.color_linked);
        if let Some(glass) = self.params.material.glass() {
            self.last_glass = *glass;
        }
        debug!(material = self.params.material.name(), "parameters randomized");
    }

    /// Start dragging the light around `target`
    ///
    /// The returned session holds the controller until it is released or
    /// dropped.
    pub fn begin_drag(&mut self, target: Rect) -> DragSession<'_> {
        DragSession::new(self, target.center())
    }
}

impl Default for ParameterController {
    fn default() -> Self {
        Self {
            params: ParameterVector::default(),
            bounds: ParameterBounds::default(),
            last_glass: GlassSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Range;

    fn unlinked() -> ParameterController {
        let mut controller = ParameterController::default();
        controller.set_linked(false);
        controller
    }

    #[test]
    fn test_linked_edits_propagate() {
        let mut controller = ParameterController::default();
        controller.set_primary_color(Rgb::from_hex(0x123456));
        assert_eq!(controller.params().background_color, Rgb::from_hex(0x123456));
        controller.set_background_color(Rgb::from_hex(0xabcdef));
        assert_eq!(controller.params().primary_color, Rgb::from_hex(0xabcdef));
    }

    #[test]
    fn test_relinking_copies_primary() {
        let mut controller = unlinked();
        controller.set_background_color(Rgb::from_hex(0x000000));
        assert_ne!(controller.params().primary_color, controller.params().background_color);
        controller.set_linked(true);
        assert_eq!(controller.params().primary_color, controller.params().background_color);
    }

    #[test]
    fn test_toggle_link_twice_keeps_colors() {
        let mut controller = ParameterController::default();
        let before = controller.params().clone();
        controller.toggle_link();
        controller.toggle_link();
        assert_eq!(controller.params(), &before);
    }

    #[test]
    fn test_swap_only_when_unlinked_and_different() {
        let mut controller = ParameterController::default();
        assert!(!controller.swap_colors());

        let mut controller = unlinked();
        assert!(!controller.can_swap());
        controller.set_background_color(Rgb::from_hex(0x101010));
        assert!(controller.swap_colors());
        assert_eq!(controller.params().primary_color, Rgb::from_hex(0x101010));
        assert_eq!(controller.params().background_color, Rgb::from_hex(0x59a680));
    }

    #[test]
    fn test_set_clamps() {
        let mut controller = ParameterController::default();
        assert_eq!(controller.set(Field::Elevation, 99.0), 40.0);
        assert_eq!(controller.params().elevation, 40.0);
        assert_eq!(controller.set(Field::Bevel, 2.5), 2.5);
    }

    #[test]
    fn test_set_snaps_to_step() {
        let mut controller = ParameterController::default();
        assert_eq!(controller.set(Field::Bevel, 1.23456), 1.2);
        assert_eq!(controller.params().bevel_width, 1.2);
        assert_eq!(controller.set(Field::Size, 100.4), 100.0);
        assert_eq!(controller.set(Field::Angle, -90.0), 270.0);
    }

    #[test]
    fn test_glass_settings_survive_toggle() {
        let mut controller = ParameterController::default();
        controller.set_glass(true);
        controller.set(Field::Blurriness, 7.5);
        controller.toggle_material();
        assert_eq!(controller.params().material, Material::Matte);
        controller.set(Field::Translucency, 20.0);
        controller.toggle_material();
        assert_eq!(
            controller.params().material,
            Material::Glass(GlassSettings {
                blurriness: 7.5,
                translucency: 20.0,
            })
        );
    }

    #[test]
    fn test_new_rejects_bad_bounds() {
        let bounds = ParameterBounds {
            size: Range::new(10.0, 5.0, 1.0),
            ..Default::default()
        };
        assert!(ParameterController::new(ParameterVector::default(), bounds).is_err());
    }

    #[test]
    fn test_new_clamps_into_narrow_bounds() {
        let bounds = ParameterBounds {
            size: Range::new(25.0, 100.0, 1.0),
            ..Default::default()
        };
        let controller = ParameterController::new(ParameterVector::default(), bounds).unwrap();
        assert_eq!(controller.params().size, 100.0);
    }
}
