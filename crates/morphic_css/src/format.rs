//! Number and value formatting shared by the preview and the stylesheet
//!
//! Both projections go through these functions so a quantity never renders
//! with two different roundings.

use morphic_core::Rgb;
use morphic_style::{Field, GradientStop, LayerColor, LinearGradient, ShadowLayer};

/// Fractional digits kept when formatting derived numbers
const PRECISION: f64 = 10_000.0;

/// Format a number with at most four fractional digits and no trailing zeros
///
/// Integers have no decimal point and negative zero prints as `0`.
pub fn number(value: f64) -> String {
    let rounded = (value * PRECISION).round() / PRECISION;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

pub fn px(value: f64) -> String {
    format!("{}px", number(value))
}

pub fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

pub fn deg(value: f64) -> String {
    format!("{}deg", number(value))
}

pub fn color(value: Rgb) -> String {
    value.to_string()
}

/// Unit suffix written after a raw field value
pub fn field_unit(field: Field) -> &'static str {
    match field {
        Field::Size | Field::Bevel | Field::Blurriness => "px",
        Field::CornerRadius | Field::Translucency => "%",
        Field::Angle => "deg",
        Field::Elevation | Field::Intensity | Field::Diffusion => "",
    }
}

/// A raw field value with its unit, as written in a custom property
pub fn field_value(field: Field, value: f64) -> String {
    format!("{}{}", number(value), field_unit(field))
}

pub fn layer_color(value: &LayerColor) -> String {
    match value {
        LayerColor::Rgba(rgb, alpha) => format!(
            "rgba({}, {}, {}, {})",
            rgb.r,
            rgb.g,
            rgb.b,
            number(*alpha)
        ),
        LayerColor::Gray { lightness, alpha } => {
            format!("hsla(0, 0%, {}, {})", percent(*lightness), number(*alpha))
        }
        LayerColor::Transparent => "transparent".to_string(),
    }
}

fn gradient_stop(stop: &GradientStop) -> String {
    match stop.position {
        Some(position) => format!("{} {}", layer_color(&stop.color), percent(position)),
        None => layer_color(&stop.color),
    }
}

pub fn linear_gradient(gradient: &LinearGradient) -> String {
    format!(
        "linear-gradient({}, {}, {})",
        deg(gradient.angle),
        gradient_stop(&gradient.stops[0]),
        gradient_stop(&gradient.stops[1])
    )
}

pub fn shadow(layer: &ShadowLayer) -> String {
    let mut out = String::new();
    if layer.inset {
        out.push_str("inset ");
    }
    out.push_str(&format!(
        "{} {} {} {} {}",
        px(layer.offset_x),
        px(layer.offset_y),
        px(layer.blur),
        px(layer.spread),
        layer_color(&layer.color)
    ));
    out
}

pub fn shadow_stack<'a>(layers: impl IntoIterator<Item = &'a ShadowLayer>) -> String {
    layers.into_iter().map(shadow).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphic_core::Edge;
    use morphic_style::ShadowRole;

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(20.0), "20");
        assert_eq!(number(1.5), "1.5");
        assert_eq!(number(0.1 + 0.2), "0.3");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(-1e-12), "0");
        assert_eq!(number(11.437_423), "11.4374");
        assert_eq!(number(-0.2), "-0.2");
    }

    #[test]
    fn test_field_values() {
        assert_eq!(field_value(Field::Size, 175.0), "175px");
        assert_eq!(field_value(Field::CornerRadius, 8.0), "8%");
        assert_eq!(field_value(Field::Angle, 237.0), "237deg");
        assert_eq!(field_value(Field::Elevation, 20.0), "20");
        assert_eq!(field_value(Field::Bevel, 1.5), "1.5px");
        assert_eq!(field_value(Field::Translucency, 50.0), "50%");
    }

    #[test]
    fn test_layer_colors() {
        assert_eq!(layer_color(&LayerColor::black(0.3)), "rgba(0, 0, 0, 0.3)");
        assert_eq!(
            layer_color(&LayerColor::Gray {
                lightness: 50.0,
                alpha: 0.3
            }),
            "hsla(0, 0%, 50%, 0.3)"
        );
        assert_eq!(layer_color(&LayerColor::Transparent), "transparent");
    }

    #[test]
    fn test_inset_shadow() {
        let layer = ShadowLayer::inset(
            Edge::Right,
            2.25,
            LayerColor::Gray {
                lightness: 100.0,
                alpha: 0.3,
            },
        );
        assert_eq!(layer.role, ShadowRole::Edge(Edge::Right));
        assert_eq!(shadow(&layer), "inset -1px 0px 2.25px 0px hsla(0, 0%, 100%, 0.3)");
    }
}
