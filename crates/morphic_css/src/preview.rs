//! Preview renderer
//!
//! Projects a [`DerivedStyle`] onto concrete property values for a live
//! element. Unlike the stylesheet every value here is resolved to a number,
//! formatted with the same routines the emitter uses.

use morphic_style::{DerivedStyle, SurfaceFill};

use crate::format;

/// One resolved `property: value` pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Resolved properties for the parent, the element and its sheen overlay
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewStyle {
    pub parent: Vec<Declaration>,
    pub element: Vec<Declaration>,
    /// Present only for glass surfaces
    pub overlay: Option<Vec<Declaration>>,
}

impl PreviewStyle {
    pub fn from_derived(style: &DerivedStyle) -> Self {
        let parent = vec![
            Declaration::new("background-color", format::color(style.parent_background)),
            Declaration::new("color", format::color(style.foreground)),
        ];

        let mut element = vec![
            Declaration::new("width", format::px(style.size)),
            Declaration::new("height", format::px(style.size)),
            Declaration::new("border-radius", format::percent(style.corner_radius_percent)),
            Declaration::new("box-shadow", format::shadow_stack(&style.shadows)),
        ];

        let overlay = match &style.fill {
            SurfaceFill::Matte {
                base,
                overlay,
                blend,
            } => {
                element.push(Declaration::new(
                    "background",
                    format!("{}, {}", format::linear_gradient(overlay), format::color(*base)),
                ));
                element.push(Declaration::new("background-blend-mode", blend.css_name()));
                None
            }
            SurfaceFill::Glass {
                tint,
                tint_percent,
                backdrop_blur,
                sheen,
            } => {
                element.push(Declaration::new(
                    "background-color",
                    format!(
                        "color-mix(in srgb, {} {}, transparent)",
                        format::color(*tint),
                        format::percent(*tint_percent)
                    ),
                ));
                element.push(Declaration::new(
                    "backdrop-filter",
                    format!("blur({})", format::px(*backdrop_blur)),
                ));
                element.push(Declaration::new("position", "relative"));
                Some(vec![
                    Declaration::new("content", "\"\""),
                    Declaration::new("position", "absolute"),
                    Declaration::new("inset", "0"),
                    Declaration::new("border-radius", "inherit"),
                    Declaration::new("background", format::linear_gradient(sheen)),
                    Declaration::new("pointer-events", "none"),
                ])
            }
        };

        Self {
            parent,
            element,
            overlay,
        }
    }

    /// Value of an element property
    pub fn get(&self, property: &str) -> Option<&str> {
        self.element
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    /// Element properties as an inline `style` attribute
    pub fn to_inline(&self) -> String {
        inline(&self.element)
    }

    pub fn parent_inline(&self) -> String {
        inline(&self.parent)
    }
}

fn inline(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|decl| format!("{}: {};", decl.property, decl.value))
        .collect::<Vec<_>>()
        .join(" ")
}
