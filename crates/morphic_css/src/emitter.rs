//! Stylesheet emitter
//!
//! Writes a parameter vector as portable CSS. Raw parameters become custom
//! properties, every derived quantity is a `calc()` formula over them, and
//! the visual properties read only those variables, so the text stays
//! editable without this tool.

use morphic_core::Edge;
use morphic_style::engine::{
    EDGE_BLUR_PER_BEVEL, EDGE_OPACITY_PER_DIFFUSION, EDGE_OPACITY_PER_INTENSITY, ELEVATION_FLOOR,
    GLOW_BLUR_PER_DIFFUSION, GLOW_OPACITY_PER_INTENSITY, GRADIENT_ANGLE_OFFSET,
    SHADOW_BLUR_PER_DIFFUSION, SHADOW_BLUR_PER_ELEVATION, SHADOW_OPACITY_PER_INTENSITY,
    SHADOW_SPREAD_PER_ELEVATION, SHEEN_STOP_PERCENT, SURFACE_CONTRAST_PER_DIFFUSION,
    SURFACE_CONTRAST_PER_INTENSITY,
};
use morphic_style::{Field, Material, ParameterVector};
use tracing::debug;

use crate::format::{self, number};

pub const CONFIGURABLE_HEADER: &str = "/*========= Configurable Variables =========*/";
pub const ONLY_THESE_CHANGE: &str = "/*=========== Only these change! ===========*/";
pub const COMPUTED_VARIABLES: &str = "/*=========== Computed Variables ===========*/";
pub const COMPUTED_PROPERTIES: &str = "/*=========== Computed Properties ==========*/";
pub const STATIC_PROPERTIES: &str = "/*============ Static Properties ===========*/";
pub const PARENT_COMMENT: &str = "/* Put this on the element's parent */";

/// Custom property holding the primary color
pub const PRIMARY_COLOR_VAR: &str = "--primary-color";

/// Raw fields written in the configurable block, in order
const MATTE_FIELDS: [Field; 7] = [
    Field::Size,
    Field::CornerRadius,
    Field::Angle,
    Field::Elevation,
    Field::Intensity,
    Field::Diffusion,
    Field::Bevel,
];
const GLASS_FIELDS: [Field; 2] = [Field::Blurriness, Field::Translucency];

/// Selector and layout options for the emitted text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Selector of the styled element
    pub selector: String,
    /// Selector of the element's parent
    pub parent_selector: String,
    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            selector: ".morphic".to_string(),
            parent_selector: ".morphic-parent".to_string(),
            indent: 2,
        }
    }
}

/// Name of the custom property for a raw field
pub fn field_var(field: Field) -> String {
    format!("--{}", field.name())
}

/// Name of the phase variable for an edge: `--sin`, `--sin-90`, ...
pub fn phase_var(edge: Edge) -> String {
    match edge.phase_offset_degrees() {
        0 => "--sin".to_string(),
        offset => format!("--sin-{offset}"),
    }
}

fn edge_var(edge: Edge) -> String {
    format!("--edge-{}", edge.name())
}

fn var(name: &str) -> String {
    format!("var({name})")
}

/// Line-oriented CSS text builder
struct CssWriter {
    out: String,
    indent: usize,
    depth: usize,
}

impl CssWriter {
    fn new(indent: usize) -> Self {
        Self {
            out: String::new(),
            indent,
            depth: 0,
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(&" ".repeat(self.indent * self.depth));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn open(&mut self, selector: &str) {
        self.line(&format!("{selector} {{"));
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    fn decl(&mut self, property: &str, value: &str) {
        self.line(&format!("{property}: {value};"));
    }

    /// A declaration whose comma-separated value spans several lines
    fn decl_list(&mut self, property: &str, values: &[String]) {
        self.line(&format!("{property}:"));
        self.depth += 1;
        let last = values.len().saturating_sub(1);
        for (i, value) in values.iter().enumerate() {
            let end = if i == last { ";" } else { "," };
            self.line(&format!("{value}{end}"));
        }
        self.depth -= 1;
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Render the full stylesheet for `params`
///
/// The output is a pure function of its inputs: equal vectors give
/// byte-identical text.
pub fn emit_stylesheet(params: &ParameterVector, options: &EmitOptions) -> String {
    let mut w = CssWriter::new(options.indent);

    w.line(PARENT_COMMENT);
    w.open(&options.parent_selector);
    w.decl("background-color", &format::color(params.background_color));
    w.close();
    w.blank();

    w.open(&options.selector);
    configurable_variables(&mut w, params);
    w.blank();
    computed_variables(&mut w);
    w.blank();
    computed_properties(&mut w, &params.material);
    w.blank();
    static_properties(&mut w, &params.material);
    w.close();

    if params.material.is_glass() {
        w.blank();
        sheen_overlay(&mut w, &options.selector);
    }

    let text = w.finish();
    debug!(
        material = params.material.name(),
        bytes = text.len(),
        "stylesheet emitted"
    );
    text
}

fn configurable_variables(w: &mut CssWriter, params: &ParameterVector) {
    w.line(CONFIGURABLE_HEADER);
    w.line(ONLY_THESE_CHANGE);
    w.decl(PRIMARY_COLOR_VAR, &format::color(params.primary_color));
    for field in MATTE_FIELDS.iter().chain(GLASS_FIELDS.iter()).copied() {
        if let Some(value) = params.get(field) {
            w.decl(&field_var(field), &format::field_value(field, value));
        }
    }
}

fn computed_variables(w: &mut CssWriter) {
    let angle = var(&field_var(Field::Angle));
    let elevation = var(&field_var(Field::Elevation));
    let intensity = var(&field_var(Field::Intensity));
    let diffusion = var(&field_var(Field::Diffusion));
    let bevel = var(&field_var(Field::Bevel));

    w.line(COMPUTED_VARIABLES);
    for edge in [Edge::Bottom, Edge::Right, Edge::Top, Edge::Left] {
        let value = match edge.phase_offset_degrees() {
            0 => format!("sin({angle})"),
            offset => format!("sin(calc({angle} + {offset}deg))"),
        };
        w.decl(&phase_var(edge), &value);
    }

    let lift = format!("({elevation} + {})", number(ELEVATION_FLOOR));
    w.decl(
        "--x",
        &format!("calc({} * {lift} * 1px)", var(&phase_var(Edge::Left))),
    );
    w.decl(
        "--y",
        &format!("calc({} * {lift} * 1px)", var(&phase_var(Edge::Top))),
    );
    w.decl(
        "--edge-opacity",
        &format!(
            "calc({intensity} * {} - {diffusion} * {})",
            number(EDGE_OPACITY_PER_INTENSITY),
            number(EDGE_OPACITY_PER_DIFFUSION)
        ),
    );
    w.decl(
        "--surface-contrast",
        &format!(
            "calc({intensity} * {} - {diffusion} * {})",
            number(SURFACE_CONTRAST_PER_INTENSITY),
            number(SURFACE_CONTRAST_PER_DIFFUSION)
        ),
    );
    w.decl(
        "--gradient-angle",
        &format!("calc({angle} + {}deg)", number(GRADIENT_ANGLE_OFFSET)),
    );
    w.decl(
        "--shadow-blur",
        &format!(
            "calc(({diffusion} * {} + {elevation} * {}) * 1px)",
            number(SHADOW_BLUR_PER_DIFFUSION),
            number(SHADOW_BLUR_PER_ELEVATION)
        ),
    );
    w.decl(
        "--shadow-spread",
        &format!("calc({elevation} * {} * 1px)", number(SHADOW_SPREAD_PER_ELEVATION)),
    );
    w.decl(
        "--shadow-opacity",
        &format!("calc({intensity} * {})", number(SHADOW_OPACITY_PER_INTENSITY)),
    );
    w.decl(
        "--glow-blur",
        &format!("calc({diffusion} * {} * 1px)", number(GLOW_BLUR_PER_DIFFUSION)),
    );
    w.decl(
        "--glow-opacity",
        &format!("calc({intensity} * {})", number(GLOW_OPACITY_PER_INTENSITY)),
    );
    w.decl(
        "--edge-blur",
        &format!("calc({bevel} * {})", number(EDGE_BLUR_PER_BEVEL)),
    );
    for edge in Edge::ALL {
        w.decl(
            &edge_var(edge),
            &format!(
                "hsla(0, 0%, calc(({} + 1) * 50%), var(--edge-opacity))",
                var(&phase_var(edge))
            ),
        );
    }
}

fn computed_properties(w: &mut CssWriter, material: &Material) {
    let size = var(&field_var(Field::Size));
    w.line(COMPUTED_PROPERTIES);
    w.decl("width", &size);
    w.decl("height", &size);
    w.decl("border-radius", &var(&field_var(Field::CornerRadius)));

    let mut shadows = vec![
        concat!(
            "var(--x) var(--y) var(--shadow-blur) var(--shadow-spread) ",
            "rgba(0, 0, 0, var(--shadow-opacity))"
        )
        .to_string(),
        "0px 0px var(--glow-blur) 0px rgba(255, 255, 255, var(--glow-opacity))".to_string(),
    ];
    for edge in Edge::ALL {
        let (x, y) = edge.inset_offset();
        shadows.push(format!(
            "inset {} {} var(--edge-blur) 0px {}",
            format::px(x),
            format::px(y),
            var(&edge_var(edge))
        ));
    }
    w.decl_list("box-shadow", &shadows);

    match material {
        Material::Matte => {
            w.decl(
                "background",
                &format!(
                    concat!(
                        "linear-gradient(var(--gradient-angle), ",
                        "rgba(0, 0, 0, var(--surface-contrast)), ",
                        "rgba(255, 255, 255, var(--surface-contrast))), {}"
                    ),
                    var(PRIMARY_COLOR_VAR)
                ),
            );
        }
        Material::Glass(_) => {
            w.decl(
                "background-color",
                &format!(
                    "color-mix(in srgb, {} {}, transparent)",
                    var(PRIMARY_COLOR_VAR),
                    var(&field_var(Field::Translucency))
                ),
            );
            w.decl(
                "backdrop-filter",
                &format!("blur({})", var(&field_var(Field::Blurriness))),
            );
        }
    }
}

fn static_properties(w: &mut CssWriter, material: &Material) {
    w.line(STATIC_PROPERTIES);
    match material {
        Material::Matte => w.decl("background-blend-mode", "soft-light"),
        Material::Glass(_) => w.decl("position", "relative"),
    }
}

fn sheen_overlay(w: &mut CssWriter, selector: &str) {
    w.open(&format!("{selector}::before"));
    w.decl("content", "\"\"");
    w.decl("position", "absolute");
    w.decl("inset", "0");
    w.decl("border-radius", "inherit");
    w.decl(
        "background",
        &format!(
            concat!(
                "linear-gradient(var(--gradient-angle), ",
                "rgba(255, 255, 255, var(--surface-contrast)) 0%, transparent {})"
            ),
            format::percent(SHEEN_STOP_PERCENT)
        ),
    );
    w.decl("pointer-events", "none");
    w.close();
}
