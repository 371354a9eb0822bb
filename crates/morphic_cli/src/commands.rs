//! Subcommand handlers

use anyhow::{Context, Result};
use clap::Args;
use morphic_core::{Point, Rect, Rgb};
use morphic_css::{emit_stylesheet, import_stylesheet, Declaration, PreviewStyle};
use morphic_style::{Field, ParameterController};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::MorphicConfig;
use crate::share::{self, TerminalPlatform};

/// Where a design starts from, plus per-field overrides
#[derive(Args, Debug)]
pub struct DesignArgs {
    /// Start from a stylesheet emitted earlier
    #[arg(long, value_name = "FILE", conflicts_with = "random")]
    pub from: Option<PathBuf>,

    /// Start from a random design
    #[arg(long)]
    pub random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Primary color, #rgb or #rrggbb
    #[arg(long)]
    pub color: Option<Rgb>,

    /// Parent background color; unlinks the colors
    #[arg(long)]
    pub background: Option<Rgb>,

    /// Edit the two colors independently
    #[arg(long)]
    pub unlinked: bool,

    /// Use the glass material
    #[arg(long, conflicts_with = "matte")]
    pub glass: bool,

    /// Use the matte material
    #[arg(long)]
    pub matte: bool,

    /// Element size in pixels
    #[arg(long)]
    pub size: Option<f64>,

    /// Corner radius in percent of the size
    #[arg(long)]
    pub radius: Option<f64>,

    /// Edge highlight width in pixels
    #[arg(long)]
    pub bevel: Option<f64>,

    /// Light angle in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub angle: Option<f64>,

    #[arg(long)]
    pub elevation: Option<f64>,

    #[arg(long)]
    pub intensity: Option<f64>,

    #[arg(long)]
    pub diffusion: Option<f64>,

    /// Backdrop blur in pixels (glass)
    #[arg(long)]
    pub blur: Option<f64>,

    /// Share of the primary color over the backdrop in percent (glass)
    #[arg(long)]
    pub opacity: Option<f64>,
}

impl DesignArgs {
    fn overrides(&self) -> [(Field, Option<f64>); 9] {
        [
            (Field::Size, self.size),
            (Field::CornerRadius, self.radius),
            (Field::Bevel, self.bevel),
            (Field::Angle, self.angle),
            (Field::Elevation, self.elevation),
            (Field::Intensity, self.intensity),
            (Field::Diffusion, self.diffusion),
            (Field::Blurriness, self.blur),
            (Field::Translucency, self.opacity),
        ]
    }

    /// Apply the overrides through the controller so they are clamped
    fn apply(&self, controller: &mut ParameterController) {
        if self.unlinked || self.background.is_some() {
            controller.set_linked(false);
        }
        if let Some(color) = self.color {
            controller.set_primary_color(color);
        }
        if let Some(color) = self.background {
            controller.set_background_color(color);
        }
        for (field, value) in self.overrides() {
            if let Some(value) = value {
                controller.set(field, value);
            }
        }
        if self.glass {
            controller.set_glass(true);
        } else if self.matte {
            controller.set_glass(false);
        }
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Build the design from the project file and the command line
pub fn resolve_design(args: &DesignArgs, config: &MorphicConfig) -> Result<ParameterController> {
    let params = match &args.from {
        Some(path) => {
            let css = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            import_stylesheet(&css)
                .with_context(|| format!("Failed to import {}", path.display()))?
                .params
        }
        None => config.design.clone(),
    };

    let mut controller = ParameterController::new(params, config.bounds.clone())
        .context("Invalid design")?;
    if args.random {
        controller.randomize(&mut rng(args.seed));
    }
    args.apply(&mut controller);

    debug!(
        material = controller.params().material.name(),
        linked = controller.params().color_linked,
        "design resolved"
    );
    Ok(controller)
}

pub fn css(args: &DesignArgs, output: Option<&PathBuf>, config: &MorphicConfig) -> Result<()> {
    let controller = resolve_design(args, config)?;
    let css = emit_stylesheet(controller.params(), &config.output.emit_options());
    match output {
        Some(path) => {
            fs::write(path, &css).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote stylesheet");
        }
        None => print!("{css}"),
    }
    Ok(())
}

fn block(selector: &str, declarations: &[Declaration]) -> String {
    let mut out = format!("{selector} {{\n");
    for decl in declarations {
        out.push_str(&format!("  {}: {};\n", decl.property, decl.value));
    }
    out.push_str("}\n");
    out
}

/// Resolved properties as plain CSS rules
pub fn render_preview(preview: &PreviewStyle, config: &MorphicConfig) -> String {
    let output = &config.output;
    let mut out = block(&output.parent_selector, &preview.parent);
    out.push('\n');
    out.push_str(&block(&output.selector, &preview.element));
    if let Some(overlay) = &preview.overlay {
        out.push('\n');
        out.push_str(&block(&format!("{}::before", output.selector), overlay));
    }
    out
}

pub fn preview(args: &DesignArgs, config: &MorphicConfig) -> Result<()> {
    let controller = resolve_design(args, config)?;
    let preview = PreviewStyle::from_derived(&controller.derived());
    print!("{}", render_preview(&preview, config));
    Ok(())
}

/// Print a random design as a complete project file
pub fn random(seed: Option<u64>, unlinked: bool, config: &MorphicConfig) -> Result<()> {
    let mut controller = ParameterController::new(config.design.clone(), config.bounds.clone())
        .context("Invalid design")?;
    controller.set_linked(!unlinked);
    controller.randomize(&mut rng(seed));

    let design = MorphicConfig {
        design: controller.params().clone(),
        ..config.clone()
    };
    print!("{}", design.to_toml()?);
    Ok(())
}

/// Parse `x,y`
pub fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{value}'"))?;
    let coord = |text: &str| {
        text.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid coordinate '{text}': {err}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

/// Light angle for a pointer held at `pointer` around `target`
pub fn light_angle(target: Point, pointer: Point, config: &MorphicConfig) -> Result<f64> {
    let mut controller = ParameterController::new(config.design.clone(), config.bounds.clone())
        .context("Invalid design")?;
    let mut drag = controller.begin_drag(Rect::new(target.x, target.y, target.x, target.y));
    drag.pointer_moved(pointer);
    Ok(drag.release())
}

pub fn angle(target: Point, pointer: Point, config: &MorphicConfig) -> Result<()> {
    println!("{}", light_angle(target, pointer, config)?);
    Ok(())
}

pub fn share(print: bool) -> Result<()> {
    if print {
        let payload = share::SharePayload::canonical();
        println!("{}\n{}\n{}", payload.title, payload.url, payload.text);
        return Ok(());
    }

    let mut platform = TerminalPlatform::stdout();
    let outcome = share::share(&mut platform);
    if let Some(notice) = outcome.notice() {
        println!("{notice}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use morphic_style::{GlassSettings, Material};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        design: DesignArgs,
    }

    fn design_args(args: &[&str]) -> DesignArgs {
        TestCli::parse_from(std::iter::once("morphic").chain(args.iter().copied())).design
    }

    #[test]
    fn test_overrides_are_constrained() {
        let args = design_args(&["--size", "900", "--angle", "-15", "--elevation", "7"]);
        let controller = resolve_design(&args, &MorphicConfig::default()).unwrap();
        assert_eq!(controller.params().size, 225.0);
        assert_eq!(controller.params().light_angle_degrees, 345.0);
        assert_eq!(controller.params().elevation, 7.0);
    }

    #[test]
    fn test_glass_flags() {
        let args = design_args(&["--glass", "--blur", "4.5", "--opacity", "20"]);
        let controller = resolve_design(&args, &MorphicConfig::default()).unwrap();
        assert_eq!(
            controller.params().material,
            Material::Glass(GlassSettings {
                blurriness: 4.5,
                translucency: 20.0,
            })
        );
    }

    #[test]
    fn test_background_unlinks() {
        let args = design_args(&["--color", "#38c3b9", "--background", "#111"]);
        let controller = resolve_design(&args, &MorphicConfig::default()).unwrap();
        let params = controller.params();
        assert!(!params.color_linked);
        assert_eq!(params.primary_color, Rgb::from_hex(0x38c3b9));
        assert_eq!(params.background_color, Rgb::from_hex(0x111111));
    }

    #[test]
    fn test_linked_color_flag() {
        let args = design_args(&["--color", "#abc"]);
        let controller = resolve_design(&args, &MorphicConfig::default()).unwrap();
        assert_eq!(controller.params().background_color, Rgb::from_hex(0xaabbcc));
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let args = design_args(&["--random", "--seed", "42"]);
        let config = MorphicConfig::default();
        let first = resolve_design(&args, &config).unwrap();
        let second = resolve_design(&args, &config).unwrap();
        assert_eq!(first.params(), second.params());
        assert!(first.params().is_within(&config.bounds));
    }

    #[test]
    fn test_from_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.css");
        fs::write(&path, ".x { --primary-color: #ff0000; --elevation: 33; }").unwrap();
        let args = design_args(&["--from", path.to_str().unwrap(), "--intensity", "10"]);
        let controller = resolve_design(&args, &MorphicConfig::default()).unwrap();
        assert_eq!(controller.params().primary_color, Rgb::from_hex(0xff0000));
        assert_eq!(controller.params().elevation, 33.0);
        assert_eq!(controller.params().intensity, 10.0);
    }

    #[test]
    fn test_pointer_due_right() {
        let angle = light_angle(
            parse_point("100,100").unwrap(),
            parse_point("200,100").unwrap(),
            &MorphicConfig::default(),
        )
        .unwrap();
        assert!(angle == 0.0 || angle == 360.0);
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("-4, 2.5").unwrap(), Point::new(-4.0, 2.5));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_render_glass_preview() {
        let args = design_args(&["--glass"]);
        let config = MorphicConfig::default();
        let controller = resolve_design(&args, &config).unwrap();
        let text = render_preview(&PreviewStyle::from_derived(&controller.derived()), &config);
        assert!(text.starts_with(".morphic-parent {\n  background-color: #59a680;\n"));
        assert!(text.contains(".morphic {\n  width: 175px;\n"));
        assert!(text.contains(".morphic::before {\n  position: absolute;\n"));
    }
}
