//! Morphic project file handling

use anyhow::{Context, Result};
use morphic_css::EmitOptions;
use morphic_style::{ParameterBounds, ParameterVector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project file looked up in a directory
pub const CONFIG_FILE: &str = "morphic.toml";

/// Top-level Morphic configuration (morphic.toml)
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct MorphicConfig {
    /// Starting design
    #[serde(default)]
    pub design: ParameterVector,
    /// Slider limits, also used to clamp every design
    #[serde(default)]
    pub bounds: ParameterBounds,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Stylesheet output settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Selector of the styled element
    #[serde(default = "default_selector")]
    pub selector: String,
    /// Selector of the element's parent
    #[serde(default = "default_parent_selector")]
    pub parent_selector: String,
    /// Spaces per indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_selector() -> String {
    ".morphic".to_string()
}

fn default_parent_selector() -> String {
    ".morphic-parent".to_string()
}

fn default_indent() -> usize {
    2
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            parent_selector: default_parent_selector(),
            indent: default_indent(),
        }
    }
}

impl OutputConfig {
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            selector: self.selector.clone(),
            parent_selector: self.parent_selector.clone(),
            indent: self.indent,
        }
    }
}

fn config_path(path: &Path) -> PathBuf {
    if path.is_file() {
        path.to_path_buf()
    } else {
        path.join(CONFIG_FILE)
    }
}

impl MorphicConfig {
    /// Load configuration from a directory (looks for morphic.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = config_path(path);

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `morphic init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        debug!(path = %config_path.display(), "loaded project file");
        Ok(config)
    }

    /// Load an explicit project file, or `morphic.toml` in the working
    /// directory when present, or the defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_dir(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::load_from_dir(Path::new(".")),
            None => {
                debug!("no project file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: MorphicConfig = toml::from_str(content)?;
        config.bounds.validate().context("Invalid [bounds]")?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphic_core::Rgb;
    use morphic_style::{GlassSettings, Material, Range};

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = MorphicConfig::from_toml("").unwrap();
        assert_eq!(config, MorphicConfig::default());
        assert_eq!(config.output.emit_options(), EmitOptions::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = MorphicConfig::from_toml(
            r##"
            [design]
            primary_color = "#38c3b9"
            background_color = "#38c3b9"
            elevation = 12

            [design.material]
            mode = "glass"
            blurriness = 6.0

            [bounds.size]
            min = 50.0
            max = 150.0
            step = 5.0

            [output]
            selector = ".button"
            "##,
        )
        .unwrap();

        assert_eq!(config.design.primary_color, Rgb::from_hex(0x38c3b9));
        assert_eq!(config.design.elevation, 12.0);
        assert_eq!(config.design.size, 175.0);
        assert_eq!(
            config.design.material,
            Material::Glass(GlassSettings {
                blurriness: 6.0,
                translucency: 50.0,
            })
        );
        assert_eq!(config.bounds.size, Range::new(50.0, 150.0, 5.0));
        assert_eq!(config.bounds.bevel, ParameterBounds::default().bevel);
        assert_eq!(config.output.selector, ".button");
        assert_eq!(config.output.parent_selector, ".morphic-parent");
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = MorphicConfig::from_toml("[design]\nprimary_color = \"green\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("green"));
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let err = MorphicConfig::from_toml("[bounds.angle]\nmin = 360.0\nmax = 0.0\nstep = 1.0\n")
            .unwrap_err();
        assert!(format!("{err:#}").contains("Invalid [bounds]"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = MorphicConfig::default();
        config.design.material = Material::Glass(GlassSettings::default());
        let text = config.to_toml().unwrap();
        assert_eq!(MorphicConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MorphicConfig::load_from_dir(dir.path()).is_err());

        fs::write(dir.path().join(CONFIG_FILE), "[design]\nsize = 90\n").unwrap();
        let config = MorphicConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.design.size, 90.0);

        let direct = MorphicConfig::load_from_dir(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(direct, config);
    }
}
