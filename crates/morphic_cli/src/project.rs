//! Project creation

use anyhow::{Context, Result};
use morphic_css::emit_stylesheet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{MorphicConfig, CONFIG_FILE};

/// Stylesheet written next to a new project file
pub const STYLESHEET_FILE: &str = "morphic.css";

/// Create `morphic.toml` and a matching stylesheet in `path`
///
/// Refuses to overwrite an existing project file unless `force` is set.
pub fn init_project(path: &Path, force: bool) -> Result<PathBuf> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            config_path.display()
        );
    }

    let config = MorphicConfig::default();
    let content = format!(
        concat!(
            "# Morphic project file\n#\n",
            "# `morphic css` reads this file from the working directory.\n\n{}"
        ),
        config.to_toml()?
    );
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let css = emit_stylesheet(&config.design, &config.output.emit_options());
    fs::write(path.join(STYLESHEET_FILE), css)
        .with_context(|| format!("Failed to write {}", STYLESHEET_FILE))?;

    info!(path = %config_path.display(), "created project");
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphic_css::import_stylesheet;

    #[test]
    fn test_init_writes_loadable_project() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("card");
        let written = init_project(&target, false).unwrap();
        assert_eq!(written, target.join(CONFIG_FILE));

        let config = MorphicConfig::load_from_dir(&target).unwrap();
        assert_eq!(config, MorphicConfig::default());

        let css = fs::read_to_string(target.join(STYLESHEET_FILE)).unwrap();
        assert_eq!(import_stylesheet(&css).unwrap().params, config.design);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[design]\nsize = 30\n").unwrap();
        assert!(init_project(dir.path(), false).is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap(),
            "[design]\nsize = 30\n"
        );

        init_project(dir.path(), true).unwrap();
        let config = MorphicConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.design.size, 175.0);
    }
}
