//! Morphic CLI
//!
//! Generates skeuomorphic, glassmorphic and neumorphic CSS from a handful of
//! lighting parameters. Emitted CSS goes to stdout; logs go to stderr.

mod commands;
mod config;
mod project;
mod share;

use anyhow::Result;
use clap::{Parser, Subcommand};
use morphic_core::Point;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::{parse_point, DesignArgs};
use crate::config::MorphicConfig;

/// Neumorphic and glassmorphic CSS generator
#[derive(Parser, Debug)]
#[command(name = "morphic")]
#[command(about = "Generate skeuomorphic, glassmorphic and neumorphic CSS")]
#[command(version)]
struct Cli {
    /// Project file, or a directory containing morphic.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create morphic.toml and morphic.css
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing morphic.toml
        #[arg(long)]
        force: bool,
    },

    /// Print the stylesheet for a design
    Css {
        #[command(flatten)]
        design: DesignArgs,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the resolved preview properties for a design
    Preview {
        #[command(flatten)]
        design: DesignArgs,
    },

    /// Print a random design as a project file
    Random {
        #[arg(long)]
        seed: Option<u64>,

        /// Draw the background color independently
        #[arg(long)]
        unlinked: bool,
    },

    /// Light angle for a pointer held around a target center
    Angle {
        /// Target center as x,y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        target: Point,

        /// Pointer position as x,y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        pointer: Point,
    },

    /// Share a link to xmorphic
    Share {
        /// Print the share text instead of copying the link
        #[arg(long)]
        print: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Init { path, force } => {
            project::init_project(&path, force)?;
            Ok(())
        }
        Command::Css { design, output } => {
            let config = MorphicConfig::load(cli.config.as_deref())?;
            commands::css(&design, output.as_ref(), &config)
        }
        Command::Preview { design } => {
            let config = MorphicConfig::load(cli.config.as_deref())?;
            commands::preview(&design, &config)
        }
        Command::Random { seed, unlinked } => {
            let config = MorphicConfig::load(cli.config.as_deref())?;
            commands::random(seed, unlinked, &config)
        }
        Command::Angle { target, pointer } => {
            let config = MorphicConfig::load(cli.config.as_deref())?;
            commands::angle(target, pointer, &config)
        }
        Command::Share { print } => commands::share(print),
    }
}
