//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Team Gap - score team skill coverage and project readiness
#[derive(Parser, Debug)]
#[command(name = "tg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// [DEPRECATED] Enable JSON output for machine consumption.
    /// Use --output-format=json or -m instead.
    #[arg(long, global = true, hide = true)]
    pub robot: bool,

    /// Output format (human, json, csv, plain)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors, no Unicode)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Color mode: auto, always, never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/tg/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a gap analysis for a team against a requirements file or a stored project
    Analyze(commands::analyze::AnalyzeArgs),
    /// Validate a requirements file without running an analysis
    Validate(commands::validate::ValidateArgs),
    /// List a team's stored projects
    Projects(commands::projects::ProjectsArgs),
    /// Show a team's aggregated skill inventory
    Skills(commands::skills::SkillsArgs),
}

impl Cli {
    /// The output format explicitly requested via flags, if any.
    ///
    /// Priority order:
    /// 1. `--plain` -> Plain format
    /// 2. `--output-format` -> Explicit format
    /// 3. `--machine` -> JSON format (shorthand)
    /// 4. `--robot` -> JSON format (deprecated, backward compat)
    #[must_use]
    pub fn explicit_output_format(&self) -> Option<OutputFormat> {
        if self.plain {
            return Some(OutputFormat::Plain);
        }
        if let Some(format) = self.output_format {
            return Some(format);
        }
        if self.machine || self.robot {
            return Some(OutputFormat::Json);
        }
        None
    }

    /// Get the effective output format from flags alone, defaulting to human.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.explicit_output_format().unwrap_or_default()
    }

    /// Check if plain mode is forced via CLI flags or color mode.
    #[must_use]
    pub fn force_plain(&self) -> bool {
        self.plain || self.color == Some(ColorMode::Never)
    }
}
