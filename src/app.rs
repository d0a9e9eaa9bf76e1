//! Application context shared by command handlers.

use crate::cli::{Cli, ColorMode, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Resolved per-invocation state: configuration plus effective output mode.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    /// True when output goes to a machine consumer (json/csv).
    pub robot_mode: bool,
}

impl AppContext {
    /// Build the context from parsed CLI flags, loading configuration and
    /// applying color overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        let output_format = cli.explicit_output_format().unwrap_or_else(|| {
            config
                .output
                .format
                .as_deref()
                .and_then(OutputFormat::parse_config)
                .unwrap_or_default()
        });

        apply_color_mode(cli, &config, output_format);

        Ok(Self {
            robot_mode: output_format.is_machine_readable(),
            output_format,
            config,
        })
    }
}

fn apply_color_mode(cli: &Cli, config: &Config, format: OutputFormat) {
    let mode = cli.color.or_else(|| {
        config
            .output
            .color
            .as_deref()
            .and_then(|value| match value.trim().to_lowercase().as_str() {
                "auto" => Some(ColorMode::Auto),
                "always" => Some(ColorMode::Always),
                "never" => Some(ColorMode::Never),
                _ => None,
            })
    });

    if cli.force_plain() || !format.use_colors() || mode == Some(ColorMode::Never) {
        colored::control::set_override(false);
    } else if mode == Some(ColorMode::Always) {
        colored::control::set_override(true);
    }
}
