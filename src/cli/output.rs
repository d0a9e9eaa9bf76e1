use clap::ValueEnum;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// CSV export of the report
    Csv,
    /// Plain text without colors or formatting
    Plain,
}

impl OutputFormat {
    /// Parse a config-file spelling of a format.
    #[must_use]
    pub fn parse_config(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }

    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json | Self::Csv)
    }
}
