//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::{Result, TgError};
use crate::validation::RawRequirement;

pub mod analyze;
pub mod projects;
pub mod skills;
pub mod validate;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::run(ctx, args),
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Projects(args) => projects::run(ctx, args),
        Commands::Skills(args) => skills::run(ctx, args),
    }
}

/// A requirements file is either a bare list or wrapped in a
/// `requirements:` key, the way analysis request payloads carry it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequirementsFile {
    List(Vec<RawRequirement>),
    Wrapped { requirements: Vec<RawRequirement> },
}

impl RequirementsFile {
    fn into_requirements(self) -> Vec<RawRequirement> {
        match self {
            Self::List(requirements) | Self::Wrapped { requirements } => requirements,
        }
    }
}

pub(crate) fn load_raw_requirements(path: &Path) -> Result<Vec<RawRequirement>> {
    let raw_text = std::fs::read_to_string(path)
        .map_err(|err| TgError::Snapshot(format!("read {}: {err}", path.display())))?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let parsed: RequirementsFile = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&raw_text)
            .map_err(|err| TgError::Snapshot(format!("parse {}: {err}", path.display())))?,
        "json" => serde_json::from_str(&raw_text)
            .map_err(|err| TgError::Snapshot(format!("parse {}: {err}", path.display())))?,
        other => {
            return Err(TgError::Snapshot(format!(
                "unsupported requirements format .{other} (expected .yaml, .yml, or .json): {}",
                path.display()
            )));
        }
    };
    Ok(parsed.into_requirements())
}

pub(crate) fn resolve_team_path(ctx: &AppContext, team: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = team {
        return Ok(path.to_path_buf());
    }
    ctx.config.team.file.clone().ok_or_else(|| {
        TgError::MissingConfig(
            "team snapshot file (pass <TEAM> or set team.file in config)".to_string(),
        )
    })
}
