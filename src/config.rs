use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TgError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub team: TeamConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Default team snapshot file used when a command gets no team argument.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: human, json, csv, plain.
    pub format: Option<String>,
    /// Color mode: auto, always, never.
    pub color: Option<String>,
}

impl Config {
    /// Load configuration, merging global then project-local files unless an
    /// explicit path (flag or `TG_CONFIG`) overrides both, then environment
    /// overrides on top.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TG_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_patch(Path::new("tg.toml"))? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(dir) => Self::load_patch(&dir.join("tg/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| TgError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| TgError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.team {
            self.team.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(file) = std::env::var("TG_TEAM_FILE") {
            if !file.is_empty() {
                self.team.file = Some(PathBuf::from(file));
            }
        }
        if let Ok(format) = std::env::var("TG_OUTPUT_FORMAT") {
            if !format.is_empty() {
                self.output.format = Some(format);
            }
        }
        if let Ok(color) = std::env::var("TG_COLOR") {
            if !color.is_empty() {
                self.output.color = Some(color);
            }
        }
    }
}

impl TeamConfig {
    fn merge(&mut self, patch: TeamPatch) {
        if let Some(file) = patch.file {
            self.file = Some(file);
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(format) = patch.format {
            self.format = Some(format);
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    team: Option<TeamPatch>,
    output: Option<OutputPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct TeamPatch {
    file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputPatch {
    format: Option<String>,
    color: Option<String>,
}
