use std::io;

use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum TgError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Team snapshot error: {0}")]
    Snapshot(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),
}

impl TgError {
    /// The validation error map, when this is a validation failure.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TgError>;
