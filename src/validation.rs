//! Input validation for requirement lists and stored projects.
//!
//! The engine only accepts pre-validated requirements; anything malformed is
//! rejected here with a field-path -> message map (`requirements[0].level`
//! style paths) so callers can report every problem at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Importance, SkillRequirement};

/// Field-path keyed validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Merge another error map under a path prefix (`projects[2].` etc.).
    pub fn merge_prefixed(&mut self, prefix: &str, other: Self) {
        for (field, message) in other.0 {
            self.0.insert(format!("{prefix}{field}"), message);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// A requirement as it appears in a file or stored project, before any
/// checking. Fields are optional so a partial entry still parses and every
/// problem can be reported by path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRequirement {
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<String>,
}

impl RawRequirement {
    pub fn new(skill: &str, level: f64, importance: Option<&str>) -> Self {
        Self {
            skill: Some(skill.to_string()),
            level: Some(level),
            importance: importance.map(str::to_string),
        }
    }
}

/// Validate a requirement list, returning the typed requirements or the full
/// error map. An empty list is itself an error: the weighted overall risk is
/// undefined for zero total weight.
pub fn validate_requirements(
    raw: &[RawRequirement],
) -> Result<Vec<SkillRequirement>, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let requirements = collect_requirements(raw, "requirements", &mut errors);
    if errors.is_empty() {
        Ok(requirements)
    } else {
        Err(errors)
    }
}

/// Validate a stored project: its name plus its requirement list.
pub fn validate_project(
    name: &str,
    raw: &[RawRequirement],
) -> Result<Vec<SkillRequirement>, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.push("name", "name is required");
    } else if trimmed.chars().count() > 100 {
        errors.push("name", "name must be 100 characters or less");
    }

    let requirements = collect_requirements(raw, "requirements", &mut errors);
    if errors.is_empty() {
        Ok(requirements)
    } else {
        Err(errors)
    }
}

fn collect_requirements(
    raw: &[RawRequirement],
    path: &str,
    errors: &mut ValidationErrors,
) -> Vec<SkillRequirement> {
    if raw.is_empty() {
        errors.push(path, format!("{path} must be a non-empty array"));
        return Vec::new();
    }

    let mut requirements = Vec::with_capacity(raw.len());
    for (i, entry) in raw.iter().enumerate() {
        let skill = match &entry.skill {
            Some(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => {
                errors.push(format!("{path}[{i}].skill"), "skill is required");
                None
            }
        };

        let level = match entry.level {
            Some(l) if l.fract() == 0.0 && (1.0..=5.0).contains(&l) => Some(l as u8),
            _ => {
                errors.push(
                    format!("{path}[{i}].level"),
                    "level must be an integer 1..5",
                );
                None
            }
        };

        let importance = match &entry.importance {
            None => Some(Importance::default()),
            Some(value) => {
                let parsed = Importance::parse(value);
                if parsed.is_none() {
                    errors.push(
                        format!("{path}[{i}].importance"),
                        "importance must be one of: critical, high, medium, nice-to-have",
                    );
                }
                parsed
            }
        };

        if let (Some(skill), Some(level), Some(importance)) = (skill, level, importance) {
            requirements.push(SkillRequirement::new(skill, level, importance));
        }
    }
    requirements
}
