//! Team snapshot files.
//!
//! The CLI's stand-in for the membership, skill-inventory, and
//! project-storage collaborators: one YAML or JSON document holding the
//! roster, each member's recorded skills, and the team's stored projects.
//! A snapshot is loaded fresh per invocation and read as an immutable view;
//! nothing here survives between runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::SkillLookup;
use crate::error::{Result, TgError};
use crate::model::{MemberSkill, SkillRequirement, TeamMember, normalize_skill};
use crate::validation::{self, RawRequirement, ValidationErrors};

/// Team identity block of a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A stored project with its validated requirement list.
///
/// Stored requirements carry their importance, so an analysis loaded from a
/// project reports the same weighting as one supplied directly.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub requirements: Vec<SkillRequirement>,
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    team: TeamInfo,
    #[serde(default)]
    members: Vec<TeamMember>,
    #[serde(default)]
    skills: BTreeMap<String, Vec<MemberSkill>>,
    #[serde(default)]
    projects: Vec<RawProject>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    requirements: Vec<RawRequirement>,
}

/// Validated in-memory snapshot of one team.
#[derive(Debug, Clone)]
pub struct TeamSnapshot {
    pub team: TeamInfo,
    pub members: Vec<TeamMember>,
    skills: BTreeMap<String, Vec<MemberSkill>>,
    pub projects: Vec<Project>,
}

impl TeamSnapshot {
    /// Load and validate a snapshot from a YAML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw_text = fs::read_to_string(path)
            .map_err(|err| TgError::Snapshot(format!("read {}: {err}", path.display())))?;
        let raw = parse_snapshot(path, &raw_text)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSnapshot) -> Result<Self> {
        let mut errors = ValidationErrors::new();

        if raw.team.name.trim().is_empty() {
            errors.push("team.name", "name is required");
        }

        let mut seen_members: Vec<String> = Vec::new();
        for (i, member) in raw.members.iter().enumerate() {
            let email = member.user.trim();
            if email.is_empty() {
                errors.push(format!("members[{i}].user"), "user is required");
            } else if seen_members.iter().any(|m| m.eq_ignore_ascii_case(email)) {
                errors.push(format!("members[{i}].user"), "duplicate member");
            } else {
                seen_members.push(email.to_string());
            }
        }

        for (email, records) in &raw.skills {
            if !raw
                .members
                .iter()
                .any(|m| m.user.trim().eq_ignore_ascii_case(email.trim()))
            {
                tracing::warn!(email = %email, "skill records for a non-member are ignored");
            }
            for (j, record) in records.iter().enumerate() {
                if record.name.trim().is_empty() {
                    errors.push(format!("skills.{email}[{j}].name"), "name is required");
                }
                if !(1..=5).contains(&record.level) {
                    errors.push(
                        format!("skills.{email}[{j}].level"),
                        "level must be an integer 1..5",
                    );
                }
            }
        }

        let mut projects = Vec::with_capacity(raw.projects.len());
        let mut seen_projects: Vec<String> = Vec::new();
        for (i, project) in raw.projects.iter().enumerate() {
            match validation::validate_project(&project.name, &project.requirements) {
                Ok(requirements) => {
                    let name = project.name.trim().to_string();
                    if seen_projects.iter().any(|p| p.eq_ignore_ascii_case(&name)) {
                        errors.push(format!("projects[{i}].name"), "duplicate project name");
                    } else {
                        seen_projects.push(name.clone());
                    }
                    projects.push(Project {
                        name,
                        description: project.description.clone(),
                        requirements,
                    });
                }
                Err(project_errors) => {
                    errors.merge_prefixed(&format!("projects[{i}]."), project_errors);
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Self {
            team: raw.team,
            members: raw.members,
            skills: raw.skills,
            projects,
        })
    }

    /// Find a stored project by name (case-insensitive, trimmed).
    pub fn project(&self, name: &str) -> Result<&Project> {
        let needle = name.trim();
        self.projects
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(needle))
            .ok_or_else(|| TgError::ProjectNotFound(needle.to_string()))
    }

    /// Recorded skills of one member; empty when none are recorded.
    #[must_use]
    pub fn member_skills(&self, email: &str) -> &[MemberSkill] {
        self.skills
            .iter()
            .find(|(recorded, _)| recorded.trim().eq_ignore_ascii_case(email.trim()))
            .map_or(&[], |(_, records)| records.as_slice())
    }
}

impl SkillLookup for TeamSnapshot {
    fn member_skill_level(&self, member: &str, skill: &str) -> Option<u8> {
        self.member_skills(member)
            .iter()
            .find(|record| normalize_skill(&record.name) == skill)
            .map(|record| record.level)
    }
}

fn parse_snapshot(path: &Path, raw_text: &str) -> Result<RawSnapshot> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();
    match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(raw_text)
            .map_err(|err| TgError::Snapshot(format!("parse {}: {err}", path.display()))),
        "json" => serde_json::from_str(raw_text)
            .map_err(|err| TgError::Snapshot(format!("parse {}: {err}", path.display()))),
        other => Err(TgError::Snapshot(format!(
            "unsupported snapshot format .{other} (expected .yaml, .yml, or .json): {}",
            path.display()
        ))),
    }
}
