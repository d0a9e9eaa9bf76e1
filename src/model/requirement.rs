//! Project skill requirements and their importance weighting.

use serde::{Deserialize, Serialize};

/// How critical a required skill is to project success.
///
/// The importance acts as a risk multiplier: a gap in a critical skill is
/// weighted three times as heavily as the same gap in a nice-to-have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Importance {
    Critical,
    High,
    #[default]
    Medium,
    NiceToHave,
}

impl Importance {
    /// All accepted spellings, in weight order.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::NiceToHave];

    /// Risk multiplier applied to this importance tier.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Critical => 3.0,
            Self::High => 2.0,
            Self::Medium => 1.5,
            Self::NiceToHave => 1.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::NiceToHave => "nice-to-have",
        }
    }

    /// Parse the wire spelling (`"nice-to-have"` etc.). Returns `None` for
    /// anything outside the four accepted values.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "nice-to-have" => Some(Self::NiceToHave),
            _ => None,
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validated skill requirement for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirement {
    /// Skill name as supplied (trimmed); matching is case-insensitive.
    pub skill: String,
    /// Required proficiency level, 1..=5.
    pub level: u8,
    #[serde(default)]
    pub importance: Importance,
}

impl SkillRequirement {
    pub fn new(skill: impl Into<String>, level: u8, importance: Importance) -> Self {
        Self {
            skill: skill.into(),
            level,
            importance,
        }
    }
}
