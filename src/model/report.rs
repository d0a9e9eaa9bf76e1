//! Derived analysis output types.
//!
//! Everything here is recomputed fresh on each analysis run and serialized
//! with the camelCase field names the report consumers expect.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::requirement::Importance;

/// Which team members cover a required skill, and at what levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCoverage {
    /// Number of members with a recorded level for the skill.
    pub count: usize,
    /// Emails of the covering members, in roster order.
    pub members: Vec<String>,
    /// Their recorded levels, in roster order.
    pub levels: Vec<u8>,
    /// Bus factor for the skill; equal to `count`.
    pub bus_factor: usize,
}

impl SkillCoverage {
    /// Coverage for a skill nobody on the team has.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            count: 0,
            members: Vec::new(),
            levels: Vec::new(),
            bus_factor: 0,
        }
    }
}

/// The three normalized risk inputs, each in `[0, 1]`.
///
/// Reported rounded to 3 decimals; the scorer keeps full precision
/// internally when blending them into the final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub gap_risk: f64,
    pub coverage_risk: f64,
    pub variability_risk: f64,
}

/// Risk bucket for a skill or for the project overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored risk for a single required skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRisk {
    /// Risk score in `[0, 10]`, rounded to 1 decimal.
    pub score: f64,
    pub level: RiskLevel,
    /// True when the skill rests on at most one member and the requirement
    /// is anything above nice-to-have.
    pub bottleneck: bool,
    pub factors: RiskFactors,
}

/// Full per-requirement analysis, keyed by skill name in the report map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysis {
    /// Required proficiency level.
    pub required: u8,
    /// Team average level for the skill, 2 decimals; 0 when uncovered.
    pub average: f64,
    /// `max(0, required - average)`, 2 decimals.
    pub gap: f64,
    pub importance: Importance,
    /// `gap * importance multiplier`, 2 decimals.
    pub weighted_gap: f64,
    pub coverage: SkillCoverage,
    pub risk: SkillRisk,
}

/// Importance-weighted project-level risk verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallRisk {
    /// Weighted mean of the per-skill risk scores, 1 decimal.
    pub score: f64,
    pub level: RiskLevel,
    /// True when the overall score sits below the high-risk threshold.
    pub ready_to_start: bool,
}

/// Descriptive counts across the per-skill analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_skills: usize,
    pub skills_ready: usize,
    pub skills_with_gaps: usize,
    pub skills_missing_completely: usize,
    pub critical_bottlenecks: usize,
    pub high_risk_skills: usize,
    pub medium_risk_skills: usize,
    pub low_risk_skills: usize,
}

/// Top-level result of one gap-analysis run.
///
/// Deterministic given identical inputs, except for `analyzed_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysisResult {
    pub analyzed_at: DateTime<Utc>,
    pub overall_risk: OverallRisk,
    pub skills: BTreeMap<String, SkillAnalysis>,
    pub summary: Summary,
}
