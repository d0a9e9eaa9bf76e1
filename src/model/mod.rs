//! Domain model shared by the engine, snapshot loader, and CLI.

pub mod report;
pub mod requirement;
pub mod team;

pub use report::{
    GapAnalysisResult, OverallRisk, RiskFactors, RiskLevel, SkillAnalysis, SkillCoverage,
    SkillRisk, Summary,
};
pub use requirement::{Importance, SkillRequirement};
pub use team::{MemberSkill, TeamMember, TeamRole};

/// Normalize a skill name for matching: trimmed, lowercased.
///
/// Every place that compares skill names (coverage lookup, duplicate
/// requirement handling, inventory aggregation) goes through this function.
#[must_use]
pub fn normalize_skill(name: &str) -> String {
    name.trim().to_lowercase()
}
