//! Gap-analysis engine.
//!
//! Data flow: requirements + roster -> coverage resolution (per skill) ->
//! risk scoring (per skill) -> importance-weighted aggregation -> summary.
//! The whole pipeline is a pure fold over the requirement list: no state
//! survives between runs, and two runs over identical inputs produce
//! identical output apart from the timestamp.

pub mod coverage;
pub mod risk;
pub mod summary;

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;

pub use coverage::{SkillLookup, resolve_coverage};
pub use risk::{RiskScorer, RiskWeights};
pub use summary::summarize;

use crate::error::Result;
use crate::model::{
    GapAnalysisResult, OverallRisk, RiskLevel, SkillAnalysis, SkillRequirement, TeamMember,
    normalize_skill,
};
use crate::validation::ValidationErrors;
use risk::mean_level;

/// Overall scores below this are considered ready to start.
const READY_THRESHOLD: f64 = 5.0;

/// Runs the full analysis pipeline over a requirement list.
#[derive(Debug, Clone, Default)]
pub struct GapAnalyzer {
    scorer: RiskScorer,
}

impl GapAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scorer: RiskScorer::with_defaults(),
        }
    }

    #[must_use]
    pub fn with_scorer(scorer: RiskScorer) -> Self {
        Self { scorer }
    }

    /// Analyze `requirements` against the team roster and skill inventory.
    ///
    /// Requirements are folded in caller order. Duplicate skill names
    /// (compared after normalization) collapse to the last entry in the
    /// report map, while the weighted overall average still spans every
    /// supplied requirement.
    ///
    /// # Errors
    ///
    /// An empty requirement list fails validation: the weighted overall
    /// average is undefined for zero total weight.
    pub fn analyze<L: SkillLookup + ?Sized>(
        &self,
        requirements: &[SkillRequirement],
        members: &[TeamMember],
        inventory: &L,
    ) -> Result<GapAnalysisResult> {
        if requirements.is_empty() {
            return Err(ValidationErrors::single("requirements", "no requirements supplied").into());
        }

        tracing::debug!(
            requirements = requirements.len(),
            members = members.len(),
            "running gap analysis"
        );

        let mut skills: BTreeMap<String, SkillAnalysis> = BTreeMap::new();
        let mut keys_by_name: HashMap<String, String> = HashMap::new();
        let mut weight_total = 0.0;
        let mut weighted_score_total = 0.0;

        for requirement in requirements {
            let coverage = resolve_coverage(&requirement.skill, members, inventory);
            let average = mean_level(&coverage.levels);
            let gap = (f64::from(requirement.level) - average).max(0.0);
            let multiplier = requirement.importance.multiplier();
            let risk = self
                .scorer
                .score(requirement.level, &coverage, requirement.importance);

            weighted_score_total += risk.score * multiplier;
            weight_total += multiplier;

            let analysis = SkillAnalysis {
                required: requirement.level,
                average: round2(average),
                gap: round2(gap),
                importance: requirement.importance,
                weighted_gap: round2(gap * multiplier),
                coverage,
                risk,
            };

            // Last requirement wins for a repeated skill name, also across
            // casing variants of the same name.
            let key = requirement.skill.trim().to_string();
            let previous = keys_by_name.insert(normalize_skill(&requirement.skill), key.clone());
            if let Some(previous) = previous {
                if previous != key {
                    skills.remove(&previous);
                }
            }
            skills.insert(key, analysis);
        }

        let overall_score = round1(weighted_score_total / weight_total);
        let overall_risk = OverallRisk {
            score: overall_score,
            level: classify_overall_score(overall_score),
            ready_to_start: overall_score < READY_THRESHOLD,
        };
        let summary = summarize(&skills, requirements.len());

        Ok(GapAnalysisResult {
            analyzed_at: Utc::now(),
            overall_risk,
            skills,
            summary,
        })
    }
}

/// Risk bucket for the project-level score: 7/5/3 thresholds.
#[must_use]
pub fn classify_overall_score(score: f64) -> RiskLevel {
    if score >= 7.0 {
        RiskLevel::Critical
    } else if score >= 5.0 {
        RiskLevel::High
    } else if score >= 3.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
