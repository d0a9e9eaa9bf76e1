//! Descriptive rollup over the per-skill analyses.

use std::collections::BTreeMap;

use crate::model::{RiskLevel, SkillAnalysis, Summary};

/// Derive the summary counts from the analysis map.
///
/// `requirement_count` is the number of requirements supplied to the run,
/// which can exceed the map size when duplicate skill names collapsed.
/// Pure aggregation; never fails.
#[must_use]
pub fn summarize(analyses: &BTreeMap<String, SkillAnalysis>, requirement_count: usize) -> Summary {
    let mut summary = Summary {
        total_skills: requirement_count,
        skills_ready: 0,
        skills_with_gaps: 0,
        skills_missing_completely: 0,
        critical_bottlenecks: 0,
        high_risk_skills: 0,
        medium_risk_skills: 0,
        low_risk_skills: 0,
    };

    for analysis in analyses.values() {
        if analysis.gap == 0.0 {
            summary.skills_ready += 1;
        }
        if analysis.coverage.count == 0 {
            summary.skills_missing_completely += 1;
        }
        if analysis.risk.bottleneck && analysis.risk.level == RiskLevel::Critical {
            summary.critical_bottlenecks += 1;
        }
        match analysis.risk.level {
            RiskLevel::Critical | RiskLevel::High => summary.high_risk_skills += 1,
            RiskLevel::Medium => summary.medium_risk_skills += 1,
            RiskLevel::Low => summary.low_risk_skills += 1,
        }
    }

    summary.skills_with_gaps = summary.total_skills.saturating_sub(summary.skills_ready);
    summary
}
