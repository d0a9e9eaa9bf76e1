//! Report export: pretty JSON and CSV flattening.

use itertools::Itertools;

use crate::error::Result;
use crate::model::GapAnalysisResult;

/// Serialize a result as pretty-printed JSON.
pub fn to_json_pretty(result: &GapAnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Flatten a result into CSV: one row per skill, then overall-risk and
/// summary key/value rows. A field-for-field transcription of the report
/// with no additional computation.
#[must_use]
pub fn to_csv(result: &GapAnalysisResult) -> String {
    let mut out = String::new();
    out.push_str(
        "skill,importance,required,average,gap,weightedGap,coverageCount,busFactor,members,\
         riskScore,riskLevel,bottleneck,gapRisk,coverageRisk,variabilityRisk\n",
    );

    for (skill, analysis) in &result.skills {
        let members = analysis.coverage.members.iter().join(";");
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            csv_field(skill),
            analysis.importance,
            analysis.required,
            analysis.average,
            analysis.gap,
            analysis.weighted_gap,
            analysis.coverage.count,
            analysis.coverage.bus_factor,
            csv_field(&members),
            analysis.risk.score,
            analysis.risk.level,
            analysis.risk.bottleneck,
            analysis.risk.factors.gap_risk,
            analysis.risk.factors.coverage_risk,
            analysis.risk.factors.variability_risk,
        ));
    }

    out.push('\n');
    out.push_str("metric,value\n");
    out.push_str(&format!("overallRisk.score,{}\n", result.overall_risk.score));
    out.push_str(&format!("overallRisk.level,{}\n", result.overall_risk.level));
    out.push_str(&format!(
        "overallRisk.readyToStart,{}\n",
        result.overall_risk.ready_to_start
    ));
    out.push_str(&format!("summary.totalSkills,{}\n", result.summary.total_skills));
    out.push_str(&format!("summary.skillsReady,{}\n", result.summary.skills_ready));
    out.push_str(&format!(
        "summary.skillsWithGaps,{}\n",
        result.summary.skills_with_gaps
    ));
    out.push_str(&format!(
        "summary.skillsMissingCompletely,{}\n",
        result.summary.skills_missing_completely
    ));
    out.push_str(&format!(
        "summary.criticalBottlenecks,{}\n",
        result.summary.critical_bottlenecks
    ));
    out.push_str(&format!(
        "summary.highRiskSkills,{}\n",
        result.summary.high_risk_skills
    ));
    out.push_str(&format!(
        "summary.mediumRiskSkills,{}\n",
        result.summary.medium_risk_skills
    ));
    out.push_str(&format!(
        "summary.lowRiskSkills,{}\n",
        result.summary.low_risk_skills
    ));
    out.push_str(&format!(
        "analyzedAt,{}\n",
        result.analyzed_at.to_rfc3339()
    ));
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
