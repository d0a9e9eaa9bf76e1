//! Per-skill risk scoring.
//!
//! A skill's risk blends three normalized factors: how far the team average
//! sits below the required level (gap), how few members cover the skill at
//! all (coverage / bus factor), and how inconsistent the covering members'
//! levels are (variability). The blend is then amplified by the
//! requirement's importance multiplier and capped at 10.

use super::{round1, round3};
use crate::model::{Importance, RiskFactors, RiskLevel, SkillCoverage, SkillRisk};

/// Blend weights for the three risk factors.
#[derive(Debug, Clone)]
pub struct RiskWeights {
    pub gap_weight: f64,
    pub coverage_weight: f64,
    pub variability_weight: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            gap_weight: 0.4,
            coverage_weight: 0.4,
            variability_weight: 0.2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RiskScorer {
    pub weights: RiskWeights,
}

impl RiskScorer {
    #[must_use]
    pub fn new(weights: RiskWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RiskWeights::default())
    }

    /// Score one requirement against its resolved coverage.
    ///
    /// The reported factors are rounded to 3 decimals; the final score is
    /// computed from the unrounded values and rounded to 1 decimal.
    #[must_use]
    pub fn score(
        &self,
        required: u8,
        coverage: &SkillCoverage,
        importance: Importance,
    ) -> SkillRisk {
        let average = mean_level(&coverage.levels);
        let gap = (f64::from(required) - average).max(0.0);

        let gap_risk = (gap / 5.0).min(1.0);
        let coverage_risk = coverage_risk(coverage.count);
        let variability_risk = variability_risk(&coverage.levels);

        let base_risk = self.weights.gap_weight * gap_risk
            + self.weights.coverage_weight * coverage_risk
            + self.weights.variability_weight * variability_risk;
        let score = round1((base_risk * importance.multiplier() * 10.0).min(10.0));

        SkillRisk {
            score,
            level: classify_skill_score(score),
            bottleneck: coverage.count <= 1 && importance != Importance::NiceToHave,
            factors: RiskFactors {
                gap_risk: round3(gap_risk),
                coverage_risk: round3(coverage_risk),
                variability_risk: round3(variability_risk),
            },
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Mean recorded level; 0 when nobody covers the skill.
#[must_use]
pub fn mean_level(levels: &[u8]) -> f64 {
    if levels.is_empty() {
        return 0.0;
    }
    let sum: u32 = levels.iter().map(|&l| u32::from(l)).sum();
    f64::from(sum) / levels.len() as f64
}

/// Population standard deviation of the recorded levels.
#[must_use]
pub fn population_std_dev(levels: &[u8]) -> f64 {
    if levels.is_empty() {
        return 0.0;
    }
    let mean = mean_level(levels);
    let variance = levels
        .iter()
        .map(|&l| {
            let diff = f64::from(l) - mean;
            diff * diff
        })
        .sum::<f64>()
        / levels.len() as f64;
    variance.sqrt()
}

/// Risk bucket for a per-skill score: 8/5/3 thresholds.
#[must_use]
pub fn classify_skill_score(score: f64) -> RiskLevel {
    if score >= 8.0 {
        RiskLevel::Critical
    } else if score >= 5.0 {
        RiskLevel::High
    } else if score >= 3.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn coverage_risk(count: usize) -> f64 {
    match count {
        0 => 1.0,
        1 => 0.7,
        2 => 0.3,
        _ => 0.1,
    }
}

fn variability_risk(levels: &[u8]) -> f64 {
    match levels.len() {
        0 => 0.5,
        1 => 0.0,
        _ => {
            let std_dev = population_std_dev(levels);
            if std_dev > 1.5 {
                0.3
            } else if std_dev > 1.0 {
                0.15
            } else {
                0.0
            }
        }
    }
}
