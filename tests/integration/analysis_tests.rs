//! End-to-end engine scenarios over the library API.

use tg::analysis::GapAnalyzer;
use tg::model::{Importance, RiskLevel, SkillRequirement};

use super::fixture::{MapInventory, roster};

fn req(skill: &str, level: u8, importance: Importance) -> SkillRequirement {
    SkillRequirement::new(skill, level, importance)
}

#[test]
fn deep_gap_on_critical_skill_scores_critical() {
    let members = roster(&["solo@example.com"]);
    let inventory = MapInventory::new(&[("solo@example.com", "React", 2)]);

    let result = GapAnalyzer::new()
        .analyze(&[req("React", 5, Importance::Critical)], &members, &inventory)
        .expect("analysis succeeds");

    let react = &result.skills["React"];
    assert_eq!(react.gap, 3.0);
    assert_eq!(react.risk.factors.gap_risk, 0.6);
    assert_eq!(react.risk.factors.coverage_risk, 0.7);
    assert!(react.risk.score >= 8.0);
    assert_eq!(react.risk.level, RiskLevel::Critical);
    assert!(react.risk.bottleneck);
}

#[test]
fn bus_factor_risk_persists_with_zero_gap() {
    let members = roster(&["solo@example.com"]);
    let inventory = MapInventory::new(&[("solo@example.com", "Kubernetes", 4)]);

    let result = GapAnalyzer::new()
        .analyze(
            &[req("Kubernetes", 4, Importance::Critical)],
            &members,
            &inventory,
        )
        .expect("analysis succeeds");

    let kubernetes = &result.skills["Kubernetes"];
    assert_eq!(kubernetes.gap, 0.0);
    assert_eq!(kubernetes.coverage.count, 1);
    assert!(kubernetes.risk.score > 0.0);
    assert!(kubernetes.risk.bottleneck);
    assert_eq!(result.summary.critical_bottlenecks, 1);
}

#[test]
fn shared_coverage_lowers_coverage_risk() {
    let members = roster(&["a@example.com", "b@example.com"]);
    let inventory = MapInventory::new(&[
        ("a@example.com", "Python", 4),
        ("b@example.com", "Python", 4),
    ]);

    let result = GapAnalyzer::new()
        .analyze(&[req("Python", 4, Importance::Medium)], &members, &inventory)
        .expect("analysis succeeds");

    let python = &result.skills["Python"];
    assert_eq!(python.coverage.count, 2);
    assert!(python.risk.factors.coverage_risk <= 0.3);
    assert!(!python.risk.bottleneck);
}

#[test]
fn missing_nice_to_have_skill_is_not_a_bottleneck() {
    let members = roster(&["a@example.com"]);
    let inventory = MapInventory::new(&[]);

    let result = GapAnalyzer::new()
        .analyze(
            &[req("Photoshop", 3, Importance::NiceToHave)],
            &members,
            &inventory,
        )
        .expect("analysis succeeds");

    let photoshop = &result.skills["Photoshop"];
    assert_eq!(photoshop.coverage.count, 0);
    assert_eq!(photoshop.average, 0.0);
    assert_eq!(photoshop.gap, 3.0);
    assert!(!photoshop.risk.bottleneck);
    assert_eq!(result.summary.skills_missing_completely, 1);
}

#[test]
fn mixed_importance_overall_matches_weighted_mean() {
    let members = roster(&["alice@example.com", "bob@example.com"]);
    let inventory = MapInventory::new(&[
        ("alice@example.com", "JavaScript", 5),
        ("alice@example.com", "CSS", 3),
    ]);
    let requirements = vec![
        req("JavaScript", 5, Importance::Critical),
        req("CSS", 3, Importance::NiceToHave),
        req("Docker", 4, Importance::Medium),
    ];

    let result = GapAnalyzer::new()
        .analyze(&requirements, &members, &inventory)
        .expect("analysis succeeds");

    // Recompute the documented weighted mean from the per-skill scores.
    let weighted: f64 = requirements
        .iter()
        .map(|r| result.skills[&r.skill].risk.score * r.importance.multiplier())
        .sum();
    let weights: f64 = requirements.iter().map(|r| r.importance.multiplier()).sum();
    let expected = ((weighted / weights) * 10.0).round() / 10.0;

    assert_eq!(result.overall_risk.score, expected);
    assert_eq!(result.overall_risk.score, 7.8);
    assert_eq!(result.summary.total_skills, 3);
    assert_eq!(result.summary.skills_ready, 2);
    assert_eq!(result.summary.skills_with_gaps, 1);
    assert_eq!(result.summary.high_risk_skills, 2);
    assert_eq!(result.summary.low_risk_skills, 1);
}

#[test]
fn high_risk_project_is_not_ready() {
    let members = roster(&["a@example.com"]);
    let inventory = MapInventory::new(&[]);

    let result = GapAnalyzer::new()
        .analyze(
            &[
                req("Rust", 5, Importance::Critical),
                req("WebAssembly", 4, Importance::Critical),
            ],
            &members,
            &inventory,
        )
        .expect("analysis succeeds");

    assert!(result.overall_risk.score >= 5.0);
    assert!(!result.overall_risk.ready_to_start);
}

#[test]
fn averages_and_weighted_gaps_round_to_two_decimals() {
    let members = roster(&["a@example.com", "b@example.com", "c@example.com"]);
    let inventory = MapInventory::new(&[
        ("a@example.com", "Go", 2),
        ("b@example.com", "Go", 3),
        ("c@example.com", "Go", 5),
    ]);

    let result = GapAnalyzer::new()
        .analyze(&[req("Go", 5, Importance::Critical)], &members, &inventory)
        .expect("analysis succeeds");

    // Average 10/3 and gap 5/3 both surface rounded to 2 decimals.
    let go = &result.skills["Go"];
    assert_eq!(go.average, 3.33);
    assert_eq!(go.gap, 1.67);
    assert_eq!(go.weighted_gap, 5.0);
}

#[test]
fn repeated_runs_are_identical_except_timestamp() {
    let members = roster(&["alice@example.com", "bob@example.com"]);
    let inventory = MapInventory::new(&[
        ("alice@example.com", "JavaScript", 5),
        ("bob@example.com", "JavaScript", 2),
    ]);
    let requirements = vec![
        req("JavaScript", 4, Importance::High),
        req("Terraform", 3, Importance::Medium),
    ];

    let analyzer = GapAnalyzer::new();
    let first = analyzer
        .analyze(&requirements, &members, &inventory)
        .expect("first run");
    let second = analyzer
        .analyze(&requirements, &members, &inventory)
        .expect("second run");

    assert_eq!(first.skills, second.skills);
    assert_eq!(first.overall_risk, second.overall_risk);
    assert_eq!(first.summary, second.summary);
}
