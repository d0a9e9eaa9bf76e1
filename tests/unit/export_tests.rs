//! Export formatting over the public API.

use std::collections::HashMap;

use tg::analysis::{GapAnalyzer, SkillLookup};
use tg::export;
use tg::model::{Importance, SkillRequirement, TeamMember, TeamRole};

struct MapInventory(HashMap<(String, String), u8>);

impl SkillLookup for MapInventory {
    fn member_skill_level(&self, member: &str, skill: &str) -> Option<u8> {
        self.0
            .get(&(member.to_lowercase(), skill.to_string()))
            .copied()
    }
}

fn analyzed() -> tg::model::GapAnalysisResult {
    let members = vec![TeamMember::new("alice@example.com", TeamRole::Owner)];
    let inventory = MapInventory(
        [(("alice@example.com".to_string(), "react".to_string()), 2)]
            .into_iter()
            .collect(),
    );
    let requirements = vec![SkillRequirement::new("React", 5, Importance::Critical)];
    GapAnalyzer::new()
        .analyze(&requirements, &members, &inventory)
        .expect("analysis succeeds")
}

#[test]
fn json_uses_camel_case_wire_names() {
    let result = analyzed();
    let json: serde_json::Value =
        serde_json::from_str(&export::to_json_pretty(&result).expect("serialize"))
            .expect("valid JSON");

    assert!(json["analyzedAt"].is_string());
    assert!(json["overallRisk"]["readyToStart"].is_boolean());
    let react = &json["skills"]["React"];
    assert_eq!(react["coverage"]["busFactor"], 1);
    assert_eq!(react["weightedGap"], 9.0);
    assert_eq!(react["risk"]["factors"]["coverageRisk"], 0.7);
    assert_eq!(json["summary"]["criticalBottlenecks"], 1);
}

#[test]
fn csv_rows_have_a_column_per_header_field() {
    let result = analyzed();
    let csv = export::to_csv(&result);
    let mut lines = csv.lines();
    let header = lines.next().expect("header");
    let row = lines.next().expect("skill row");
    assert_eq!(header.split(',').count(), row.split(',').count());
}

#[test]
fn csv_ends_with_analysis_timestamp() {
    let result = analyzed();
    let csv = export::to_csv(&result);
    let last = csv.lines().last().expect("non-empty");
    assert!(last.starts_with("analyzedAt,"));
}
