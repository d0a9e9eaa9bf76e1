//! Requirement validation over the public API.

use tg::model::Importance;
use tg::validation::{RawRequirement, validate_project, validate_requirements};

#[test]
fn defaults_importance_to_medium() {
    let reqs = validate_requirements(&[RawRequirement::new("React", 3.0, None)])
        .expect("valid requirement");
    assert_eq!(reqs[0].importance, Importance::Medium);
}

#[test]
fn trims_skill_names() {
    let reqs = validate_requirements(&[RawRequirement::new("  Node.js ", 4.0, Some("high"))])
        .expect("valid requirement");
    assert_eq!(reqs[0].skill, "Node.js");
}

#[test]
fn collects_every_error_in_one_pass() {
    let raw = vec![
        RawRequirement::new("", 0.0, Some("whatever")),
        RawRequirement::new("ok", 3.0, None),
    ];
    let errors = validate_requirements(&raw).expect_err("first entry is broken");
    assert!(errors.get("requirements[0].skill").is_some());
    assert!(errors.get("requirements[0].level").is_some());
    assert!(errors.get("requirements[0].importance").is_some());
    assert_eq!(errors.len(), 3);
}

#[test]
fn fractional_levels_are_rejected() {
    let errors =
        validate_requirements(&[RawRequirement::new("React", 3.5, None)]).expect_err("3.5");
    assert_eq!(
        errors.get("requirements[0].level"),
        Some("level must be an integer 1..5")
    );
}

#[test]
fn display_flattens_field_paths() {
    let errors = validate_requirements(&[]).expect_err("empty");
    let rendered = errors.to_string();
    assert!(rendered.contains("requirements:"));
    assert!(rendered.contains("non-empty array"));
}

#[test]
fn project_validation_covers_name_and_requirements() {
    let errors = validate_project("", &[]).expect_err("both broken");
    assert!(errors.get("name").is_some());
    assert!(errors.get("requirements").is_some());
}
