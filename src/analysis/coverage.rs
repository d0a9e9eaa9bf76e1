//! Skill coverage resolution across a team roster.

use crate::model::{SkillCoverage, TeamMember, normalize_skill};

/// Lookup interface over the skill-inventory collaborator.
///
/// The `skill` argument is already normalized (trimmed, lowercased);
/// implementations must normalize their stored names the same way before
/// comparing. Member emails are matched case-insensitively.
pub trait SkillLookup {
    /// Recorded proficiency level of `member` for the normalized `skill`.
    fn member_skill_level(&self, member: &str, skill: &str) -> Option<u8>;
}

/// Resolve which members cover `skill` and at what levels.
///
/// Members are visited in roster order, which fixes the order of
/// `coverage.members` and `coverage.levels`. A member without a record for
/// the skill is a normal no-coverage outcome, not an error.
pub fn resolve_coverage<L: SkillLookup + ?Sized>(
    skill: &str,
    members: &[TeamMember],
    inventory: &L,
) -> SkillCoverage {
    let needle = normalize_skill(skill);
    let mut coverage = SkillCoverage::empty();
    for member in members {
        if let Some(level) = inventory.member_skill_level(&member.user, &needle) {
            coverage.members.push(member.user.clone());
            coverage.levels.push(level);
        }
    }
    coverage.count = coverage.members.len();
    coverage.bus_factor = coverage.count;
    coverage
}
