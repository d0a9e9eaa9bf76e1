//! Team roster types supplied by the membership and skill-inventory
//! collaborators. Read-only to the engine.

use serde::{Deserialize, Serialize};

/// Role of a member within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Owner,
    Member,
}

impl TeamRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }
}

/// A member of a team, identified by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Email address, unique per team (compared case-insensitively).
    pub user: String,
    pub role: TeamRole,
}

impl TeamMember {
    pub fn new(user: impl Into<String>, role: TeamRole) -> Self {
        Self {
            user: user.into(),
            role,
        }
    }
}

/// One recorded skill of a team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSkill {
    /// Skill name as recorded; matching is case-insensitive, trimmed.
    pub name: String,
    /// Recorded proficiency level, 1..=5.
    pub level: u8,
}
