use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a member within a crew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrewRole {
    Leader,
    Officer,
    Member,
}

impl CrewRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leader => "leader",
            Self::Officer => "officer",
            Self::Member => "member",
        }
    }

    /// Leaders and officers may invite and remove members
    pub fn can_manage_members(&self) -> bool {
        matches!(self, Self::Leader | Self::Officer)
    }

    /// Sort rank, leaders first
    pub fn rank(&self) -> u8 {
        match self {
            Self::Leader => 0,
            Self::Officer => 1,
            Self::Member => 2,
        }
    }
}

impl std::fmt::Display for CrewRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single member of a crew
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub user_id: String,
    pub display_name: String,
    pub role: CrewRole,
    /// XP this member has pooled into the crew
    #[serde(default)]
    pub xp_contributed: u64,
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub last_active_at: Option<DateTime<Utc>>,
}
