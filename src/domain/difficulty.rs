use serde::{Deserialize, Serialize};

use crate::error::QuestError;

/// Quest difficulty tier (stored as 1-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
    Expert = 4,
    Legendary = 5,
}

impl Difficulty {
    /// Numeric tier, 1 through 5
    pub fn tier(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
            Self::Legendary => "Legendary",
        }
    }

    pub fn all() -> &'static [Difficulty] {
        &[
            Self::Easy,
            Self::Medium,
            Self::Hard,
            Self::Expert,
            Self::Legendary,
        ]
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = QuestError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            4 => Ok(Self::Expert),
            5 => Ok(Self::Legendary),
            other => Err(QuestError::InvalidDifficulty(other)),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.tier()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Difficulty of a recurring secondary goal (stored as 1-3)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GoalDifficulty {
    #[default]
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl GoalDifficulty {
    pub fn tier(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for GoalDifficulty {
    type Error = QuestError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            other => Err(QuestError::InvalidGoalDifficulty(other)),
        }
    }
}

impl From<GoalDifficulty> for u8 {
    fn from(value: GoalDifficulty) -> Self {
        value.tier()
    }
}
