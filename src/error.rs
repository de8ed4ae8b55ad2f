//! Error type for the progression engine
//!
//! The calculators themselves are total and never fail. Errors only arise
//! at the boundary, when raw caller input is turned into domain types.

use crate::domain::QuestStatus;

/// Errors raised while validating caller input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuestError {
    #[error("Invalid quest difficulty: {0} (expected 1-5)")]
    InvalidDifficulty(u8),

    #[error("Invalid secondary goal difficulty: {0} (expected 1-3)")]
    InvalidGoalDifficulty(u8),

    #[error("Unknown achievement rarity: {0}")]
    UnknownRarity(String),

    #[error("Unknown quest status: {0}")]
    UnknownStatus(String),

    #[error("Quest cannot move from {from} to {to}")]
    InvalidTransition { from: QuestStatus, to: QuestStatus },

    #[error("Invalid multiplier for {name}: {value} (must be finite and positive)")]
    InvalidMultiplier { name: String, value: f64 },

    #[error("Category multipliers {first} and {second} differ only in case")]
    DuplicateCategory { first: String, second: String },
}
