use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Difficulty;
use crate::error::QuestError;

/// The lifecycle status of a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestStatus {
    /// Offered to the user but not yet accepted
    Available,
    /// Accepted and in progress
    Active,
    /// Temporarily on hold, can be resumed
    Paused,
    /// Finished successfully (terminal)
    Completed,
    /// Abandoned or missed (terminal)
    Failed,
}

impl QuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestStatus::Available => "available",
            QuestStatus::Active => "active",
            QuestStatus::Paused => "paused",
            QuestStatus::Completed => "completed",
            QuestStatus::Failed => "failed",
        }
    }

    /// Completed and failed quests never change status again
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuestStatus::Completed | QuestStatus::Failed)
    }

    pub fn can_transition_to(&self, next: QuestStatus) -> bool {
        use QuestStatus::*;
        matches!(
            (*self, next),
            (Available, Active)
                | (Active, Completed)
                | (Active, Failed)
                | (Active, Paused)
                | (Paused, Active)
        )
    }

    /// Validate a status change, returning the new status
    pub fn transition(self, next: QuestStatus) -> Result<QuestStatus, QuestError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            tracing::debug!("Rejected quest transition {} -> {}", self, next);
            Err(QuestError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl FromStr for QuestStatus {
    type Err = QuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(QuestStatus::Available),
            "active" => Ok(QuestStatus::Active),
            "paused" => Ok(QuestStatus::Paused),
            "completed" => Ok(QuestStatus::Completed),
            "failed" => Ok(QuestStatus::Failed),
            _ => Err(QuestError::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a quest as read by the statistics helpers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    /// Percentage, 0-100. Out-of-range input is clamped on load.
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: u8,
    #[serde(default)]
    pub completed_milestones: u32,
    #[serde(default)]
    pub total_milestones: u32,
    pub status: QuestStatus,
    #[serde(default)]
    pub is_daily: bool,
    /// XP granted on completion
    #[serde(default)]
    pub xp_reward: u64,
}

impl Quest {
    /// Create an active quest with no deadline or milestones
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            category: category.into(),
            difficulty,
            deadline: None,
            progress: 0,
            completed_milestones: 0,
            total_milestones: 0,
            status: QuestStatus::Active,
            is_daily: false,
            xp_reward: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == QuestStatus::Completed
    }

    /// Progress capped at 100, for quests built in code
    pub fn progress_percent(&self) -> u8 {
        self.progress.min(100)
    }
}

fn deserialize_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, 100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_transitions() {
        assert!(QuestStatus::Available.can_transition_to(QuestStatus::Active));
        assert!(QuestStatus::Active.can_transition_to(QuestStatus::Paused));
        assert!(QuestStatus::Paused.can_transition_to(QuestStatus::Active));
        assert!(QuestStatus::Active.can_transition_to(QuestStatus::Completed));
        assert!(QuestStatus::Active.can_transition_to(QuestStatus::Failed));
    }

    #[test]
    fn test_terminal_states_are_final() {
        for next in [
            QuestStatus::Available,
            QuestStatus::Active,
            QuestStatus::Paused,
            QuestStatus::Failed,
        ] {
            assert!(!QuestStatus::Completed.can_transition_to(next));
        }
        assert!(QuestStatus::Failed.is_terminal());
        assert_eq!(
            QuestStatus::Failed.transition(QuestStatus::Active),
            Err(QuestError::InvalidTransition {
                from: QuestStatus::Failed,
                to: QuestStatus::Active,
            })
        );
    }

    #[test]
    fn test_paused_cannot_complete_directly() {
        assert!(QuestStatus::Paused.transition(QuestStatus::Completed).is_err());
    }

    #[test]
    fn test_quest_deserialize_defaults() {
        let json = r#"{
            "id": "q1",
            "title": "Run a 10k",
            "category": "fitness",
            "difficulty": 3,
            "status": "active"
        }"#;
        let quest: Quest = serde_json::from_str(json).unwrap();
        assert_eq!(quest.difficulty, Difficulty::Hard);
        assert_eq!(quest.deadline, None);
        assert_eq!(quest.progress, 0);
        assert!(!quest.is_daily);
    }

    #[test]
    fn test_progress_clamped_on_load() {
        let json = r#"[
            {"id": "a", "title": "A", "category": "x", "difficulty": 1, "status": "active", "progress": 250},
            {"id": "b", "title": "B", "category": "x", "difficulty": 1, "status": "active", "progress": -20}
        ]"#;
        let quests: Vec<Quest> = serde_json::from_str(json).unwrap();
        assert_eq!(quests[0].progress, 100);
        assert_eq!(quests[1].progress, 0);
    }

    #[test]
    fn test_progress_percent_caps_in_code() {
        let mut quest = Quest::new("q", "Q", "x", Difficulty::Easy);
        quest.progress = 180;
        assert_eq!(quest.progress_percent(), 100);
    }
}
