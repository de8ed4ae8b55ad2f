//! XP reward formulas
//!
//! Every formula works in f64 and floors back to whole XP. Quest rewards
//! floor after each multiplier, so multipliers are always applied in the
//! same order: category, then streak, then collaboration.

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, GoalDifficulty, Rarity};

/// Smallest reward a completed quest can grant
pub const MIN_QUEST_XP: u64 = 10;

/// Daily quests recur, so each completion is worth 40% of a one-off quest
pub const DAILY_QUEST_FACTOR: f64 = 0.4;

/// Streak bonus per consecutive day
pub const STREAK_BONUS_PER_DAY: f64 = 0.05;
pub const MAX_STREAK_BONUS: f64 = 0.5;

/// Collaboration bonus per additional participant
pub const COLLABORATION_BONUS_PER_MEMBER: f64 = 0.05;
pub const MAX_COLLABORATION_BONUS: f64 = 0.5;

/// Base XP of a secondary goal when the caller supplies none
pub const DEFAULT_SECONDARY_GOAL_XP: u64 = 25;

/// Optional multipliers for a quest reward. Absent fields are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct XpMultipliers {
    /// Category weighting, e.g. 1.2 for a boosted category
    #[serde(default)]
    pub category: Option<f64>,
    /// Current streak length in days
    #[serde(default)]
    pub streak: Option<u32>,
    /// Collaboration multiplier for shared quests
    #[serde(default)]
    pub collaboration: Option<f64>,
}

impl XpMultipliers {
    pub fn with_category(mut self, multiplier: f64) -> Self {
        self.category = Some(multiplier);
        self
    }

    pub fn with_streak(mut self, streak: u32) -> Self {
        self.streak = Some(streak);
        self
    }

    pub fn with_collaboration(mut self, multiplier: f64) -> Self {
        self.collaboration = Some(multiplier);
        self
    }
}

/// Unmodified XP for a quest of the given difficulty
pub fn base_xp(difficulty: Difficulty) -> u64 {
    match difficulty {
        Difficulty::Easy => 50,
        Difficulty::Medium => 100,
        Difficulty::Hard => 200,
        Difficulty::Expert => 400,
        Difficulty::Legendary => 800,
    }
}

/// Fraction added for a streak: 5% per day, capped at 50%.
/// Streaks of 0 or 1 day earn nothing.
pub fn streak_bonus_fraction(streak: u32) -> f64 {
    if streak <= 1 {
        return 0.0;
    }
    (streak as f64 * STREAK_BONUS_PER_DAY).min(MAX_STREAK_BONUS)
}

/// XP granted for completing a quest
pub fn calculate_xp_reward(
    difficulty: Difficulty,
    is_daily: bool,
    multipliers: &XpMultipliers,
) -> u64 {
    let mut xp = base_xp(difficulty) as f64;

    if is_daily {
        xp = (xp * DAILY_QUEST_FACTOR).floor();
    }

    if let Some(category) = multipliers.category {
        xp = (xp * category).floor();
    }

    if let Some(streak) = multipliers.streak {
        if streak > 1 {
            xp = (xp * (1.0 + streak_bonus_fraction(streak))).floor();
        }
    }

    if let Some(collaboration) = multipliers.collaboration {
        xp = (xp * collaboration).floor();
    }

    // NaN and negative products saturate to 0 here
    (xp.floor() as u64).max(MIN_QUEST_XP)
}

/// Streak bonus in whole XP on top of `base_xp`
pub fn calculate_streak_bonus(base_xp: u64, streak: u32) -> u64 {
    (base_xp as f64 * streak_bonus_fraction(streak)).floor() as u64
}

/// XP for a recurring secondary goal (daily habit).
///
/// Streak thresholds compound: a 100-day streak gets the 7-, 30- and
/// 100-day multipliers all applied.
pub fn calculate_secondary_goal_xp(base_xp: u64, streak: u32, difficulty: GoalDifficulty) -> u64 {
    let difficulty_factor = match difficulty {
        GoalDifficulty::Easy => 1.0,
        GoalDifficulty::Medium => 1.3,
        GoalDifficulty::Hard => 1.6,
    };

    let mut xp = base_xp as f64 * difficulty_factor;

    // TODO: confirm with product whether these thresholds should stack or
    // only the highest one should apply
    if streak >= 7 {
        xp *= 1.2;
    }
    if streak >= 30 {
        xp *= 1.4;
    }
    if streak >= 100 {
        xp *= 1.6;
    }

    xp.floor() as u64
}

/// Fixed XP for unlocking an achievement of the given rarity
pub fn calculate_achievement_xp(rarity: Rarity) -> u64 {
    match rarity {
        Rarity::Common => 100,
        Rarity::Uncommon => 250,
        Rarity::Rare => 500,
        Rarity::Epic => 1000,
        Rarity::Legendary => 2500,
    }
}

/// XP for completing milestone `milestone_index` (0-based) of a quest.
/// The final milestone pays 25% of the quest reward, the others 10%.
pub fn calculate_milestone_xp(quest_xp_reward: u64, milestone_index: u32, total_milestones: u32) -> u64 {
    let is_final = total_milestones > 0 && milestone_index == total_milestones - 1;
    let share = if is_final { 0.25 } else { 0.1 };
    (quest_xp_reward as f64 * share).floor() as u64
}

/// Bonus for shared quests: 5% per extra participant, capped at 50%.
/// Solo quests (one participant or fewer) earn nothing.
pub fn calculate_collaboration_bonus(base_xp: u64, participant_count: u32) -> u64 {
    if participant_count <= 1 {
        return 0;
    }
    let fraction =
        ((participant_count - 1) as f64 * COLLABORATION_BONUS_PER_MEMBER).min(MAX_COLLABORATION_BONUS);
    (base_xp as f64 * fraction).floor() as u64
}
