//! Itemized XP for a completed quest

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rewards::{
    calculate_collaboration_bonus, calculate_milestone_xp, calculate_streak_bonus,
    calculate_xp_reward, XpMultipliers,
};
use super::timing::{calculate_time_based_modifier, TimingModifier};
use crate::domain::Difficulty;

/// Flat XP per achievement unlocked by the same completion
pub const ACHIEVEMENT_BONUS_XP: i64 = 100;

/// Everything known about a quest completion event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestCompletion {
    pub difficulty: Difficulty,
    #[serde(default)]
    pub total_milestones: u32,
    #[serde(default)]
    pub completed_milestones: u32,
    #[serde(default)]
    pub streak: u32,
    #[serde(default = "default_participants")]
    pub participant_count: u32,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    pub completed_at: DateTime<Utc>,
    /// Achievements unlocked by this completion
    #[serde(default)]
    pub new_achievements: u32,
}

fn default_participants() -> u32 {
    1
}

impl QuestCompletion {
    /// A solo completion with no milestones, streak or deadline
    pub fn new(difficulty: Difficulty, completed_at: DateTime<Utc>) -> Self {
        Self {
            difficulty,
            total_milestones: 0,
            completed_milestones: 0,
            streak: 0,
            participant_count: 1,
            deadline: None,
            completed_at,
            new_achievements: 0,
        }
    }
}

/// Itemized XP award.
///
/// `total` is always the sum of the other numeric fields. `timing` is a
/// delta against `base` and goes negative for late completions.
///
/// `streak` is the bonus on its own, `floor(base * fraction)`. It can be one
/// XP above `calculate_xp_reward(..) - base` for the same streak,
/// because the reward multiplies `base * (1 + fraction)` in floating point
/// before flooring (Hard at a 3-day streak: 30 here, 229 - 200 = 29 there).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpBreakdown {
    pub base: i64,
    pub difficulty: Difficulty,
    pub milestones: i64,
    pub streak: i64,
    pub collaboration: i64,
    pub timing: i64,
    pub timing_modifier: Option<TimingModifier>,
    pub achievements: i64,
    pub total: i64,
}

impl XpBreakdown {
    /// Sum of the components, which `total` must equal
    pub fn component_sum(&self) -> i64 {
        self.base + self.milestones + self.streak + self.collaboration + self.timing + self.achievements
    }
}

/// Break a quest completion down into its XP components
pub fn generate_xp_breakdown(completion: &QuestCompletion) -> XpBreakdown {
    // Breakdowns always value the quest as a one-off
    let base = calculate_xp_reward(completion.difficulty, false, &XpMultipliers::default());

    let completed = completion
        .completed_milestones
        .min(completion.total_milestones);
    let milestones: u64 = (0..completed)
        .map(|index| calculate_milestone_xp(base, index, completion.total_milestones))
        .sum();

    let streak = calculate_streak_bonus(base, completion.streak);
    let collaboration = calculate_collaboration_bonus(base, completion.participant_count);

    let (timing, timing_modifier) = match completion.deadline {
        Some(deadline) => {
            let result = calculate_time_based_modifier(deadline, completion.completed_at, base);
            (result.xp as i64 - base as i64, Some(result.modifier))
        }
        None => (0, None),
    };

    let achievements = completion.new_achievements as i64 * ACHIEVEMENT_BONUS_XP;

    let mut breakdown = XpBreakdown {
        base: base as i64,
        difficulty: completion.difficulty,
        milestones: milestones as i64,
        streak: streak as i64,
        collaboration: collaboration as i64,
        timing,
        timing_modifier,
        achievements,
        total: 0,
    };
    breakdown.total = breakdown.component_sum();

    tracing::debug!(
        "XP breakdown for {} quest: base={} milestones={} streak={} collab={} timing={} achievements={} total={}",
        completion.difficulty,
        breakdown.base,
        breakdown.milestones,
        breakdown.streak,
        breakdown.collaboration,
        breakdown.timing,
        breakdown.achievements,
        breakdown.total
    );

    breakdown
}
