//! Progression engine: level curve, XP rewards and streaks
//!
//! Everything in here is pure. Callers gather inputs (difficulty, streak,
//! deadline, participants), compute an XP delta, add it to the stored
//! total, and derive the new level from that total.
//!
//! ```text
//! quest completed ──► generate_xp_breakdown ──► total XP delta
//!                                                   │
//!                      award_xp(stored_total, delta)◄┘
//!                                 │
//!                                 ▼
//!                      LevelInfo::for_xp(new_total)
//! ```

mod breakdown;
mod levels;
mod rewards;
mod streaks;
mod timing;

pub use breakdown::{generate_xp_breakdown, QuestCompletion, XpBreakdown, ACHIEVEMENT_BONUS_XP};
pub use levels::{
    award_xp, level_from_xp, level_progress, level_title, xp_for_level, xp_to_next_level,
    LevelInfo, XpAward,
};
pub use rewards::{
    base_xp, calculate_achievement_xp, calculate_collaboration_bonus, calculate_milestone_xp,
    calculate_secondary_goal_xp, calculate_streak_bonus, calculate_xp_reward,
    streak_bonus_fraction, XpMultipliers, DEFAULT_SECONDARY_GOAL_XP, MIN_QUEST_XP,
};
pub use streaks::{update_streak, StreakInfo};
pub use timing::{calculate_time_based_modifier, days_between, TimingModifier, TimingResult};
