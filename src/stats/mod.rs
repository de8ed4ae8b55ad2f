//! Derived statistics for dashboards
//!
//! Read-only aggregations over quests and crew rosters. Nothing here
//! mutates its input or performs I/O.

mod crew;
mod quests;

pub use crew::{
    crew_level, crew_level_progress, crew_summary, crew_summary_at, crew_xp_to_next_level,
    is_member_active, is_member_active_at, sort_members_by_contribution, CrewSummary,
    ACTIVE_MEMBER_WINDOW_DAYS, CREW_XP_PER_LEVEL,
};
pub use quests::{
    calculate_quest_progress, filter_quests, get_quest_statistics, get_quest_statistics_at,
    get_quest_urgency, get_quest_urgency_at, group_by_category, is_quest_overdue,
    is_quest_overdue_at, quests_due_within, sort_quests_by_priority, sort_quests_by_priority_at,
    QuestFilter, QuestStatistics, QuestUrgency,
};
