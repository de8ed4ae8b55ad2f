//! Read-only helpers over quest collections
//!
//! Urgency, priority ordering, filtering and dashboard aggregates. Every
//! time-dependent helper has an `_at` variant taking an explicit "now".

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, Quest, QuestStatus};
use crate::progression::days_between;

/// Progress percentage for a quest.
///
/// A manual value always wins and is clamped to 0-100. Otherwise progress
/// comes from milestones, and a quest without milestones sits at 0.
pub fn calculate_quest_progress(completed: u32, total: u32, manual_progress: Option<i32>) -> u8 {
    if let Some(manual) = manual_progress {
        return manual.clamp(0, 100) as u8;
    }
    if total == 0 {
        return 0;
    }
    let percent = (completed as f64 / total as f64 * 100.0).floor();
    percent.clamp(0.0, 100.0) as u8
}

pub fn is_quest_overdue(quest: &Quest) -> bool {
    is_quest_overdue_at(quest, Utc::now())
}

/// Past its deadline and not completed
pub fn is_quest_overdue_at(quest: &Quest, now: DateTime<Utc>) -> bool {
    match quest.deadline {
        Some(deadline) if !quest.is_completed() => now > deadline,
        _ => false,
    }
}

/// How pressing a quest is, most urgent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestUrgency {
    Overdue,
    High,
    Medium,
    Low,
}

impl QuestUrgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for QuestUrgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn get_quest_urgency(quest: &Quest) -> QuestUrgency {
    get_quest_urgency_at(quest, Utc::now())
}

/// Urgency from whole days until the deadline; no deadline is low
pub fn get_quest_urgency_at(quest: &Quest, now: DateTime<Utc>) -> QuestUrgency {
    let Some(deadline) = quest.deadline else {
        return QuestUrgency::Low;
    };

    match days_between(now, deadline) {
        days if days < 0 => QuestUrgency::Overdue,
        days if days <= 1 => QuestUrgency::High,
        days if days <= 7 => QuestUrgency::Medium,
        _ => QuestUrgency::Low,
    }
}

pub fn sort_quests_by_priority(quests: &mut [Quest]) {
    sort_quests_by_priority_at(quests, Utc::now());
}

/// Stable sort: most urgent first, then hardest, then least progressed
pub fn sort_quests_by_priority_at(quests: &mut [Quest], now: DateTime<Utc>) {
    quests.sort_by_key(|quest| {
        (
            get_quest_urgency_at(quest, now),
            Reverse(quest.difficulty),
            quest.progress_percent(),
        )
    });
}

/// Dashboard aggregates over a set of quests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestStatistics {
    pub total: usize,
    pub available: usize,
    pub active: usize,
    pub paused: usize,
    pub completed: usize,
    pub failed: usize,
    pub overdue: usize,
    /// Completed share of all quests, whole percent
    pub completion_rate: f64,
    /// Mean progress across all quests, whole percent
    pub average_progress: f64,
    /// XP from completed quests
    pub xp_earned: u64,
    /// XP still on offer from active quests
    pub xp_available: u64,
}

pub fn get_quest_statistics(quests: &[Quest]) -> QuestStatistics {
    get_quest_statistics_at(quests, Utc::now())
}

/// Aggregate counts and rates. An empty slice yields all zeros.
pub fn get_quest_statistics_at(quests: &[Quest], now: DateTime<Utc>) -> QuestStatistics {
    let mut stats = QuestStatistics {
        total: quests.len(),
        ..Default::default()
    };

    let mut progress_sum: u64 = 0;
    for quest in quests {
        match quest.status {
            QuestStatus::Available => stats.available += 1,
            QuestStatus::Active => {
                stats.active += 1;
                stats.xp_available += quest.xp_reward;
            }
            QuestStatus::Paused => stats.paused += 1,
            QuestStatus::Completed => {
                stats.completed += 1;
                stats.xp_earned += quest.xp_reward;
            }
            QuestStatus::Failed => stats.failed += 1,
        }
        if is_quest_overdue_at(quest, now) {
            stats.overdue += 1;
        }
        progress_sum += quest.progress_percent() as u64;
    }

    if stats.total > 0 {
        stats.completion_rate = (stats.completed as f64 / stats.total as f64 * 100.0).round();
        stats.average_progress = (progress_sum as f64 / stats.total as f64).round();
    }

    stats
}

/// Criteria for narrowing a quest list; empty fields match everything
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestFilter {
    #[serde(default)]
    pub status: Option<QuestStatus>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub is_daily: Option<bool>,
    /// Case-insensitive substring of the title or description
    #[serde(default)]
    pub search: Option<String>,
}

impl QuestFilter {
    pub fn matches(&self, quest: &Quest) -> bool {
        if self.status.is_some_and(|status| status != quest.status) {
            return false;
        }
        if let Some(category) = &self.category {
            if !quest.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if self.difficulty.is_some_and(|d| d != quest.difficulty) {
            return false;
        }
        if self.is_daily.is_some_and(|daily| daily != quest.is_daily) {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                let in_title = quest.title.to_lowercase().contains(&needle);
                let in_description = quest
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle));
                if !in_title && !in_description {
                    return false;
                }
            }
        }
        true
    }
}

pub fn filter_quests<'a>(quests: &'a [Quest], filter: &QuestFilter) -> Vec<&'a Quest> {
    quests.iter().filter(|q| filter.matches(q)).collect()
}

/// Unfinished quests whose deadline falls between `now` and `now + days`
pub fn quests_due_within(quests: &[Quest], days: i64, now: DateTime<Utc>) -> Vec<&Quest> {
    let horizon = now + Duration::days(days);
    quests
        .iter()
        .filter(|q| !q.status.is_terminal())
        .filter(|q| q.deadline.is_some_and(|d| d >= now && d <= horizon))
        .collect()
}

pub fn group_by_category(quests: &[Quest]) -> BTreeMap<String, Vec<&Quest>> {
    let mut groups: BTreeMap<String, Vec<&Quest>> = BTreeMap::new();
    for quest in quests {
        groups.entry(quest.category.clone()).or_default().push(quest);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 2, 8, 0, 0).unwrap()
    }

    fn quest(id: &str, difficulty: Difficulty) -> Quest {
        Quest::new(id, format!("Quest {}", id), "learning", difficulty)
    }

    fn due_in(mut q: Quest, hours: i64) -> Quest {
        q.deadline = Some(now() + Duration::hours(hours));
        q
    }

    #[test]
    fn test_quest_progress() {
        assert_eq!(calculate_quest_progress(1, 3, None), 33);
        assert_eq!(calculate_quest_progress(3, 3, None), 100);
        assert_eq!(calculate_quest_progress(0, 0, None), 0);
        assert_eq!(calculate_quest_progress(5, 0, None), 0);
        assert_eq!(calculate_quest_progress(1, 3, Some(70)), 70);
        assert_eq!(calculate_quest_progress(1, 3, Some(-5)), 0);
        assert_eq!(calculate_quest_progress(1, 3, Some(250)), 100);
    }

    #[test]
    fn test_overdue() {
        let late = due_in(quest("a", Difficulty::Easy), -1);
        assert!(is_quest_overdue_at(&late, now()));

        let mut done = late.clone();
        done.status = QuestStatus::Completed;
        assert!(!is_quest_overdue_at(&done, now()));

        assert!(!is_quest_overdue_at(&quest("b", Difficulty::Easy), now()));
        assert!(!is_quest_overdue_at(&due_in(quest("c", Difficulty::Easy), 2), now()));
    }

    #[test]
    fn test_urgency() {
        let at = |hours| get_quest_urgency_at(&due_in(quest("q", Difficulty::Easy), hours), now());
        assert_eq!(at(-1), QuestUrgency::Overdue);
        assert_eq!(at(3), QuestUrgency::High);
        assert_eq!(at(47), QuestUrgency::High);
        assert_eq!(at(72), QuestUrgency::Medium);
        assert_eq!(at(7 * 24), QuestUrgency::Medium);
        assert_eq!(at(8 * 24), QuestUrgency::Low);
        assert_eq!(get_quest_urgency_at(&quest("q", Difficulty::Easy), now()), QuestUrgency::Low);
    }

    #[test]
    fn test_priority_sort() {
        let mut partly_done = quest("partly", Difficulty::Hard);
        partly_done.progress = 60;
        let mut quests = vec![
            quest("easy", Difficulty::Easy),
            partly_done,
            due_in(quest("soon", Difficulty::Easy), 5),
            quest("hard", Difficulty::Hard),
            due_in(quest("late", Difficulty::Medium), -30),
        ];

        sort_quests_by_priority_at(&mut quests, now());
        let order: Vec<&str> = quests.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(order, ["late", "soon", "hard", "partly", "easy"]);
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let mut quests: Vec<Quest> = (0..6)
            .map(|i| quest(&i.to_string(), Difficulty::Medium))
            .collect();
        sort_quests_by_priority_at(&mut quests, now());
        let order: Vec<&str> = quests.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(order, ["0", "1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_statistics_empty() {
        let stats = get_quest_statistics_at(&[], now());
        assert_eq!(stats, QuestStatistics::default());
        assert!(stats.completion_rate.is_finite());
        assert!(stats.average_progress.is_finite());
    }

    #[test]
    fn test_statistics() {
        let mut done = quest("done", Difficulty::Hard);
        done.status = QuestStatus::Completed;
        done.progress = 100;
        done.xp_reward = 200;

        let mut active = due_in(quest("active", Difficulty::Medium), -2);
        active.progress = 50;
        active.xp_reward = 100;

        let mut paused = quest("paused", Difficulty::Easy);
        paused.status = QuestStatus::Paused;
        paused.xp_reward = 50;

        let stats = get_quest_statistics_at(&[done, active, paused], now());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.paused, 1);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_rate, 33.0);
        assert_eq!(stats.average_progress, 50.0);
        assert_eq!(stats.xp_earned, 200);
        assert_eq!(stats.xp_available, 100);
    }

    #[test]
    fn test_statistics_cap_progress_at_100() {
        let mut overfull = quest("overfull", Difficulty::Easy);
        overfull.progress = 250;
        let stats = get_quest_statistics_at(&[overfull], now());
        assert_eq!(stats.average_progress, 100.0);
    }

    #[test]
    fn test_filter() {
        let mut daily = quest("walk", Difficulty::Easy);
        daily.is_daily = true;
        daily.category = "fitness".to_string();
        daily.title = "Morning walk".to_string();
        let quests = vec![daily, quest("read", Difficulty::Medium)];

        let by_category = QuestFilter {
            category: Some("Fitness".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_quests(&quests, &by_category).len(), 1);

        let by_search = QuestFilter {
            search: Some("WALK".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_quests(&quests, &by_search)[0].id, "walk");

        let not_daily = QuestFilter {
            is_daily: Some(false),
            difficulty: Some(Difficulty::Medium),
            ..Default::default()
        };
        assert_eq!(filter_quests(&quests, &not_daily)[0].id, "read");

        assert_eq!(filter_quests(&quests, &QuestFilter::default()).len(), 2);
    }

    #[test]
    fn test_due_within_and_grouping() {
        let mut finished = due_in(quest("finished", Difficulty::Easy), 10);
        finished.status = QuestStatus::Completed;
        let quests = vec![
            due_in(quest("tomorrow", Difficulty::Easy), 20),
            due_in(quest("next_month", Difficulty::Easy), 24 * 30),
            due_in(quest("missed", Difficulty::Easy), -5),
            finished,
        ];

        let due: Vec<&str> = quests_due_within(&quests, 7, now())
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(due, ["tomorrow"]);

        let groups = group_by_category(&quests);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["learning"].len(), 4);
    }
}
