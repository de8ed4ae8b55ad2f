//! Streak tracking
//!
//! Consecutive-day completion counts that feed the streak bonuses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current and best streak for one habit or quest line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    pub current: u32,
    pub best: u32,
    pub last_activity_day: Option<NaiveDate>,
}

impl StreakInfo {
    /// Still alive if the last activity was today or yesterday
    pub fn is_active(&self, today: NaiveDate) -> bool {
        let Some(last_day) = self.last_activity_day else {
            return false;
        };
        (today - last_day).num_days() <= 1
    }

    /// Record activity on `today`, returning the new current streak
    pub fn record(&mut self, today: NaiveDate) -> u32 {
        self.current = update_streak(self.last_activity_day, today, self.current);
        self.best = self.best.max(self.current);
        // Never move the marker backwards on out-of-order input
        if self.last_activity_day.is_none_or(|last| today > last) {
            self.last_activity_day = Some(today);
        }
        self.current
    }
}

/// Next streak value after activity on `today`.
///
/// Same day keeps the streak, the following day extends it, and any gap
/// starts over at 1.
pub fn update_streak(last_activity_day: Option<NaiveDate>, today: NaiveDate, current: u32) -> u32 {
    let Some(last_day) = last_activity_day else {
        return 1;
    };

    match (today - last_day).num_days() {
        0 => current.max(1),
        1 => current.saturating_add(1),
        // Clock skew (activity "before" the last one) keeps the streak
        days if days < 0 => current.max(1),
        _ => 1,
    }
}
