//! Deadline adherence modifier

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// How a completion time compares to its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingModifier {
    /// More than a week ahead of the deadline
    Early,
    OnTime,
    /// Up to three days late
    Late,
    /// More than three days late
    Overdue,
}

impl TimingModifier {
    /// Classify by whole days between completion and deadline
    /// (positive = early)
    pub fn from_days_remaining(days: i64) -> Self {
        if days > 7 {
            Self::Early
        } else if days >= 0 {
            Self::OnTime
        } else if days >= -3 {
            Self::Late
        } else {
            Self::Overdue
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Early => 1.25,
            Self::OnTime => 1.0,
            Self::Late => 0.9,
            Self::Overdue => 0.75,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::OnTime => "on_time",
            Self::Late => "late",
            Self::Overdue => "overdue",
        }
    }
}

impl std::fmt::Display for TimingModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Timing-adjusted XP and the bucket that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingResult {
    pub xp: u64,
    pub modifier: TimingModifier,
}

/// Whole days from `from` to `to`, rounded toward negative infinity.
///
/// Twelve hours past a deadline counts as -1 day, twelve hours before it as 0.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MS_PER_DAY)
}

/// Scale `base_xp` by how early or late the quest was completed
pub fn calculate_time_based_modifier(
    deadline: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    base_xp: u64,
) -> TimingResult {
    let days_remaining = days_between(completed_at, deadline);
    let modifier = TimingModifier::from_days_remaining(days_remaining);
    TimingResult {
        xp: (base_xp as f64 * modifier.multiplier()).floor() as u64,
        modifier,
    }
}
