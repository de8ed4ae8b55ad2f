//! Crew leveling and roster helpers
//!
//! Crews level on a flat 1000 XP per level. This is a separate model from
//! the individual level curve in `progression` and the two are kept apart
//! on purpose.

use std::cmp::Reverse;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::CrewMember;

pub const CREW_XP_PER_LEVEL: u64 = 1000;

/// Members count as active if seen within this many days
pub const ACTIVE_MEMBER_WINDOW_DAYS: i64 = 7;

pub fn crew_level(total_xp: u64) -> u32 {
    u32::try_from(total_xp / CREW_XP_PER_LEVEL)
        .unwrap_or(u32::MAX - 1)
        .saturating_add(1)
}

pub fn crew_xp_to_next_level(total_xp: u64) -> u64 {
    CREW_XP_PER_LEVEL - total_xp % CREW_XP_PER_LEVEL
}

/// Percentage through the current crew level (0-100)
pub fn crew_level_progress(total_xp: u64) -> f64 {
    (total_xp % CREW_XP_PER_LEVEL) as f64 / CREW_XP_PER_LEVEL as f64 * 100.0
}

pub fn is_member_active(member: &CrewMember) -> bool {
    is_member_active_at(member, Utc::now())
}

pub fn is_member_active_at(member: &CrewMember, now: DateTime<Utc>) -> bool {
    member
        .last_active_at
        .is_some_and(|seen| now - seen <= Duration::days(ACTIVE_MEMBER_WINDOW_DAYS))
}

/// Biggest contributors first; ties go to higher role, then earlier join
pub fn sort_members_by_contribution(members: &mut [CrewMember]) {
    members.sort_by_key(|m| (Reverse(m.xp_contributed), m.role.rank(), m.joined_at));
}

/// Roster overview for a crew dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrewSummary {
    pub member_count: usize,
    pub active_members: usize,
    pub total_xp: u64,
    pub average_contribution: f64,
    pub top_contributor: Option<String>,
    pub level: u32,
    pub xp_to_next_level: u64,
    pub level_progress: f64,
}

pub fn crew_summary(members: &[CrewMember]) -> CrewSummary {
    crew_summary_at(members, Utc::now())
}

/// Crew XP is the pooled contribution of all members
pub fn crew_summary_at(members: &[CrewMember], now: DateTime<Utc>) -> CrewSummary {
    let total_xp: u64 = members.iter().map(|m| m.xp_contributed).sum();
    let average_contribution = if members.is_empty() {
        0.0
    } else {
        total_xp as f64 / members.len() as f64
    };

    let top_contributor = members
        .iter()
        .filter(|m| m.xp_contributed > 0)
        .min_by_key(|m| (Reverse(m.xp_contributed), m.role.rank(), m.joined_at))
        .map(|m| m.display_name.clone());

    CrewSummary {
        member_count: members.len(),
        active_members: members.iter().filter(|m| is_member_active_at(m, now)).count(),
        total_xp,
        average_contribution,
        top_contributor,
        level: crew_level(total_xp),
        xp_to_next_level: crew_xp_to_next_level(total_xp),
        level_progress: crew_level_progress(total_xp),
    }
}
