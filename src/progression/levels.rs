//! Level curve
//!
//! Converts between cumulative XP and level number. The curve grows
//! slightly faster than quadratic:
//!
//! ```text
//! xp_for_level(L) = floor(100 * L^2.1 * ln(L + 1) * 1.5)    (L > 1)
//! xp_for_level(1) = 0
//! ```
//!
//! Levels are unbounded. `level_from_xp` doubles its search window until it
//! brackets the target, so very large totals are never truncated.

use serde::Serialize;

/// Initial upper bound for the level search; covers every realistic total
const INITIAL_SEARCH_BOUND: u32 = 100;

/// Cumulative XP needed to reach `level`
pub fn xp_for_level(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    let l = level as f64;
    // `as` saturates, so astronomically high levels clamp to u64::MAX
    (100.0 * l.powf(2.1) * (l + 1.0).ln() * 1.5).floor() as u64
}

/// Level for a cumulative XP total. Negative totals map to level 1.
pub fn level_from_xp(total_xp: i64) -> u32 {
    if total_xp < 0 {
        return 1;
    }
    let xp = total_xp as u64;

    // Invariant: xp_for_level(low) <= xp < xp_for_level(high)
    let mut low: u32 = 1;
    let mut high: u32 = INITIAL_SEARCH_BOUND;
    while xp_for_level(high) <= xp {
        if high == u32::MAX {
            return high;
        }
        low = high;
        high = high.saturating_mul(2);
    }

    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if xp_for_level(mid) <= xp {
            low = mid;
        } else {
            high = mid;
        }
    }
    low
}

/// XP still missing before `current_level + 1`, never negative
pub fn xp_to_next_level(current_xp: i64, current_level: u32) -> u64 {
    let next = xp_for_level(current_level.saturating_add(1)) as i128;
    (next - current_xp as i128).max(0) as u64
}

/// How far through the current level band `current_xp` is, as a
/// percentage clamped to 0-100
pub fn level_progress(current_xp: i64, current_level: u32) -> f64 {
    let floor = xp_for_level(current_level) as i128;
    let next = xp_for_level(current_level.saturating_add(1)) as i128;
    let band = next - floor;
    if band <= 0 {
        return 100.0;
    }

    let into_level = current_xp as i128 - floor;
    let percent = into_level as f64 / band as f64 * 100.0;
    percent.clamp(0.0, 100.0)
}

/// Rank name shown next to the level badge
pub fn level_title(level: u32) -> &'static str {
    match level {
        0..=4 => "Novice",
        5..=9 => "Apprentice",
        10..=19 => "Adventurer",
        20..=29 => "Veteran",
        30..=49 => "Hero",
        50..=74 => "Champion",
        75..=99 => "Mythic",
        _ => "Legend",
    }
}

/// Everything the UI needs to render a level badge, derived from total XP
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelInfo {
    pub total_xp: i64,
    pub level: u32,
    pub title: &'static str,
    /// Cumulative XP at which the current level started
    pub current_level_xp: u64,
    /// Cumulative XP at which the next level starts
    pub next_level_xp: u64,
    pub xp_to_next: u64,
    /// Percentage through the current level (0-100)
    pub progress: f64,
}

impl LevelInfo {
    pub fn for_xp(total_xp: i64) -> Self {
        let level = level_from_xp(total_xp);
        Self {
            total_xp,
            level,
            title: level_title(level),
            current_level_xp: xp_for_level(level),
            next_level_xp: xp_for_level(level.saturating_add(1)),
            xp_to_next: xp_to_next_level(total_xp, level),
            progress: level_progress(total_xp, level),
        }
    }
}

/// Result of adding XP to a stored total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XpAward {
    pub previous_total: i64,
    pub new_total: i64,
    pub old_level: u32,
    pub new_level: u32,
}

impl XpAward {
    pub fn leveled_up(&self) -> bool {
        self.new_level > self.old_level
    }

    pub fn levels_gained(&self) -> u32 {
        self.new_level.saturating_sub(self.old_level)
    }
}

/// Add `amount` to `total_xp` and re-derive the level from the new total.
///
/// The level is never carried forward from stored state; it is always
/// recomputed from the total so the two cannot drift apart.
pub fn award_xp(total_xp: i64, amount: u64) -> XpAward {
    let new_total = total_xp.saturating_add(i64::try_from(amount).unwrap_or(i64::MAX));
    let award = XpAward {
        previous_total: total_xp,
        new_total,
        old_level: level_from_xp(total_xp),
        new_level: level_from_xp(new_total),
    };

    if award.leveled_up() {
        tracing::info!(
            "Level up: {} -> {} ({} XP total)",
            award.old_level,
            award.new_level,
            new_total
        );
    }
    award
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_for_level_fixtures() {
        assert_eq!(xp_for_level(0), 0);
        assert_eq!(xp_for_level(1), 0);
        // floor(100 * 2^2.1 * ln(3) * 1.5)
        assert_eq!(xp_for_level(2), 706);
        assert_eq!(xp_for_level(3), 2088);
        assert_eq!(xp_for_level(10), 45281);
    }

    #[test]
    fn test_curve_strictly_increasing() {
        for level in 1..10_000 {
            assert!(
                xp_for_level(level + 1) > xp_for_level(level),
                "curve not increasing at level {}",
                level
            );
        }
    }

    #[test]
    fn test_level_from_xp_round_trip() {
        for level in 1..=50 {
            assert_eq!(level_from_xp(xp_for_level(level) as i64), level);
        }
    }

    #[test]
    fn test_level_from_xp_boundaries() {
        assert_eq!(level_from_xp(0), 1);
        assert_eq!(level_from_xp(-100), 1);
        assert_eq!(level_from_xp(705), 1);
        assert_eq!(level_from_xp(706), 2);
        assert_eq!(level_from_xp(2087), 2);
        assert_eq!(level_from_xp(2088), 3);
    }

    #[test]
    fn test_level_from_xp_not_capped_at_100() {
        for level in [99, 100, 101, 150, 500, 5000] {
            assert_eq!(level_from_xp(xp_for_level(level) as i64), level);
            assert_eq!(level_from_xp(xp_for_level(level) as i64 - 1), level - 1);
        }
    }

    #[test]
    fn test_level_from_xp_huge_total() {
        let level = level_from_xp(i64::MAX);
        assert!(xp_for_level(level) <= i64::MAX as u64);
        assert!(xp_for_level(level + 1) > i64::MAX as u64);
    }

    #[test]
    fn test_xp_to_next_level() {
        assert_eq!(xp_to_next_level(0, 1), 706);
        assert_eq!(xp_to_next_level(700, 1), 6);
        // Stale level input never produces a negative answer
        assert_eq!(xp_to_next_level(5000, 1), 0);
    }

    #[test]
    fn test_level_progress() {
        assert_eq!(level_progress(0, 1), 0.0);
        // Level 2 band is 706..2088 (1382 XP wide)
        assert!((level_progress(706 + 691, 2) - 50.0).abs() < 1e-9);
        assert_eq!(level_progress(-50, 1), 0.0);
        assert_eq!(level_progress(10_000, 1), 100.0);
    }

    #[test]
    fn test_level_info() {
        let info = LevelInfo::for_xp(1000);
        assert_eq!(info.level, 2);
        assert_eq!(info.title, "Novice");
        assert_eq!(info.current_level_xp, 706);
        assert_eq!(info.next_level_xp, 2088);
        assert_eq!(info.xp_to_next, 1088);
    }

    #[test]
    fn test_award_xp_level_up() {
        let award = award_xp(700, 1400);
        assert_eq!(award.new_total, 2100);
        assert_eq!(award.old_level, 1);
        assert_eq!(award.new_level, 3);
        assert!(award.leveled_up());
        assert_eq!(award.levels_gained(), 2);

        let small = award_xp(706, 10);
        assert!(!small.leveled_up());
        assert_eq!(small.levels_gained(), 0);
    }

    #[test]
    fn test_level_title() {
        assert_eq!(level_title(1), "Novice");
        assert_eq!(level_title(10), "Adventurer");
        assert_eq!(level_title(250), "Legend");
    }
}
