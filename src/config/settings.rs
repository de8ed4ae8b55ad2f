//! Settings tables

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::progression::DEFAULT_SECONDARY_GOAL_XP;

/// Reward tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardSettings {
    /// Multiplier per quest category (e.g. `fitness = 1.2`).
    /// Categories not listed get no multiplier.
    #[serde(default)]
    pub category_multipliers: HashMap<String, f64>,

    /// Base XP of a secondary goal
    #[serde(default = "default_secondary_goal_xp")]
    pub default_secondary_goal_xp: u64,
}

fn default_secondary_goal_xp() -> u64 {
    DEFAULT_SECONDARY_GOAL_XP
}

impl Default for RewardSettings {
    fn default() -> Self {
        Self {
            category_multipliers: HashMap::new(),
            default_secondary_goal_xp: default_secondary_goal_xp(),
        }
    }
}

impl RewardSettings {
    /// Multiplier for a category, matched case-insensitively.
    /// `Config::validate` guarantees at most one key matches.
    pub fn category_multiplier(&self, category: &str) -> Option<f64> {
        self.category_multipliers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(category))
            .map(|(_, multiplier)| *multiplier)
    }
}

/// Terminal output options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Width of rendered progress bars, in characters
    #[serde(default = "default_progress_bar_width")]
    pub progress_bar_width: usize,
}

fn default_progress_bar_width() -> usize {
    20
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            progress_bar_width: default_progress_bar_width(),
        }
    }
}
