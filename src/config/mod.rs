//! Configuration loading and management

mod io;
mod settings;

pub use settings::{DisplaySettings, RewardSettings};

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::QuestError;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Reward tuning
    #[serde(default)]
    pub rewards: RewardSettings,

    /// Output settings for the CLI
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for: .lifequest/config.toml (preferred) or lifequest.toml
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let nested_path = dir.join(".lifequest/config.toml");
        if nested_path.exists() {
            return Self::from_file(&nested_path);
        }

        let flat_path = dir.join("lifequest.toml");
        if flat_path.exists() {
            return Self::from_file(&flat_path);
        }

        tracing::debug!("No config found in {}, using defaults", dir.display());
        Ok(Self::default())
    }

    /// Config with a few example category weights filled in
    pub fn with_defaults() -> Self {
        let mut config = Self::default();
        for (category, multiplier) in [("health", 1.1), ("learning", 1.2), ("chores", 0.9)] {
            config
                .rewards
                .category_multipliers
                .insert(category.to_string(), multiplier);
        }
        config
    }

    /// Reject multipliers that would make rewards meaningless, and category
    /// names that collide under case-insensitive lookup
    pub fn validate(&self) -> Result<(), QuestError> {
        let mut names: Vec<&String> = self.rewards.category_multipliers.keys().collect();
        names.sort();

        let mut seen: HashMap<String, &String> = HashMap::new();
        for name in names {
            let value = self.rewards.category_multipliers[name];
            if !value.is_finite() || value <= 0.0 {
                return Err(QuestError::InvalidMultiplier {
                    name: name.clone(),
                    value,
                });
            }
            if let Some(first) = seen.insert(name.to_lowercase(), name) {
                return Err(QuestError::DuplicateCategory {
                    first: first.clone(),
                    second: name.clone(),
                });
            }
        }
        Ok(())
    }
}
