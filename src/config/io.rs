//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.lifequest/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lifequest")
    }

    /// Get the global config file path (~/.lifequest/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load the global config, falling back to defaults when none exists
    pub fn load() -> Result<Self> {
        let global_path = Self::global_config_path();
        if !global_path.exists() {
            tracing::debug!(
                "No global config at {}, using defaults",
                global_path.display()
            );
            return Ok(Self::default());
        }
        Self::from_file(&global_path)
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// An exclusive lock on a sidecar file serializes concurrent writers, and
    /// the content goes to a temp file that is renamed over the target.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        let temp_path = path.with_extension("toml.tmp");
        if let Err(err) = replace_via_temp(&temp_path, path, &content) {
            if let Err(cleanup) = std::fs::remove_file(&temp_path) {
                tracing::debug!("Temp config {} not removed: {}", temp_path.display(), cleanup);
            }
            return Err(err);
        }

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }
}

/// Write `content` to `temp_path`, fsync it, then rename it over `path`
fn replace_via_temp(temp_path: &Path, path: &Path, content: &str) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;
    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))
}
