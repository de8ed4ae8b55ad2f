//! CLI command implementations

pub mod breakdown;
pub mod crew;
pub mod goal;
pub mod init;
pub mod level;
pub mod quests;
pub mod reward;

use std::path::Path;

use anyhow::Result;
use lifequest::config::Config;

/// Load the config given on the command line, else the global one
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
}

/// Render `[#####.....]` for a 0-100 percentage
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
