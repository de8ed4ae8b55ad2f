//! Level command implementation

use anyhow::Result;

use lifequest::config::Config;
use lifequest::progression::LevelInfo;

use super::progress_bar;

/// Show the level badge for a cumulative XP total
pub fn level_command(config: &Config, total_xp: i64) -> Result<()> {
    let info = LevelInfo::for_xp(total_xp);

    println!("Level {} - {}", info.level, info.title);
    println!(
        "  {} {:.1}%",
        progress_bar(info.progress, config.display.progress_bar_width),
        info.progress
    );
    println!(
        "  XP: {} (level starts at {}, next at {})",
        info.total_xp, info.current_level_xp, info.next_level_xp
    );
    println!("  To next level: {} XP", info.xp_to_next);

    Ok(())
}
