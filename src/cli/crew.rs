//! Crew command implementation

use std::path::Path;

use anyhow::{bail, Context, Result};

use lifequest::config::Config;
use lifequest::stats::{
    crew_level, crew_level_progress, crew_summary, crew_xp_to_next_level,
    sort_members_by_contribution,
};
use lifequest::CrewMember;

use super::progress_bar;

/// Show crew level from a pooled XP total or a roster file
pub fn crew_command(config: &Config, total_xp: Option<u64>, members: Option<&Path>) -> Result<()> {
    let width = config.display.progress_bar_width;

    if let Some(path) = members {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read crew file: {}", path.display()))?;
        let mut roster: Vec<CrewMember> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse crew file: {}", path.display()))?;

        let summary = crew_summary(&roster);
        println!("Crew level {} ({} XP)", summary.level, summary.total_xp);
        println!("  {} {:.0}%", progress_bar(summary.level_progress, width), summary.level_progress);
        println!(
            "  Members: {} ({} active), avg contribution {:.0} XP",
            summary.member_count, summary.active_members, summary.average_contribution
        );

        sort_members_by_contribution(&mut roster);
        println!();
        for member in &roster {
            println!(
                "  {:<20} {:<8} {:>8} XP",
                member.display_name,
                member.role.as_str(),
                member.xp_contributed
            );
        }
        return Ok(());
    }

    let Some(total_xp) = total_xp else {
        bail!("Provide a crew XP total or --members <file>");
    };

    let progress = crew_level_progress(total_xp);
    println!("Crew level {}", crew_level(total_xp));
    println!("  {} {:.0}%", progress_bar(progress, width), progress);
    println!("  To next level: {} XP", crew_xp_to_next_level(total_xp));

    Ok(())
}
