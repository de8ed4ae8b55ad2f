//! Quest statistics command implementation

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use lifequest::stats::{get_quest_statistics_at, get_quest_urgency_at, sort_quests_by_priority_at};
use lifequest::Quest;

/// Load quests from a JSON array file
pub fn load_quests(path: &Path) -> Result<Vec<Quest>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read quest file: {}", path.display()))?;
    let quests: Vec<Quest> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse quest file: {}", path.display()))?;
    Ok(quests)
}

/// Show dashboard statistics and the priority order of open quests
pub fn stats_command(path: &Path, json: bool) -> Result<()> {
    let mut quests = load_quests(path)?;
    tracing::debug!("Loaded {} quests from {}", quests.len(), path.display());

    let now = Utc::now();
    let stats = get_quest_statistics_at(&quests, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Quests ({}):\n", stats.total);
    println!(
        "  active {}  paused {}  available {}  completed {}  failed {}",
        stats.active, stats.paused, stats.available, stats.completed, stats.failed
    );
    println!("  overdue: {}", stats.overdue);
    println!("  completion rate: {}%", stats.completion_rate);
    println!("  average progress: {}%", stats.average_progress);
    println!("  XP earned: {}  XP available: {}", stats.xp_earned, stats.xp_available);

    quests.retain(|q| !q.status.is_terminal());
    if quests.is_empty() {
        return Ok(());
    }

    sort_quests_by_priority_at(&mut quests, now);
    println!("\nPriority:\n");
    for quest in &quests {
        println!(
            "  [{:<7}] {} ({}, {}%) - {}",
            get_quest_urgency_at(quest, now).as_str(),
            quest.title,
            quest.difficulty,
            quest.progress,
            quest.status
        );
    }

    Ok(())
}
