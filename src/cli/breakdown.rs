//! Breakdown command implementation

use anyhow::Result;

use lifequest::progression::{generate_xp_breakdown, QuestCompletion};

/// Print the itemized XP for a quest completion
pub fn breakdown_command(completion: &QuestCompletion, json: bool) -> Result<()> {
    let breakdown = generate_xp_breakdown(completion);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("XP breakdown ({} quest)\n", breakdown.difficulty);
    println!("  Base            {:>6}", breakdown.base);
    println!("  Milestones      {:>+6}", breakdown.milestones);
    println!("  Streak          {:>+6}", breakdown.streak);
    println!("  Collaboration   {:>+6}", breakdown.collaboration);
    match breakdown.timing_modifier {
        Some(modifier) => println!("  Timing ({:<7}) {:>+6}", modifier.as_str(), breakdown.timing),
        None => println!("  Timing          {:>+6}", breakdown.timing),
    }
    println!("  Achievements    {:>+6}", breakdown.achievements);
    println!("  ----------------------");
    println!("  Total           {:>6}", breakdown.total);

    Ok(())
}
