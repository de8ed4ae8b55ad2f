//! Secondary goal command implementation

use anyhow::Result;

use lifequest::config::Config;
use lifequest::progression::calculate_secondary_goal_xp;
use lifequest::GoalDifficulty;

/// Print the XP for one secondary goal check-in
pub fn goal_command(config: &Config, base_xp: Option<u64>, streak: u32, difficulty: u8) -> Result<()> {
    let difficulty = GoalDifficulty::try_from(difficulty)?;
    let base_xp = base_xp.unwrap_or(config.rewards.default_secondary_goal_xp);

    let xp = calculate_secondary_goal_xp(base_xp, streak, difficulty);
    println!(
        "Secondary goal (difficulty {}, {}-day streak): {} XP",
        difficulty.tier(),
        streak,
        xp
    );

    Ok(())
}
