//! Reward command implementation

use anyhow::Result;

use lifequest::config::Config;
use lifequest::progression::{base_xp, calculate_xp_reward, XpMultipliers};
use lifequest::Difficulty;

/// Arguments for a single quest reward calculation
pub struct RewardArgs {
    pub difficulty: u8,
    pub daily: bool,
    pub category: Option<String>,
    pub streak: Option<u32>,
    pub collaboration: Option<f64>,
}

/// Print the XP a quest completion would grant
pub fn reward_command(config: &Config, args: RewardArgs) -> Result<()> {
    let difficulty = Difficulty::try_from(args.difficulty)?;

    let mut multipliers = XpMultipliers {
        streak: args.streak,
        collaboration: args.collaboration,
        ..Default::default()
    };

    if let Some(category) = &args.category {
        match config.rewards.category_multiplier(category) {
            Some(multiplier) => multipliers.category = Some(multiplier),
            None => tracing::warn!("No multiplier configured for category '{}'", category),
        }
    }

    let xp = calculate_xp_reward(difficulty, args.daily, &multipliers);

    println!(
        "{} quest{}: {} XP (base {})",
        difficulty,
        if args.daily { " (daily)" } else { "" },
        xp,
        base_xp(difficulty)
    );
    if let Some(multiplier) = multipliers.category {
        println!("  category x{}", multiplier);
    }
    if let Some(streak) = multipliers.streak {
        println!("  streak {} days", streak);
    }
    if let Some(multiplier) = multipliers.collaboration {
        println!("  collaboration x{}", multiplier);
    }

    Ok(())
}
