use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lifequest::config::Config;
use lifequest::progression::QuestCompletion;
use lifequest::Difficulty;

mod cli;

#[derive(Parser)]
#[command(name = "lifequest")]
#[command(about = "LifeQuest progression engine - XP rewards, levels and quest stats")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.lifequest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the level for a cumulative XP total
    Level {
        /// Total XP (negative values count as level 1)
        #[arg(allow_negative_numbers = true)]
        total_xp: i64,
    },

    /// Calculate the XP reward for completing a quest
    Reward {
        /// Quest difficulty (1-5)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        difficulty: u8,

        /// Quest is a repeatable daily quest
        #[arg(long)]
        daily: bool,

        /// Quest category, looked up in [rewards.category_multipliers]
        #[arg(long)]
        category: Option<String>,

        /// Current streak in days
        #[arg(long)]
        streak: Option<u32>,

        /// Collaboration multiplier
        #[arg(long)]
        collaboration: Option<f64>,
    },

    /// Calculate the XP for a secondary goal check-in
    Goal {
        /// Goal difficulty (1-3)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
        difficulty: u8,

        /// Base XP (defaults to rewards.default_secondary_goal_xp)
        #[arg(long)]
        base_xp: Option<u64>,

        /// Current streak in days
        #[arg(long, default_value_t = 0)]
        streak: u32,
    },

    /// Itemize the XP for a completed quest
    Breakdown {
        /// Quest difficulty (1-5)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        difficulty: u8,

        /// Number of milestones the quest has
        #[arg(long, default_value_t = 0)]
        milestones: u32,

        /// Number of milestones completed
        #[arg(long, default_value_t = 0)]
        completed_milestones: u32,

        /// Current streak in days
        #[arg(long, default_value_t = 0)]
        streak: u32,

        /// People sharing the quest
        #[arg(long, default_value_t = 1)]
        participants: u32,

        /// Deadline (RFC 3339)
        #[arg(long)]
        deadline: Option<DateTime<Utc>>,

        /// Completion time (RFC 3339, defaults to now)
        #[arg(long)]
        completed_at: Option<DateTime<Utc>>,

        /// Achievements unlocked by this completion
        #[arg(long, default_value_t = 0)]
        achievements: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show statistics for a JSON file of quests
    Stats {
        /// Path to a JSON array of quests
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show crew level from pooled XP or a roster file
    Crew {
        /// Pooled crew XP
        total_xp: Option<u64>,

        /// Path to a JSON array of crew members
        #[arg(long)]
        members: Option<PathBuf>,
    },

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    run(cli.command, cli.config)
}

fn run(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    // Init writes the config, every other command reads it
    let load_config = || -> Result<Config> { cli::load_config(config_path.as_deref()) };

    match command {
        Commands::Level { total_xp } => {
            cli::level::level_command(&load_config()?, total_xp)?;
        }
        Commands::Reward {
            difficulty,
            daily,
            category,
            streak,
            collaboration,
        } => {
            cli::reward::reward_command(
                &load_config()?,
                cli::reward::RewardArgs {
                    difficulty,
                    daily,
                    category,
                    streak,
                    collaboration,
                },
            )?;
        }
        Commands::Goal {
            difficulty,
            base_xp,
            streak,
        } => {
            cli::goal::goal_command(&load_config()?, base_xp, streak, difficulty)?;
        }
        Commands::Breakdown {
            difficulty,
            milestones,
            completed_milestones,
            streak,
            participants,
            deadline,
            completed_at,
            achievements,
            json,
        } => {
            let completion = QuestCompletion {
                difficulty: Difficulty::try_from(difficulty)?,
                total_milestones: milestones,
                completed_milestones,
                streak,
                participant_count: participants,
                deadline,
                completed_at: completed_at.unwrap_or_else(Utc::now),
                new_achievements: achievements,
            };
            cli::breakdown::breakdown_command(&completion, json)?;
        }
        Commands::Stats { file, json } => {
            cli::quests::stats_command(&file, json)?;
        }
        Commands::Crew { total_xp, members } => {
            cli::crew::crew_command(&load_config()?, total_xp, members.as_deref())?;
        }
        Commands::Init { force } => {
            cli::init::init_command(config_path.clone(), force)?;
        }
    }

    Ok(())
}
