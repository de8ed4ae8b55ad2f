//! LifeQuest - progression engine
//!
//! Pure calculation core behind LifeQuest's quests, levels and crews. Users
//! earn XP for completing quests and daily goals, level up along a
//! logarithmic-ish curve, and pool XP into crews that level linearly.
//!
//! The engine performs no I/O and holds no state. Callers own persistence:
//! fetch the stored total, compute a delta here, store the new total, and
//! derive the level from it.
//!
//! ## Modules
//!
//! - [`progression`]: level curve, reward formulas, XP breakdowns, streaks
//! - [`stats`]: quest urgency, priority sorting, dashboard aggregates, crews
//! - [`domain`]: difficulty, rarity, quest and crew value types
//! - [`config`]: TOML reward tuning used by the CLI

pub mod config;
pub mod domain;
pub mod error;
pub mod progression;
pub mod stats;

pub use domain::*;
pub use error::QuestError;
