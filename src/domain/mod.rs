//! Value types shared by the progression engine and the statistics helpers

mod achievement;
mod crew;
mod difficulty;
mod quest;

pub use achievement::Rarity;
pub use crew::{CrewMember, CrewRole};
pub use difficulty::{Difficulty, GoalDifficulty};
pub use quest::{Quest, QuestStatus};
