//! Achievement rarity tiers

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuestError;

/// Rarity of an unlocked achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    pub fn all() -> &'static [Rarity] {
        &[
            Self::Common,
            Self::Uncommon,
            Self::Rare,
            Self::Epic,
            Self::Legendary,
        ]
    }
}

impl FromStr for Rarity {
    type Err = QuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "common" => Ok(Self::Common),
            "uncommon" => Ok(Self::Uncommon),
            "rare" => Ok(Self::Rare),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            _ => Err(QuestError::UnknownRarity(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rarity() {
        assert_eq!("epic".parse::<Rarity>(), Ok(Rarity::Epic));
        assert_eq!(" Legendary ".parse::<Rarity>(), Ok(Rarity::Legendary));
        assert!(matches!(
            "mythic".parse::<Rarity>(),
            Err(QuestError::UnknownRarity(_))
        ));
    }

    #[test]
    fn test_rarity_names_round_trip() {
        for rarity in Rarity::all() {
            assert_eq!(rarity.as_str().parse::<Rarity>().unwrap(), *rarity);
        }
    }
}
