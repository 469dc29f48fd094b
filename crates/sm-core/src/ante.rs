//! Ante levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::SmError;

/// Wager level. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ante {
    /// Small wager (10 coins by default)
    #[default]
    Low,
    /// Large wager (20 coins by default)
    High,
}

impl Ante {
    /// All levels, low first
    pub const ALL: [Ante; 2] = [Ante::Low, Ante::High];

    /// Coins staked per spin at this level
    pub fn wager(self, config: &GameConfig) -> i64 {
        match self {
            Ante::Low => config.low_wager,
            Ante::High => config.high_wager,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ante::Low => "low",
            Ante::High => "high",
        }
    }
}

impl fmt::Display for Ante {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ante {
    type Err = SmError;

    /// Accepts the level name or the wager button label ("10"/"20")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "10" => Ok(Ante::Low),
            "high" | "20" => Ok(Ante::High),
            other => Err(SmError::InvalidAnte(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_low() {
        assert_eq!(Ante::default(), Ante::Low);
    }

    #[test]
    fn test_wager_amounts() {
        let config = GameConfig::default();
        assert_eq!(Ante::Low.wager(&config), 10);
        assert_eq!(Ante::High.wager(&config), 20);
    }

    #[test]
    fn test_parse() {
        assert_eq!("low".parse::<Ante>().unwrap(), Ante::Low);
        assert_eq!("HIGH".parse::<Ante>().unwrap(), Ante::High);
        assert_eq!("20".parse::<Ante>().unwrap(), Ante::High);
        assert!(matches!(
            "max".parse::<Ante>(),
            Err(SmError::InvalidAnte(_))
        ));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Ante::High).unwrap();
        assert_eq!(json, "\"high\"");
        let back: Ante = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Ante::High);
    }
}
