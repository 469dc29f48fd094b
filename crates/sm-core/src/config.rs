//! Game configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SmError, SmResult};

/// Tunable game rules. Defaults are the classic 10/20 coin game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distinct symbols per reel (`N`); draws land in `[0, N)`
    pub symbol_count: u8,
    /// Purse after construction and after every reset
    pub starting_purse: i64,
    /// Coins staked at `Ante::Low`
    pub low_wager: i64,
    /// Coins staked at `Ante::High`
    pub high_wager: i64,
    /// A three-of-a-kind pays `wager * win_multiplier`
    pub win_multiplier: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbol_count: 6,
            starting_purse: 100,
            low_wager: 10,
            high_wager: 20,
            win_multiplier: 10,
        }
    }
}

impl GameConfig {
    /// Check the rules are playable
    pub fn validate(&self) -> SmResult<()> {
        if self.symbol_count < 2 {
            return Err(SmError::InvalidConfig(format!(
                "symbol_count must be at least 2, got {}",
                self.symbol_count
            )));
        }
        if self.starting_purse <= 0 {
            return Err(SmError::InvalidConfig(format!(
                "starting_purse must be positive, got {}",
                self.starting_purse
            )));
        }
        if self.low_wager <= 0 || self.high_wager <= 0 {
            return Err(SmError::InvalidConfig(format!(
                "wagers must be positive, got {}/{}",
                self.low_wager, self.high_wager
            )));
        }
        if self.win_multiplier <= 0 {
            return Err(SmError::InvalidConfig(format!(
                "win_multiplier must be positive, got {}",
                self.win_multiplier
            )));
        }
        if self
            .high_wager
            .max(self.low_wager)
            .checked_mul(self.win_multiplier)
            .is_none()
        {
            return Err(SmError::InvalidConfig(format!(
                "payout overflows: wager {} x multiplier {}",
                self.high_wager.max(self.low_wager),
                self.win_multiplier
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> SmResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> SmResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a JSON config file
    pub fn load_from<P: AsRef<Path>>(path: P) -> SmResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save to a JSON file, creating parent directories
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> SmResult<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let config = GameConfig::default();
        assert_eq!(config.symbol_count, 6);
        assert_eq!(config.starting_purse, 100);
        assert_eq!(config.low_wager, 10);
        assert_eq!(config.high_wager, 20);
        assert_eq!(config.win_multiplier, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "starting_purse": 500 }"#).unwrap();
        assert_eq!(config.starting_purse, 500);
        assert_eq!(config.low_wager, 10);
    }

    #[test]
    fn test_rejects_single_symbol() {
        let config = GameConfig {
            symbol_count: 1,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(SmError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let bad_purse = GameConfig {
            starting_purse: 0,
            ..GameConfig::default()
        };
        assert!(bad_purse.validate().is_err());

        let bad_wager = GameConfig {
            high_wager: -5,
            ..GameConfig::default()
        };
        assert!(bad_wager.validate().is_err());

        let bad_multiplier = GameConfig {
            win_multiplier: 0,
            ..GameConfig::default()
        };
        assert!(bad_multiplier.validate().is_err());
    }

    #[test]
    fn test_rejects_overflowing_payout() {
        let config = GameConfig {
            low_wager: i64::MAX / 5,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(SmError::InvalidConfig(_))));

        let largest = GameConfig {
            high_wager: i64::MAX / 10,
            ..GameConfig::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(SmError::Serialization(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("game.json");
        let config = GameConfig {
            high_wager: 50,
            ..GameConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(GameConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::load_from(dir.path().join("absent.json"));
        assert!(matches!(result, Err(SmError::Io(_))));
    }
}
