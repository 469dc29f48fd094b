//! Spin results

use serde::{Deserialize, Serialize};

use sm_core::Ante;

use crate::reels::ReelSet;

/// Whether the player can still spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    /// Purse hit zero or below; only `reset` resumes play
    Bust,
}

impl GameStatus {
    pub fn is_bust(self) -> bool {
        matches!(self, GameStatus::Bust)
    }
}

/// Classification of a spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinOutcome {
    /// No three-of-a-kind; the wager was taken
    Loss,
    /// Three-of-a-kind, purse did not beat the high score
    Win,
    /// Three-of-a-kind that set a new high score
    NewHighScore,
    /// Spin requested while bust; nothing changed
    Ignored,
}

impl SpinOutcome {
    pub fn is_win(self) -> bool {
        matches!(self, SpinOutcome::Win | SpinOutcome::NewHighScore)
    }
}

/// Everything a presentation layer needs to render one spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    /// Reels after the spin (unchanged when ignored)
    pub reels: ReelSet,
    pub outcome: SpinOutcome,
    /// Purse after the spin
    pub purse: i64,
    /// Status after the spin
    pub status: GameStatus,
    /// Ante the spin was played at
    pub ante: Ante,
    /// Coins staked (0 when ignored)
    pub wager: i64,
    /// Signed purse change
    pub delta: i64,
    /// High score after the spin
    pub high_score: i64,
}

impl SpinResult {
    pub fn is_win(&self) -> bool {
        self.outcome.is_win()
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self.outcome, SpinOutcome::Ignored)
    }

    /// This spin took the purse to bust
    pub fn went_bust(&self) -> bool {
        !self.is_ignored() && self.status.is_bust()
    }
}
