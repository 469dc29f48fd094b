//! Presentation cues
//!
//! Maps engine events to the game's sound and haptic cues,
//! so a renderer sequences its own effects off one event instead of
//! re-deriving game logic. The engine never calls this itself.

use serde::{Deserialize, Serialize};

use crate::events::GameEvent;
use crate::spin::SpinOutcome;

/// Sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    Spin,
    Win,
    HighScore,
    CasinoChips,
    GameOver,
    ChimeUp,
    /// Reels first come into view
    RiseUp,
    /// Loops while the info panel is open
    BackgroundMusic,
}

impl Sound {
    pub fn name(self) -> &'static str {
        match self {
            Sound::Spin => "spin",
            Sound::Win => "win",
            Sound::HighScore => "high-score",
            Sound::CasinoChips => "casino-chips",
            Sound::GameOver => "game-over",
            Sound::ChimeUp => "chimeup",
            Sound::RiseUp => "riseup",
            Sound::BackgroundMusic => "background-music",
        }
    }

    /// Bundled audio file
    pub fn file_name(self) -> String {
        format!("{}.mp3", self.name())
    }
}

/// Haptic feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Haptic {
    Success,
}

/// One presentation effect, in play order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Sound(Sound),
    Haptic(Haptic),
}

/// Effects to play for an event
pub fn cues_for(event: &GameEvent) -> Vec<Cue> {
    match event {
        GameEvent::AnteChanged(_) => ante_cues(),
        GameEvent::Spun(result) => {
            let mut cues = match result.outcome {
                SpinOutcome::Ignored => return Vec::new(),
                SpinOutcome::Loss => vec![Cue::Sound(Sound::Spin)],
                SpinOutcome::Win => vec![Cue::Sound(Sound::Spin), Cue::Sound(Sound::Win)],
                SpinOutcome::NewHighScore => {
                    vec![Cue::Sound(Sound::Spin), Cue::Sound(Sound::HighScore)]
                }
            };
            if result.went_bust() {
                cues.push(Cue::Sound(Sound::GameOver));
            }
            cues
        }
        GameEvent::GameReset => {
            // Reset drops back to the low ante, which has its own confirmation
            let mut cues = ante_cues();
            cues.push(Cue::Sound(Sound::ChimeUp));
            cues
        }
    }
}

/// Effects when the reels first appear on screen
pub fn reels_revealed() -> Vec<Cue> {
    vec![Cue::Sound(Sound::RiseUp), Cue::Haptic(Haptic::Success)]
}

/// Effects when the info panel opens
pub fn info_panel_opened() -> Vec<Cue> {
    vec![Cue::Sound(Sound::BackgroundMusic)]
}

fn ante_cues() -> Vec<Cue> {
    vec![Cue::Sound(Sound::CasinoChips), Cue::Haptic(Haptic::Success)]
}
