//! # sm-engine — Slot machine game-state engine
//!
//! Pure, synchronous game logic for a three-reel slot machine. A
//! presentation layer calls in on button presses and reads state back to
//! render; the engine never touches rendering, audio or haptics.
//!
//! ## Architecture
//!
//! ```text
//! GameEngine
//!     │
//!     ├── GameConfig (purse, wagers, multiplier)
//!     ├── RandomSource (injected symbol draws)
//!     └── HighScoreStore (injected persistence)
//!           │
//!           v
//!     SpinResult / GameEvent → cues_for() → sounds, haptics
//! ```
//!
//! ## Rules
//!
//! - A spin draws three indices in `[0, N)`.
//! - Three-of-a-kind pays `wager * win_multiplier` (10 by default); anything
//!   else costs `wager`.
//! - A win that lifts the purse strictly above the high score records it.
//! - Purse at or below zero is bust; spins are ignored until `reset`.

pub mod cues;
pub mod engine;
pub mod events;
pub mod high_score;
pub mod random;
pub mod reels;
pub mod spin;
pub mod stats;

pub use cues::*;
pub use engine::*;
pub use events::*;
pub use high_score::*;
pub use random::*;
pub use reels::*;
pub use spin::*;
pub use stats::*;

pub use sm_core::{Ante, GameConfig, SmError, SmResult, Symbol};
