//! Outbound events for the presentation layer

use serde::{Deserialize, Serialize};

use sm_core::Ante;

use crate::spin::SpinResult;

/// A discrete engine signal. The engine never calls into rendering, audio
/// or haptics; a presentation layer consumes these instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    AnteChanged(Ante),
    Spun(SpinResult),
    GameReset,
}

impl GameEvent {
    /// Get event type name
    pub fn type_name(&self) -> &'static str {
        match self {
            GameEvent::AnteChanged(_) => "AnteChanged",
            GameEvent::Spun(_) => "SpinResult",
            GameEvent::GameReset => "GameReset",
        }
    }
}
