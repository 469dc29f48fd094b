//! Reel symbols

use serde::{Deserialize, Serialize};

use crate::error::SmError;

/// The six named reel symbols, in draw-index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    Bell = 0,
    Cherry = 1,
    Coin = 2,
    Grape = 3,
    Seven = 4,
    Strawberry = 5,
}

impl Symbol {
    /// Number of named symbols
    pub const COUNT: u8 = 6;

    pub const ALL: [Symbol; 6] = [
        Symbol::Bell,
        Symbol::Cherry,
        Symbol::Coin,
        Symbol::Grape,
        Symbol::Seven,
        Symbol::Strawberry,
    ];

    /// Resolve a draw index; `None` past the named table
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Bell => "bell",
            Symbol::Cherry => "cherry",
            Symbol::Coin => "coin",
            Symbol::Grape => "grape",
            Symbol::Seven => "seven",
            Symbol::Strawberry => "strawberry",
        }
    }

    /// Artwork name used by the renderer (e.g. "gfx-bell")
    pub fn asset_name(self) -> &'static str {
        match self {
            Symbol::Bell => "gfx-bell",
            Symbol::Cherry => "gfx-cherry",
            Symbol::Coin => "gfx-coin",
            Symbol::Grape => "gfx-grape",
            Symbol::Seven => "gfx-seven",
            Symbol::Strawberry => "gfx-strawberry",
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = SmError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Symbol::from_index(index).ok_or(SmError::UnknownSymbol(index))
    }
}
