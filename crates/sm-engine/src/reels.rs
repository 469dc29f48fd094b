//! Reel set

use serde::{Deserialize, Serialize};

use sm_core::Symbol;

use crate::random::RandomSource;

/// Number of reels on the machine
pub const REEL_COUNT: usize = 3;

/// The three displayed symbol indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReelSet(pub [u8; REEL_COUNT]);

impl ReelSet {
    pub fn new(indices: [u8; REEL_COUNT]) -> Self {
        Self(indices)
    }

    /// Three independent uniform draws in `[0, symbol_count)`
    pub fn draw<R: RandomSource + ?Sized>(source: &mut R, symbol_count: u8) -> Self {
        let mut indices = [0u8; REEL_COUNT];
        for slot in &mut indices {
            *slot = source.next_index(symbol_count);
        }
        Self(indices)
    }

    /// Opening layout `0, 1, 2`, wrapped into `[0, symbol_count)`
    pub fn opening(symbol_count: u8) -> Self {
        let count = symbol_count.max(1);
        Self([0, 1 % count, 2 % count])
    }

    pub fn indices(&self) -> [u8; REEL_COUNT] {
        self.0
    }

    /// All three reels show the same symbol
    pub fn is_match(&self) -> bool {
        let [a, b, c] = self.0;
        a == b && b == c
    }

    /// Resolve indices to named symbols (`None` past the named table)
    pub fn symbols(&self) -> [Option<Symbol>; REEL_COUNT] {
        self.0.map(Symbol::from_index)
    }
}

impl Default for ReelSet {
    /// Opening layout for the six named symbols
    fn default() -> Self {
        Self::opening(Symbol::COUNT)
    }
}
