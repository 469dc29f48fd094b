//! # sm-core — Shared types for the slot machine
//!
//! Everything the game engine, the high-score store and the command-line
//! harness agree on:
//!
//! - **GameConfig**: purse, wagers, payout multiplier, symbol count
//! - **Ante**: the two wager levels
//! - **Symbol**: the six reel symbols and their artwork names
//! - **SmError**: error type for the fallible edges (config, storage)

pub mod ante;
pub mod config;
pub mod error;
pub mod symbols;

pub use ante::*;
pub use config::*;
pub use error::*;
pub use symbols::*;
