//! sm-state: persisted player state
//!
//! Provides the on-disk high-score store.

mod high_score_file;

pub use high_score_file::*;
