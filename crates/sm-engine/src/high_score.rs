//! High-score persistence capability
//!
//! The engine reads the stored value once at construction and writes it
//! every time it rises. Where it lives is the store's business.

use sm_core::SmResult;

/// Get/set access to the persisted `HighScore` integer
pub trait HighScoreStore {
    /// Last persisted value, `None` if nothing was ever stored
    fn load(&self) -> SmResult<Option<i64>>;

    /// Persist `value`. Must be durable when this returns `Ok`.
    fn store(&mut self, value: i64) -> SmResult<()>;
}

/// In-process store for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    value: Option<i64>,
    writes: usize,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a previous session's value
    pub fn with_value(value: i64) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Number of `store` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> SmResult<Option<i64>> {
        Ok(self.value)
    }

    fn store(&mut self, value: i64) -> SmResult<()> {
        self.value = Some(value);
        self.writes += 1;
        Ok(())
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> SmResult<Option<i64>> {
        (**self).load()
    }

    fn store(&mut self, value: i64) -> SmResult<()> {
        (**self).store(value)
    }
}
