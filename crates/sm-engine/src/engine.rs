//! Game engine: ante selection, spin resolution, bust and reset

use log::{debug, info, warn};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use sm_core::{Ante, GameConfig, SmResult};

use crate::events::GameEvent;
use crate::high_score::{HighScoreStore, MemoryHighScoreStore};
use crate::random::{RandomSource, RngSource};
use crate::reels::ReelSet;
use crate::spin::{GameStatus, SpinOutcome, SpinResult};
use crate::stats::SessionStats;

/// Engine driven by the seeded ChaCha source
pub type StandardEngine<S> = GameEngine<RngSource<ChaCha8Rng>, S>;

/// Slot machine game state
///
/// Owns the purse, ante, reels, high score and status. Every operation is
/// synchronous and total; the only I/O is the injected high-score store.
pub struct GameEngine<R, S> {
    /// Rules
    config: GameConfig,
    /// Symbol draws
    rng: R,
    /// Persisted high score
    store: S,
    reels: ReelSet,
    ante: Ante,
    purse: i64,
    high_score: i64,
    status: GameStatus,
    stats: SessionStats,
    /// Events not yet drained by the presentation layer
    events: Vec<GameEvent>,
}

/// Read-only view of the engine for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub reels: ReelSet,
    pub ante: Ante,
    pub wager: i64,
    pub purse: i64,
    pub high_score: i64,
    pub status: GameStatus,
}

impl StandardEngine<MemoryHighScoreStore> {
    /// Default rules, seeded draws, in-memory high score
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed), MemoryHighScoreStore::new())
    }
}

impl<R: RandomSource, S: HighScoreStore> GameEngine<R, S> {
    /// Create an engine with the default rules
    pub fn new(rng: R, store: S) -> Self {
        Self::build(GameConfig::default(), rng, store)
    }

    /// Create an engine with custom rules
    pub fn with_config(config: GameConfig, rng: R, store: S) -> SmResult<Self> {
        config.validate()?;
        Ok(Self::build(config, rng, store))
    }

    fn build(config: GameConfig, rng: R, store: S) -> Self {
        let high_score = match store.load() {
            Ok(Some(value)) => value,
            Ok(None) => 0,
            Err(e) => {
                warn!("Failed to load high score, starting from 0: {}", e);
                0
            }
        };

        debug!(
            "Engine ready: purse={} high_score={} symbols={}",
            config.starting_purse, high_score, config.symbol_count
        );

        Self {
            purse: config.starting_purse,
            reels: ReelSet::opening(config.symbol_count),
            config,
            rng,
            store,
            ante: Ante::default(),
            high_score,
            status: GameStatus::Playing,
            stats: SessionStats::default(),
            events: Vec::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // OPERATIONS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Switch the active wager level. Always succeeds.
    pub fn select_ante(&mut self, level: Ante) -> GameEvent {
        self.ante = level;
        debug!("Ante set to {} ({} coins)", level, self.wager());

        let event = GameEvent::AnteChanged(level);
        self.events.push(event.clone());
        event
    }

    /// Spin all three reels and settle the wager.
    ///
    /// While bust this is a no-op that reports `SpinOutcome::Ignored`.
    pub fn spin(&mut self) -> SpinResult {
        let result = if self.status.is_bust() {
            warn!("Spin ignored while bust (purse={})", self.purse);
            SpinResult {
                reels: self.reels,
                outcome: SpinOutcome::Ignored,
                purse: self.purse,
                status: self.status,
                ante: self.ante,
                wager: 0,
                delta: 0,
                high_score: self.high_score,
            }
        } else {
            self.resolve_spin()
        };

        self.stats.record(&result);
        self.events.push(GameEvent::Spun(result.clone()));
        result
    }

    fn resolve_spin(&mut self) -> SpinResult {
        let wager = self.wager();
        self.reels = ReelSet::draw(&mut self.rng, self.config.symbol_count);

        let (outcome, delta) = if self.reels.is_match() {
            let payout = wager.saturating_mul(self.config.win_multiplier);
            self.purse = self.purse.saturating_add(payout);

            // Ties with the record do not count
            if self.purse > self.high_score {
                self.raise_high_score();
                (SpinOutcome::NewHighScore, payout)
            } else {
                (SpinOutcome::Win, payout)
            }
        } else {
            self.purse = self.purse.saturating_sub(wager);
            (SpinOutcome::Loss, -wager)
        };

        if self.purse <= 0 {
            self.status = GameStatus::Bust;
            info!("Bust: purse={}", self.purse);
        }

        debug!(
            "Spin {:?} -> {:?}, delta={} purse={}",
            self.reels.indices(),
            outcome,
            delta,
            self.purse
        );

        SpinResult {
            reels: self.reels,
            outcome,
            purse: self.purse,
            status: self.status,
            ante: self.ante,
            wager,
            delta,
            high_score: self.high_score,
        }
    }

    fn raise_high_score(&mut self) {
        self.high_score = self.purse;
        info!("New high score: {}", self.high_score);

        if let Err(e) = self.store.store(self.high_score) {
            warn!("Failed to persist high score {}: {}", self.high_score, e);
        }
    }

    /// Start a new game: starting purse, low ante, playing.
    ///
    /// High score and reels are left alone.
    pub fn reset(&mut self) -> GameEvent {
        self.purse = self.config.starting_purse;
        self.ante = Ante::Low;
        self.status = GameStatus::Playing;
        info!("Game reset: purse={}", self.purse);

        self.events.push(GameEvent::GameReset);
        GameEvent::GameReset
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STATE
    // ═══════════════════════════════════════════════════════════════════════════

    pub fn reels(&self) -> ReelSet {
        self.reels
    }

    pub fn ante(&self) -> Ante {
        self.ante
    }

    /// Coins staked per spin at the active ante
    pub fn wager(&self) -> i64 {
        self.ante.wager(&self.config)
    }

    pub fn purse(&self) -> i64 {
        self.purse
    }

    pub fn high_score(&self) -> i64 {
        self.high_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_bust(&self) -> bool {
        self.status.is_bust()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Everything a renderer reads after an operation
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            reels: self.reels,
            ante: self.ante,
            wager: self.wager(),
            purse: self.purse,
            high_score: self.high_score,
            status: self.status,
        }
    }

    /// Get session stats
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reset session stats
    pub fn reset_stats(&mut self) {
        self.stats = SessionStats::default();
    }

    /// Take all events emitted since the last drain, oldest first.
    ///
    /// The queue grows until drained.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events emitted since the last drain
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}
