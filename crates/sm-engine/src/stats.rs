//! Session statistics

use serde::{Deserialize, Serialize};

use crate::spin::{SpinOutcome, SpinResult};

/// Running totals across games. A game reset does not clear these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Spins that resolved (ignored spins excluded)
    pub spins: u64,
    pub wins: u64,
    pub losses: u64,
    /// Spins rejected while bust
    pub ignored: u64,
    /// Stake of every resolved spin, winning or not
    pub total_wagered: i64,
    /// Coins paid out on wins
    pub total_won: i64,
    /// Coins taken on losses
    pub total_lost: i64,
    /// Largest purse seen this session
    pub high_water_purse: i64,
    pub busts: u64,
}

impl SessionStats {
    /// Record one spin
    pub fn record(&mut self, result: &SpinResult) {
        if result.is_ignored() {
            self.ignored += 1;
            return;
        }

        self.spins += 1;
        self.total_wagered = self.total_wagered.saturating_add(result.wager);

        match result.outcome {
            SpinOutcome::Win | SpinOutcome::NewHighScore => {
                self.wins += 1;
                self.total_won = self.total_won.saturating_add(result.delta);
            }
            SpinOutcome::Loss => {
                self.losses += 1;
                self.total_lost = self.total_lost.saturating_sub(result.delta);
            }
            SpinOutcome::Ignored => {}
        }

        self.high_water_purse = self.high_water_purse.max(result.purse);

        if result.went_bust() {
            self.busts += 1;
        }
    }

    /// Percentage of resolved spins that won
    pub fn hit_rate(&self) -> f64 {
        if self.spins > 0 {
            (self.wins as f64 / self.spins as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Purse movement across the session
    pub fn net(&self) -> i64 {
        self.total_won.saturating_sub(self.total_lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reels::ReelSet;
    use crate::spin::GameStatus;
    use sm_core::Ante;

    fn spin(outcome: SpinOutcome, delta: i64, purse: i64, status: GameStatus) -> SpinResult {
        SpinResult {
            reels: ReelSet::default(),
            outcome,
            purse,
            status,
            ante: Ante::Low,
            wager: if outcome == SpinOutcome::Ignored { 0 } else { 10 },
            delta,
            high_score: 0,
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = SessionStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.net(), 0);
    }

    #[test]
    fn test_record_mix() {
        let mut stats = SessionStats::default();
        stats.record(&spin(SpinOutcome::Loss, -10, 90, GameStatus::Playing));
        stats.record(&spin(SpinOutcome::NewHighScore, 100, 190, GameStatus::Playing));
        stats.record(&spin(SpinOutcome::Loss, -10, 180, GameStatus::Playing));
        stats.record(&spin(SpinOutcome::Win, 100, 280, GameStatus::Playing));

        assert_eq!(stats.spins, 4);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 2);
        assert_eq!(stats.total_wagered, 40);
        assert_eq!(stats.total_won, 200);
        assert_eq!(stats.total_lost, 20);
        assert_eq!(stats.net(), 180);
        assert_eq!(stats.high_water_purse, 280);
        assert_eq!(stats.hit_rate(), 50.0);
    }

    #[test]
    fn test_totals_saturate() {
        let mut stats = SessionStats::default();
        stats.record(&spin(SpinOutcome::NewHighScore, i64::MAX, i64::MAX, GameStatus::Playing));
        stats.record(&spin(SpinOutcome::Win, i64::MAX, i64::MAX, GameStatus::Playing));
        assert_eq!(stats.total_won, i64::MAX);
        assert_eq!(stats.net(), i64::MAX);
    }

    #[test]
    fn test_bust_and_ignored() {
        let mut stats = SessionStats::default();
        stats.record(&spin(SpinOutcome::Loss, -10, 0, GameStatus::Bust));
        stats.record(&spin(SpinOutcome::Ignored, 0, 0, GameStatus::Bust));

        assert_eq!(stats.spins, 1);
        assert_eq!(stats.busts, 1);
        assert_eq!(stats.ignored, 1);
        assert_eq!(stats.total_wagered, 10);
    }
}
