//! Per-model performance counters.

use serde::{Deserialize, Serialize};

/// Mutable per-model aggregate, keyed by model in the results map.
///
/// Three counters plus the running rank-of-correct sequence. The
/// sequence is collapsed into the scalar `average_rank` by
/// [`finalize`](Self::finalize) once all rounds complete; only the
/// scalar is serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelPerformance {
    /// Times this model, as judge, ranked the authentic entry first
    pub correct_guesses: u32,
    /// Times this model's own story was correctly identified by a judge
    pub times_guessed_correctly: u32,
    /// Times this model's imitation was mistaken for the original
    pub times_fooled_others: u32,
    /// Mean rank-of-correct over all judging instances (0 if none)
    pub average_rank: f64,
    #[serde(skip)]
    ranks: Vec<u32>,
}

impl ModelPerformance {
    /// Append a rank-of-correct observation for this model as judge
    pub fn record_rank(&mut self, rank: usize) {
        self.ranks.push(rank as u32);
    }

    /// Number of guesses this model has made as judge
    pub fn total_guesses(&self) -> usize {
        self.ranks.len()
    }

    /// Guesses where this model failed to pick the authentic entry
    pub fn times_got_fooled(&self) -> u32 {
        self.total_guesses() as u32 - self.correct_guesses
    }

    /// Ratio of others fooled to times fooled (0 when never fooled)
    pub fn success_rate(&self) -> f64 {
        let got_fooled = self.times_got_fooled();
        if got_fooled == 0 {
            0.0
        } else {
            self.times_fooled_others as f64 / got_fooled as f64
        }
    }

    /// Collapse the rank sequence into its arithmetic mean.
    ///
    /// A model that never judged finalizes to 0.
    pub fn finalize(&mut self) {
        self.average_rank = if self.ranks.is_empty() {
            0.0
        } else {
            self.ranks.iter().map(|&r| r as f64).sum::<f64>() / self.ranks.len() as f64
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_mean() {
        let mut perf = ModelPerformance::default();
        perf.record_rank(1);
        perf.record_rank(3);
        perf.record_rank(2);
        perf.finalize();
        assert_eq!(perf.average_rank, 2.0);
    }

    #[test]
    fn test_finalize_order_independent() {
        let mut a = ModelPerformance::default();
        let mut b = ModelPerformance::default();
        for r in [4, 1, 2, 6] {
            a.record_rank(r);
        }
        for r in [6, 2, 1, 4] {
            b.record_rank(r);
        }
        a.finalize();
        b.finalize();
        assert_eq!(a.average_rank, b.average_rank);
    }

    #[test]
    fn test_finalize_empty_is_zero() {
        let mut perf = ModelPerformance::default();
        perf.finalize();
        assert_eq!(perf.average_rank, 0.0);
    }

    #[test]
    fn test_success_rate_zero_denominator() {
        let mut perf = ModelPerformance::default();
        perf.times_fooled_others = 3;
        // No guesses recorded at all
        assert_eq!(perf.success_rate(), 0.0);

        // All guesses correct: still never fooled
        perf.record_rank(1);
        perf.correct_guesses = 1;
        assert_eq!(perf.success_rate(), 0.0);
    }

    #[test]
    fn test_success_rate() {
        let mut perf = ModelPerformance::default();
        perf.times_fooled_others = 2;
        for _ in 0..4 {
            perf.record_rank(2);
        }
        // 4 guesses, 0 correct -> fooled 4 times
        assert_eq!(perf.success_rate(), 0.5);
    }

    #[test]
    fn test_rank_sequence_not_serialized() {
        let mut perf = ModelPerformance::default();
        perf.record_rank(2);
        perf.finalize();
        let json = serde_json::to_value(&perf).unwrap();
        assert!(json.get("ranks").is_none());
        assert_eq!(json["average_rank"], 2.0);
    }
}
