//! Guess record - one judge's verdict on one story's pool.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// An immutable record of one identification attempt.
///
/// Appended to the session-wide guess log, never mutated or removed.
/// `correct_index` and `rank_of_correct` are both 1-based to match the
/// choice numbering the judge saw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guess {
    /// The judge
    pub guessing_model: Model,
    /// The author of the story being identified
    pub original_model: Model,
    /// The judge's full ranking, most likely original first
    pub ranking: Vec<usize>,
    /// Choice number of the authentic entry after shuffling
    pub correct_index: usize,
    /// 1-based position of `correct_index` within `ranking`;
    /// the ranking's length when absent (worst possible rank)
    pub rank_of_correct: usize,
}

impl Guess {
    /// Whether the judge's top pick was the authentic continuation
    pub fn is_correct(&self) -> bool {
        self.ranking.first() == Some(&self.correct_index)
    }
}
