//! Continuation pool - the blinded line-up a judge ranks.
//!
//! The pool holds the authentic second half of one story plus every
//! imitation written for it. Each entry keeps its author label and an
//! `authentic` marker attached, so a shuffle moves (text, author,
//! authentic) as one unit and authorship is always recoverable without
//! ever being visible to the judge.

use crate::core::model::Model;
use crate::story::{Continuation, OriginalStory};
use rand::Rng;
use rand::seq::SliceRandom;

/// One candidate continuation inside a pool
#[derive(Debug, Clone)]
pub struct PoolEntry {
    /// The continuation text shown to the judge
    pub text: String,
    /// Who wrote it (hidden from the judge)
    pub author: Model,
    authentic: bool,
}

/// The shuffled line-up of candidate continuations for one story
#[derive(Debug, Clone)]
pub struct ContinuationPool {
    original_model: Model,
    entries: Vec<PoolEntry>,
}

impl ContinuationPool {
    /// Build the pool for a story: its authentic second half first,
    /// then every continuation whose original model matches.
    ///
    /// Call [`shuffle`](Self::shuffle) before presenting it to a judge.
    pub fn build(story: &OriginalStory, continuations: &[Continuation]) -> Self {
        let mut entries = vec![PoolEntry {
            text: story.second_half.clone(),
            author: story.model.clone(),
            authentic: true,
        }];
        entries.extend(
            continuations
                .iter()
                .filter(|c| c.original_model == story.model)
                .map(|c| PoolEntry {
                    text: c.continuation.clone(),
                    author: c.continuing_model.clone(),
                    authentic: false,
                }),
        );
        Self {
            original_model: story.model.clone(),
            entries,
        }
    }

    /// Shuffle entries in place, keeping text and author paired
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.entries.shuffle(rng);
    }

    /// The model whose story this pool belongs to
    pub fn original_model(&self) -> &Model {
        &self.original_model
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the continuation texts in presentation order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }

    /// 1-based position of the authentic entry after shuffling.
    ///
    /// This is the choice number a perfect judge would rank first.
    pub fn correct_choice(&self) -> usize {
        self.entries
            .iter()
            .position(|e| e.authentic)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Resolve the author at a 1-based choice number
    pub fn author_at(&self, choice: usize) -> Option<&Model> {
        choice
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|e| &e.author)
    }

    /// The authentic second-half text
    pub fn authentic_text(&self) -> &str {
        self.entries
            .iter()
            .find(|e| e.authentic)
            .map(|e| e.text.as_str())
            .unwrap_or("")
    }
}
