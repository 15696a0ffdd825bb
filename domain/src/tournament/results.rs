//! Session-wide results aggregate and credit attribution.
//!
//! [`SessionResults`] is the single shared structure every tournament
//! round appends into: the prompt log, the guess log, and the
//! model-to-performance map. Its serialized form is exactly the
//! persisted output shape, so writers are a pure pass-through.

use crate::core::model::Model;
use crate::story::{Continuation, OriginalStory, StoryPrompt};
use crate::tournament::guess::Guess;
use crate::tournament::performance::ModelPerformance;
use crate::tournament::pool::ContinuationPool;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything produced for one prompt, appended once per round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRecord {
    pub prompt_text: String,
    pub target_length: usize,
    pub original_stories: Vec<OriginalStory>,
    pub continuations: Vec<Continuation>,
}

/// How one recorded guess affected the scoreboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Top pick was the authentic entry
    Correct { rank: usize },
    /// Top pick was an imitation; `by` gets the fooling credit
    Fooled { by: Model, rank: usize },
    /// Top pick was outside 1..=pool size; nothing scored
    OutOfRange { guess: usize },
}

/// Process-lifetime results aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResults {
    pub prompts: Vec<PromptRecord>,
    pub guesses: Vec<Guess>,
    pub model_performance: BTreeMap<Model, ModelPerformance>,
}

impl SessionResults {
    /// Fresh results with zeroed performance for each candidate model
    pub fn new(models: &[Model]) -> Self {
        Self {
            prompts: Vec::new(),
            guesses: Vec::new(),
            model_performance: models
                .iter()
                .map(|m| (m.clone(), ModelPerformance::default()))
                .collect(),
        }
    }

    fn perf_mut(&mut self, model: &Model) -> &mut ModelPerformance {
        self.model_performance.entry(model.clone()).or_default()
    }

    /// Record one judge's parsed ranking against a shuffled pool.
    ///
    /// Appends a [`Guess`], records the judge's rank-of-correct, and
    /// attributes credit: a correct top pick scores the judge and the
    /// story's author, a wrong-but-valid pick credits the imitation's
    /// author with a fool, and an out-of-range pick scores nothing.
    ///
    /// The ranking must be non-empty (the parser guarantees this).
    /// When the correct choice is absent from the ranking its rank is
    /// the ranking's length — worst possible, not an error.
    pub fn record_guess(
        &mut self,
        judge: &Model,
        pool: &ContinuationPool,
        ranking: Vec<usize>,
    ) -> GuessOutcome {
        let guess = ranking.first().copied().unwrap_or(0);
        let correct_choice = pool.correct_choice();
        let rank_of_correct = ranking
            .iter()
            .position(|&r| r == correct_choice)
            .map(|p| p + 1)
            .unwrap_or(ranking.len());

        self.guesses.push(Guess {
            guessing_model: judge.clone(),
            original_model: pool.original_model().clone(),
            ranking,
            correct_index: correct_choice,
            rank_of_correct,
        });
        self.perf_mut(judge).record_rank(rank_of_correct);

        if guess == correct_choice {
            self.perf_mut(judge).correct_guesses += 1;
            let original = pool.original_model().clone();
            self.perf_mut(&original).times_guessed_correctly += 1;
            GuessOutcome::Correct {
                rank: rank_of_correct,
            }
        } else if let Some(author) = pool.author_at(guess) {
            let author = author.clone();
            self.perf_mut(&author).times_fooled_others += 1;
            GuessOutcome::Fooled {
                by: author,
                rank: rank_of_correct,
            }
        } else {
            GuessOutcome::OutOfRange { guess }
        }
    }

    /// Append the full record for one prompt's round
    pub fn push_prompt_record(
        &mut self,
        prompt: &StoryPrompt,
        original_stories: Vec<OriginalStory>,
        continuations: Vec<Continuation>,
    ) {
        self.prompts.push(PromptRecord {
            prompt_text: prompt.text.clone(),
            target_length: prompt.target_length,
            original_stories,
            continuations,
        });
    }

    /// Collapse every model's rank sequence into its mean.
    ///
    /// Invoked exactly once, after all rounds have completed.
    pub fn finalize_average_ranks(&mut self) {
        for perf in self.model_performance.values_mut() {
            perf.finalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models() -> (Model, Model, Model) {
        (Model::Claude3Haiku, Model::Claude3Sonnet, Model::Claude3Opus)
    }

    /// Build the pool from the attribution scenario: A's story,
    /// imitations by B and C, in a known unshuffled order
    /// [authentic(A), B, C].
    fn scenario() -> (SessionResults, ContinuationPool) {
        let (a, b, c) = models();
        let story = OriginalStory::from_text(a.clone(), "first half / second half");
        let continuations = vec![
            Continuation::new(a.clone(), b.clone(), "b imitation"),
            Continuation::new(a.clone(), c.clone(), "c imitation"),
        ];
        let pool = ContinuationPool::build(&story, &continuations);
        let results = SessionResults::new(&[a, b, c]);
        (results, pool)
    }

    #[test]
    fn test_correct_guess_scores_judge_and_author() {
        let (a, b, _) = models();
        let (mut results, pool) = scenario();
        // Unshuffled: authentic entry is choice 1
        assert_eq!(pool.correct_choice(), 1);

        let outcome = results.record_guess(&b, &pool, vec![1, 2, 3]);
        assert_eq!(outcome, GuessOutcome::Correct { rank: 1 });
        assert_eq!(results.model_performance[&b].correct_guesses, 1);
        assert_eq!(results.model_performance[&a].times_guessed_correctly, 1);
        assert_eq!(results.guesses.len(), 1);
        assert!(results.guesses[0].is_correct());
    }

    #[test]
    fn test_fooling_credit_goes_to_picked_author_not_judge() {
        let (_, b, c) = models();
        let (mut results, pool) = scenario();

        // Judge B picks choice 3 — C's imitation
        let outcome = results.record_guess(&b, &pool, vec![3, 1, 2]);
        assert_eq!(
            outcome,
            GuessOutcome::Fooled {
                by: c.clone(),
                rank: 2
            }
        );
        assert_eq!(results.model_performance[&c].times_fooled_others, 1);
        assert_eq!(results.model_performance[&b].times_fooled_others, 0);
        assert_eq!(results.model_performance[&b].correct_guesses, 0);
    }

    #[test]
    fn test_rank_of_correct_when_absent_is_ranking_length() {
        let (_, b, _) = models();
        let (mut results, pool) = scenario();

        // A short ranking that never mentions the correct choice 1
        let outcome = results.record_guess(&b, &pool, vec![2, 1, 3]);
        assert!(matches!(outcome, GuessOutcome::Fooled { .. }));
        assert_eq!(results.guesses[0].rank_of_correct, 2);

        // Ranking without the correct value at all gets worst rank
        let (mut results, pool) = scenario();
        results.record_guess(&b, &pool, vec![2, 3]);
        assert_eq!(results.guesses[0].rank_of_correct, 2);
    }

    #[test]
    fn test_out_of_range_guess_updates_nothing() {
        let (a, b, c) = models();
        let (mut results, pool) = scenario();

        let outcome = results.record_guess(&b, &pool, vec![7, 1, 2]);
        assert_eq!(outcome, GuessOutcome::OutOfRange { guess: 7 });
        for model in [&a, &b, &c] {
            let perf = &results.model_performance[model];
            assert_eq!(perf.correct_guesses, 0);
            assert_eq!(perf.times_guessed_correctly, 0);
            assert_eq!(perf.times_fooled_others, 0);
        }
        // The guess itself is still logged with its rank
        assert_eq!(results.guesses.len(), 1);
        assert_eq!(results.model_performance[&b].total_guesses(), 1);
    }

    #[test]
    fn test_finalize_average_ranks() {
        let (_, b, _) = models();
        let (mut results, pool) = scenario();
        results.record_guess(&b, &pool, vec![1, 2, 3]);
        results.record_guess(&b, &pool, vec![3, 2, 1]);
        results.finalize_average_ranks();
        // ranks 1 and 3
        assert_eq!(results.model_performance[&b].average_rank, 2.0);
        // Models that never judged finalize to 0
        assert_eq!(
            results.model_performance[&Model::Claude3Opus].average_rank,
            0.0
        );
    }

    #[test]
    fn test_serialized_shape() {
        let (_, b, _) = models();
        let (mut results, pool) = scenario();
        results.record_guess(&b, &pool, vec![1, 2, 3]);
        results.finalize_average_ranks();

        let json = serde_json::to_value(&results).unwrap();
        assert!(json["prompts"].is_array());
        assert!(json["guesses"].is_array());
        assert!(json["model_performance"].is_object());
        let perf = &json["model_performance"]["claude-3-sonnet-20240229"];
        assert_eq!(perf["correct_guesses"], 1);
        assert_eq!(perf["average_rank"], 1.0);
    }
}
