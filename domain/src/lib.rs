//! Domain layer for chameleon
//!
//! This crate contains the core business logic, entities, and value
//! objects of the style-imitation tournament. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tournament
//!
//! For every sampled prompt, each candidate model writes an original
//! story. Every other model then continues the first half of that story
//! trying to pass as the author, and every model — as judge — ranks the
//! shuffled line-up of continuations by likelihood of being authentic.
//!
//! ## Attribution
//!
//! A correct top pick scores the judge and the story's author. A wrong
//! pick credits whoever wrote the chosen imitation with a "fool" — the
//! pool keeps author labels paired with entries through the shuffle so
//! this attribution is exact.

pub mod core;
pub mod prompt;
pub mod story;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{error::DomainError, model::Model};
pub use prompt::{PromptTemplate, builtin_prompts};
pub use story::{Continuation, OriginalStory, StoryPrompt};
pub use tournament::{
    ContinuationPool, ExtractedCompletion, Guess, GuessOutcome, ModelPerformance, PromptRecord,
    RankingParseError, SessionResults, extract_completion, parse_ranking,
};
