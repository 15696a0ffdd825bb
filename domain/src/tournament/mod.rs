//! Tournament scoring - pools, guesses, attribution, and aggregates.
//!
//! This module is the pure core of the harness. Rounds (in the
//! application layer) drive generation and judging; everything that
//! decides *who gets credit for what* lives here.

pub mod guess;
pub mod parsing;
pub mod performance;
pub mod pool;
pub mod results;

pub use guess::Guess;
pub use parsing::{ExtractedCompletion, RankingParseError, extract_completion, parse_ranking};
pub use performance::ModelPerformance;
pub use pool::{ContinuationPool, PoolEntry};
pub use results::{GuessOutcome, PromptRecord, SessionResults};
