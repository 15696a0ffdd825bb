//! Progress notification port
//!
//! Defines the interface for reporting progress during a tournament
//! session. Implementations live in the presentation layer and own all
//! call-counting state — the core keeps no ambient counters.

use crate::ports::completion_gateway::CallKind;
use chameleon_domain::{GuessOutcome, Model, StoryPrompt};

/// Callback for progress updates during tournament execution
pub trait TournamentProgress: Send + Sync {
    /// Called when a round begins working on a prompt
    fn on_round_start(&self, prompt: &StoryPrompt);

    /// Called after every generation call, successful or not
    fn on_call_complete(&self, model: &Model, kind: CallKind, success: bool);

    /// Called when a continuation response lacked the completion delimiter
    fn on_missing_delimiter(&self, model: &Model);

    /// Called after a judge's ranking has been scored
    fn on_guess(&self, judge: &Model, original: &Model, outcome: &GuessOutcome);

    /// Called when a round has fully folded its outcomes into the results
    fn on_round_complete(&self, prompt: &StoryPrompt);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TournamentProgress for NoProgress {
    fn on_round_start(&self, _prompt: &StoryPrompt) {}
    fn on_call_complete(&self, _model: &Model, _kind: CallKind, _success: bool) {}
    fn on_missing_delimiter(&self, _model: &Model) {}
    fn on_guess(&self, _judge: &Model, _original: &Model, _outcome: &GuessOutcome) {}
    fn on_round_complete(&self, _prompt: &StoryPrompt) {}
}
