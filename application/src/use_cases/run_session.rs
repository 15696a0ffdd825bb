//! Run Session use case
//!
//! Orchestrates a full tournament session: samples prompts, runs one
//! round per prompt under a capacity limit, and finalizes the scores.

use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::progress::{NoProgress, TournamentProgress};
use crate::use_cases::run_round::{RoundContext, run_round};
use chameleon_domain::{DomainError, Model, SessionResults, StoryPrompt};
use rand::seq::SliceRandom;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::info;

/// Errors that can abort a tournament session.
///
/// Everything here is fatal: per-call failures are absorbed inside the
/// rounds and never surface as a session error.
#[derive(Error, Debug)]
pub enum RunSessionError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Shared results state corrupted (lock poisoned)")]
    ResultsPoisoned,

    #[error("Round task failed: {0}")]
    RoundFailed(String),
}

/// Input for the RunSession use case
#[derive(Debug, Clone)]
pub struct RunSessionInput {
    /// Candidate models; order fixes the story generation order
    pub models: Vec<Model>,
    /// Prompt pool to sample from
    pub prompt_pool: Vec<StoryPrompt>,
    /// Number of prompts to draw without replacement
    pub num_prompts: usize,
    /// Maximum concurrently in-flight rounds
    pub capacity: usize,
}

impl RunSessionInput {
    pub fn new(models: Vec<Model>, prompt_pool: Vec<StoryPrompt>, num_prompts: usize) -> Self {
        Self {
            models,
            prompt_pool,
            num_prompts,
            // Serialized by default; raise only when the upstream API
            // rate limits allow it.
            capacity: 1,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }
}

/// Total gateway calls a session will make, for progress reporting.
///
/// Per prompt: N originals + N×(N−1) continuations + N×N rankings.
pub fn expected_calls(num_prompts: usize, num_models: usize) -> usize {
    let n = num_models;
    num_prompts * (n + n * (n - 1) + n * n)
}

/// Use case for running a full tournament session
pub struct RunSessionUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: CompletionGateway + 'static> RunSessionUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunSessionInput,
    ) -> Result<SessionResults, RunSessionError> {
        self.execute_with_progress(input, Arc::new(NoProgress)).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunSessionInput,
        progress: Arc<dyn TournamentProgress>,
    ) -> Result<SessionResults, RunSessionError> {
        if input.models.is_empty() {
            return Err(DomainError::NoModels.into());
        }
        if input.num_prompts > input.prompt_pool.len() {
            return Err(DomainError::SampleTooLarge {
                requested: input.num_prompts,
                available: input.prompt_pool.len(),
            }
            .into());
        }

        let n = input.models.len();
        info!("Starting evaluation with {} prompts...", input.num_prompts);
        info!(
            "Total expected API calls: {} ({} models, {} calls per prompt)",
            expected_calls(input.num_prompts, n),
            n,
            2 * n * n
        );

        let selected: Vec<StoryPrompt> = input
            .prompt_pool
            .choose_multiple(&mut rand::thread_rng(), input.num_prompts)
            .cloned()
            .collect();

        let results = Arc::new(Mutex::new(SessionResults::new(&input.models)));
        let limiter = Arc::new(Semaphore::new(input.capacity));
        let models = Arc::new(input.models);
        let ctx = RoundContext {
            gateway: Arc::clone(&self.gateway),
            models,
            results: Arc::clone(&results),
            progress,
        };

        let mut join_set = JoinSet::new();
        for prompt in selected {
            let ctx = ctx.clone();
            let limiter = Arc::clone(&limiter);
            join_set.spawn(async move {
                // A round holds its permit for its entire duration, so
                // the capacity bounds in-flight rounds, not calls.
                let _permit = limiter
                    .acquire_owned()
                    .await
                    .map_err(|e| RunSessionError::RoundFailed(e.to_string()))?;
                run_round(ctx, prompt).await
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    // No silent partial results: abort everything in flight
                    join_set.abort_all();
                    return Err(e);
                }
                Err(e) => {
                    join_set.abort_all();
                    return Err(RunSessionError::RoundFailed(e.to_string()));
                }
            }
        }
        drop(ctx);

        let mut results = Arc::try_unwrap(results)
            .map_err(|_| RunSessionError::ResultsPoisoned)?
            .into_inner()
            .map_err(|_| RunSessionError::ResultsPoisoned)?;
        results.finalize_average_ranks();
        Ok(results)
    }
}
