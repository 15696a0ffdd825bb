//! One tournament round: a single prompt's full generate / imitate /
//! identify cycle.
//!
//! The round drives N original stories, N×(N−1) continuations, and N×N
//! identification tasks against the gateway, then folds its outcomes
//! into the shared [`SessionResults`]. Generation failures and
//! unparseable rankings are absorbed here; only internal invariant
//! breakage (a poisoned results lock) propagates to the orchestrator.

use crate::ports::completion_gateway::{CallKind, CompletionGateway};
use crate::ports::progress::TournamentProgress;
use crate::use_cases::run_session::RunSessionError;
use chameleon_domain::{
    Continuation, ContinuationPool, GuessOutcome, Model, OriginalStory, PromptTemplate,
    SessionResults, StoryPrompt, extract_completion, parse_ranking,
};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Shared context a round needs; cloned per spawned round task.
pub(crate) struct RoundContext<G> {
    pub gateway: Arc<G>,
    pub models: Arc<Vec<Model>>,
    pub results: Arc<Mutex<SessionResults>>,
    pub progress: Arc<dyn TournamentProgress>,
}

impl<G> Clone for RoundContext<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            models: Arc::clone(&self.models),
            results: Arc::clone(&self.results),
            progress: Arc::clone(&self.progress),
        }
    }
}

/// Execute one full round for `prompt`.
pub(crate) async fn run_round<G: CompletionGateway>(
    ctx: RoundContext<G>,
    prompt: StoryPrompt,
) -> Result<(), RunSessionError> {
    ctx.progress.on_round_start(&prompt);

    // Phase 1: each model writes an original, split at the midpoint
    let mut stories = Vec::with_capacity(ctx.models.len());
    for model in ctx.models.iter() {
        let raw = generate(&ctx, &prompt.text, model, CallKind::Original).await;
        let completion = extract_completion(&raw);
        stories.push(OriginalStory::from_text(model.clone(), completion.text));
    }

    // Phase 2: every other model continues each story's first half
    let mut continuations = Vec::with_capacity(ctx.models.len() * (ctx.models.len() - 1));
    for (i, model) in ctx.models.iter().enumerate() {
        for (j, story) in stories.iter().enumerate() {
            if i == j {
                continue;
            }
            let request = PromptTemplate::continuation(&prompt.text, &story.first_half);
            let raw = generate(&ctx, &request, model, CallKind::Continuation).await;
            let completion = extract_completion(&raw);
            if !completion.delimited {
                warn!("No <completion> tags in continuation response from {}", model);
                ctx.progress.on_missing_delimiter(model);
            }
            continuations.push(Continuation::new(
                story.model.clone(),
                model.clone(),
                completion.text,
            ));
        }
    }

    // Phase 3: every model judges every story's shuffled pool
    for story in &stories {
        let mut pool = ContinuationPool::build(story, &continuations);
        pool.shuffle(&mut rand::thread_rng());
        debug!(
            "Pool for {}'s story: {} entries, authentic at {}",
            story.model,
            pool.len(),
            pool.correct_choice()
        );

        for judge in ctx.models.iter() {
            let request =
                PromptTemplate::identification(&prompt.text, &story.first_half, pool.texts());
            let raw = generate(&ctx, &request, judge, CallKind::Identification).await;
            let response = extract_completion(&raw);

            let ranking = match parse_ranking(&response.text) {
                Ok(ranking) => ranking,
                Err(e) => {
                    warn!("Could not parse ranking response from {}: {}", judge, e);
                    continue;
                }
            };

            let outcome = lock_results(&ctx)?.record_guess(judge, &pool, ranking);
            match &outcome {
                GuessOutcome::Correct { rank } => {
                    info!(
                        "{} correctly guessed {}'s story (rank {})",
                        judge, story.model, rank
                    );
                }
                GuessOutcome::Fooled { by, rank } => {
                    info!(
                        "{} was fooled by {}'s continuation (rank {})",
                        judge, by, rank
                    );
                }
                GuessOutcome::OutOfRange { guess } => {
                    warn!("Invalid guess {} from {}", guess, judge);
                }
            }
            ctx.progress.on_guess(judge, &story.model, &outcome);
        }
    }

    lock_results(&ctx)?.push_prompt_record(&prompt, stories, continuations);
    ctx.progress.on_round_complete(&prompt);
    Ok(())
}

/// Request a completion, absorbing gateway failures as empty text.
async fn generate<G: CompletionGateway>(
    ctx: &RoundContext<G>,
    prompt: &str,
    model: &Model,
    kind: CallKind,
) -> String {
    match ctx.gateway.generate(prompt, model).await {
        Ok(text) => {
            ctx.progress.on_call_complete(model, kind, true);
            text
        }
        Err(e) => {
            warn!("Error getting completion from {}: {}", model, e);
            ctx.progress.on_call_complete(model, kind, false);
            String::new()
        }
    }
}

fn lock_results<G>(
    ctx: &RoundContext<G>,
) -> Result<std::sync::MutexGuard<'_, SessionResults>, RunSessionError> {
    ctx.results
        .lock()
        .map_err(|_| RunSessionError::ResultsPoisoned)
}
