//! Completion gateway port
//!
//! Defines the interface for requesting text generation from an LLM
//! provider. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use chameleon_domain::Model;
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// The tournament round absorbs all of these — a failed generation is
/// treated as an empty completion and reported through the progress
/// port, never propagated.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// What a generation call is for.
///
/// Purely an accounting concern: delimiter misses only count against
/// continuation calls, and progress reporting breaks totals down by
/// kind. Correctness never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// Original story generation
    Original,
    /// Imitation of another model's story
    Continuation,
    /// Judge ranking request
    Identification,
}

/// Gateway for single-shot text generation
///
/// One opaque operation: given a prompt and a model identity, return
/// generated text. Stateless between calls by contract — every
/// tournament request is independent.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn generate(&self, prompt: &str, model: &Model) -> Result<String, GatewayError>;
}
