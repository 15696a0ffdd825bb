//! Application layer for chameleon
//!
//! This crate contains the use cases and port definitions for the
//! tournament orchestration. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion_gateway::{CallKind, CompletionGateway, GatewayError},
    progress::{NoProgress, TournamentProgress},
};
pub use use_cases::{RunSessionError, RunSessionInput, RunSessionUseCase, expected_calls};
