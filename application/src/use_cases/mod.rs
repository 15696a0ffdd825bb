//! Application use cases

mod run_round;
pub mod run_session;

pub use run_session::{RunSessionError, RunSessionInput, RunSessionUseCase, expected_calls};
