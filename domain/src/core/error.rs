//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No models configured for the tournament")]
    NoModels,

    #[error("Requested {requested} prompts but the pool only has {available}")]
    SampleTooLarge { requested: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_too_large_display() {
        let error = DomainError::SampleTooLarge {
            requested: 40,
            available: 30,
        };
        assert_eq!(
            error.to_string(),
            "Requested 40 prompts but the pool only has 30"
        );
    }
}
