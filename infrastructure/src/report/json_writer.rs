//! JSON results writer.
//!
//! Serializes a [`SessionResults`] as pretty-printed JSON. The results
//! structure already has the persisted shape (`prompts`, `guesses`,
//! `model_performance`), so this is a pure pass-through.

use chameleon_domain::SessionResults;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Could not serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not write results file: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes session results to a JSON file
pub struct JsonResultsWriter;

impl JsonResultsWriter {
    /// Write `results` to `path`, creating parent directories as needed.
    pub fn write(results: &SessionResults, path: impl AsRef<Path>) -> Result<(), WriteError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(path, json)?;
        info!("Results saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chameleon_domain::Model;

    #[test]
    fn test_write_and_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.json");

        let mut results = SessionResults::new(&[Model::Claude3Haiku]);
        results.finalize_average_ranks();
        JsonResultsWriter::write(&results, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["prompts"].is_array());
        assert!(value["guesses"].is_array());
        assert!(
            value["model_performance"]["claude-3-haiku-20240307"]["average_rank"].is_number()
        );
    }
}
