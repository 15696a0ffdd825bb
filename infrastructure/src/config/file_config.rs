//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file
//! and are deserialized directly.

use chameleon_domain::Model;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
///
/// # Example
///
/// ```toml
/// [models]
/// candidates = ["claude-3-haiku-20240307", "claude-3-opus-20240229"]
///
/// [session]
/// num_prompts = 5
/// capacity = 1
/// output = "chameleon_results.json"
///
/// [anthropic]
/// api_key_env = "ANTHROPIC_API_KEY"
/// max_tokens = 4096
/// temperature = 0.7
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Candidate model pool
    pub models: FileModelsConfig,
    /// Session-level knobs (prompt count, concurrency, output path)
    pub session: FileSessionConfig,
    /// Provider settings
    pub anthropic: FileAnthropicConfig,
}

/// `[models]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Candidate models; every candidate is also a judge
    pub candidates: Option<Vec<String>>,
}

impl FileModelsConfig {
    /// Parse configured candidates, falling back to the default pool.
    ///
    /// Blank names are dropped; unknown names become custom models.
    pub fn parse_candidates(&self) -> Vec<Model> {
        match &self.candidates {
            None => Model::default_models(),
            Some(names) => {
                let models: Vec<Model> = names
                    .iter()
                    .filter(|s| !s.trim().is_empty())
                    // Model::from_str is infallible
                    .map(|s| s.parse().unwrap())
                    .collect();
                if models.is_empty() {
                    Model::default_models()
                } else {
                    models
                }
            }
        }
    }
}

/// `[session]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Prompts to sample per session; defaults to the whole pool
    pub num_prompts: Option<usize>,
    /// Concurrently in-flight rounds
    pub capacity: usize,
    /// Results output path
    pub output: String,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            num_prompts: None,
            capacity: 1,
            output: "chameleon_results.json".to_string(),
        }
    }
}

/// `[anthropic]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.session.capacity, 1);
        assert_eq!(config.session.output, "chameleon_results.json");
        assert_eq!(config.anthropic.api_key_env, "ANTHROPIC_API_KEY");
        assert_eq!(config.models.parse_candidates(), Model::default_models());
    }

    #[test]
    fn test_parse_candidates_skips_blank_names() {
        let models = FileModelsConfig {
            candidates: Some(vec![
                "claude-3-haiku-20240307".to_string(),
                "   ".to_string(),
                "my-custom-model".to_string(),
            ]),
        };
        let parsed = models.parse_candidates();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], Model::Claude3Haiku);
        assert_eq!(parsed[1], Model::Custom("my-custom-model".to_string()));
    }

    #[test]
    fn test_parse_candidates_all_blank_falls_back() {
        let models = FileModelsConfig {
            candidates: Some(vec!["".to_string()]),
        };
        assert_eq!(models.parse_candidates(), Model::default_models());
    }
}
