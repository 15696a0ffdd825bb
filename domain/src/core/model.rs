//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// This is a domain concept identifying the candidate models that
/// participate in a tournament. The model is the key for every
/// per-model statistic, so it must be cheap to clone and hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Model {
    Claude3Haiku,
    Claude3Sonnet,
    Claude3Opus,
    Claude35Haiku,
    Claude35SonnetJune,
    Claude35SonnetOct,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Claude3Haiku => "claude-3-haiku-20240307",
            Model::Claude3Sonnet => "claude-3-sonnet-20240229",
            Model::Claude3Opus => "claude-3-opus-20240229",
            Model::Claude35Haiku => "claude-3-5-haiku-20241022",
            Model::Claude35SonnetJune => "claude-3-5-sonnet-20240620",
            Model::Claude35SonnetOct => "claude-3-5-sonnet-20241022",
            Model::Custom(s) => s,
        }
    }

    /// Get the default candidate pool for a tournament
    pub fn default_models() -> Vec<Model> {
        vec![
            Model::Claude3Haiku,
            Model::Claude3Sonnet,
            Model::Claude35Haiku,
            Model::Claude3Opus,
            Model::Claude35SonnetJune,
            Model::Claude35SonnetOct,
        ]
    }

    /// Get a short display name (e.g. "claude-3-haiku-20240307" -> "claude")
    pub fn short_name(&self) -> &str {
        self.as_str().split(['-', '_']).next().unwrap_or(self.as_str())
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-3-haiku-20240307" => Model::Claude3Haiku,
            "claude-3-sonnet-20240229" => Model::Claude3Sonnet,
            "claude-3-opus-20240229" => Model::Claude3Opus,
            "claude-3-5-haiku-20241022" => Model::Claude35Haiku,
            "claude-3-5-sonnet-20240620" => Model::Claude35SonnetJune,
            "claude-3-5-sonnet-20241022" => Model::Claude35SonnetOct,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}
