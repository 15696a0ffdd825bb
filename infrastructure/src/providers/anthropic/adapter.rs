//! Anthropic Messages API gateway adapter
//!
//! Implements [`CompletionGateway`] with a plain HTTPS JSON client.
//! Each tournament request is a fresh single-turn conversation; the
//! harness relies on no session state at the provider.

use super::types::{ApiErrorResponse, Message, MessagesRequest, MessagesResponse};
use async_trait::async_trait;
use chameleon_application::ports::completion_gateway::{CompletionGateway, GatewayError};
use chameleon_domain::Model;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

/// Connection settings for the Anthropic adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl AnthropicConfig {
    /// Build a config from an API key with standard generation settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Gateway adapter talking to the Anthropic Messages API
#[derive(Debug)]
pub struct AnthropicGateway {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicGateway {
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Build an adapter reading the API key from an environment variable
    pub fn from_env(var: &str) -> Result<Self, GatewayError> {
        let api_key = std::env::var(var).map_err(|_| {
            GatewayError::ConnectionError(format!("environment variable {} is not set", var))
        })?;
        Ok(Self::new(AnthropicConfig::new(api_key)))
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionGateway for AnthropicGateway {
    async fn generate(&self, prompt: &str, model: &Model) -> Result<String, GatewayError> {
        let request = MessagesRequest {
            model: model.as_str().to_string(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![Message::user(prompt)],
        };

        debug!(model = %model, prompt_len = prompt.len(), "Sending messages request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| format!("{}: {}", e.error.kind, e.error.message))
                .unwrap_or(body);
            return Err(match status.as_u16() {
                404 => GatewayError::ModelNotAvailable(model.to_string()),
                408 | 504 => GatewayError::Timeout,
                _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status.as_u16(), detail)),
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("invalid response body: {}", e)))?;

        Ok(parsed.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let mut config = AnthropicConfig::new("k");
        config.base_url = "https://example.test/".to_string();
        let gateway = AnthropicGateway::new(config);
        assert_eq!(gateway.endpoint(), "https://example.test/v1/messages");
    }

    #[test]
    fn test_config_defaults() {
        let config = AnthropicConfig::new("k");
        assert_eq!(config.max_tokens, 4096);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_env_missing_key() {
        let err = AnthropicGateway::from_env("CHAMELEON_TEST_UNSET_VAR").unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
