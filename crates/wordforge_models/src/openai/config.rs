//! Configuration for the OpenAI chat completions client.

use derive_getters::Getters;
use wordforge_error::{ChatError, ChatErrorKind};

/// Connection settings for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct OpenAiConfig {
    /// API key sent as a bearer token.
    api_key: String,
    /// Base URL of the API, without the `/chat/completions` suffix.
    #[builder(default = "\"https://api.openai.com/v1\".to_string()")]
    base_url: String,
    /// Model identifier to request.
    #[builder(default = "\"gpt-4o-mini\".to_string()")]
    model: String,
}

impl OpenAiConfig {
    /// Creates a builder for OpenAiConfig.
    pub fn builder() -> OpenAiConfigBuilder {
        OpenAiConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_BASE_URL` (default: "https://api.openai.com/v1")
    /// - `OPENAI_MODEL` (default: "gpt-4o-mini")
    pub fn from_env() -> Result<Self, ChatError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ChatError::new(ChatErrorKind::MissingApiKey))?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        Ok(OpenAiConfigBuilder::default()
            .api_key(api_key)
            .base_url(base_url)
            .model(model)
            .build()
            .expect("Valid OpenAiConfig"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_endpoint_and_model_defaults() {
        let config = OpenAiConfig::builder()
            .api_key("sk-test")
            .build()
            .expect("Valid OpenAiConfig");

        assert_eq!(config.base_url(), "https://api.openai.com/v1");
        assert_eq!(config.model(), "gpt-4o-mini");
    }

    #[test]
    fn builder_requires_api_key() {
        let result = OpenAiConfig::builder().model("gpt-4o").build();
        assert!(result.is_err());
    }
}
