//! HTTP client for the OpenAI chat completions API.

use crate::openai::{ChatResponse, OpenAiConfig, conversions};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use wordforge_core::{GenerateRequest, GenerateResponse};
use wordforge_error::{ChatError, ChatErrorKind, WordforgeResult};
use wordforge_interface::TextGenerator;

/// Client for OpenAI-compatible chat completion endpoints.
///
/// Each [`TextGenerator::generate`] call is a single POST to
/// `{base_url}/chat/completions`; failed requests surface as errors and are
/// never retried here.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Creates a new OpenAI client.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: OpenAiConfig) -> Result<Self, ChatError> {
        use std::time::Duration;

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| ChatError::new(ChatErrorKind::Http(e.to_string())))?;

        debug!(base_url = %config.base_url(), "Created OpenAI client");

        Ok(Self { client, config })
    }

    /// Creates a client from `OPENAI_*` environment variables.
    pub fn from_env() -> Result<Self, ChatError> {
        Self::new(OpenAiConfig::from_env()?)
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url().trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    #[instrument(skip(self, request), fields(provider = "openai", model = %self.config.model()))]
    async fn generate(&self, request: &GenerateRequest) -> WordforgeResult<GenerateResponse> {
        let chat_request = conversions::to_chat_request(request, self.config.model())?;

        debug!(
            message_count = chat_request.messages().len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key()),
            )
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ChatError::new(ChatErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Chat API error");

            return Err(ChatError::new(ChatErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat response");
            ChatError::new(ChatErrorKind::Parse(format!("Failed to parse JSON: {}", e)))
        })?;

        debug!(
            choices = chat_response.choices.len(),
            usage = ?chat_response.usage,
            "Received chat completion"
        );

        Ok(conversions::from_chat_response(chat_response)?)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
