//! HTTP client for the WordsAPI dictionary service.

use crate::wordsapi::WordsApiConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use wordforge_error::{DictionaryError, DictionaryErrorKind, WordforgeResult};
use wordforge_interface::DictionaryLookup;

/// Client for WordsAPI word and definition lookups.
///
/// Responses are passed through as raw JSON; the router relays them to the
/// frontend without reshaping. Upstream error statuses are preserved in
/// [`DictionaryErrorKind::Api`] so the router can mirror them.
#[derive(Debug, Clone)]
pub struct WordsApiClient {
    client: Client,
    config: WordsApiConfig,
}

impl WordsApiClient {
    /// Creates a new WordsAPI client.
    #[instrument(skip(config), fields(host = %config.host()))]
    pub fn new(config: WordsApiConfig) -> Result<Self, DictionaryError> {
        use std::time::Duration;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DictionaryError::new(DictionaryErrorKind::Http(e.to_string())))?;

        Ok(Self { client, config })
    }

    /// Creates a client from `WORDS_API_*` environment variables.
    pub fn from_env() -> Result<Self, DictionaryError> {
        Self::new(WordsApiConfig::from_env()?)
    }

    /// Full metadata document for a word (syllables, pronunciation,
    /// frequency, and more). Not part of the [`DictionaryLookup`] seam; the
    /// router only relays definitions.
    #[instrument(skip(self), fields(provider = "wordsapi"))]
    pub async fn word(&self, word: &str) -> WordforgeResult<serde_json::Value> {
        self.fetch(format!("https://{}/words/{}", self.config.host(), word))
            .await
    }

    async fn fetch(&self, url: String) -> WordforgeResult<serde_json::Value> {
        debug!(url = %url, "Fetching from WordsAPI");

        let response = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", self.config.api_key())
            .header("X-RapidAPI-Host", self.config.host())
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                DictionaryError::new(DictionaryErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "WordsAPI error");

            return Err(DictionaryError::new(DictionaryErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let body = response.json::<serde_json::Value>().await.map_err(|e| {
            error!(error = ?e, "Failed to parse WordsAPI response");
            DictionaryError::new(DictionaryErrorKind::Parse(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        Ok(body)
    }
}

#[async_trait]
impl DictionaryLookup for WordsApiClient {
    #[instrument(skip(self), fields(provider = "wordsapi"))]
    async fn definitions(&self, word: &str) -> WordforgeResult<serde_json::Value> {
        self.fetch(format!(
            "https://{}/words/{}/definitions",
            self.config.host(),
            word
        ))
        .await
    }

    fn provider_name(&self) -> &'static str {
        "wordsapi"
    }
}
