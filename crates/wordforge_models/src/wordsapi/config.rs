//! Configuration for the WordsAPI dictionary client.

use derive_getters::Getters;
use wordforge_error::{DictionaryError, DictionaryErrorKind};

/// Connection settings for WordsAPI behind the RapidAPI gateway.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct WordsApiConfig {
    /// RapidAPI key, sent as `X-RapidAPI-Key`.
    api_key: String,
    /// RapidAPI host, sent as `X-RapidAPI-Host` and used as the request host.
    #[builder(default = "\"wordsapiv1.p.rapidapi.com\".to_string()")]
    host: String,
}

impl WordsApiConfig {
    /// Creates a builder for WordsApiConfig.
    pub fn builder() -> WordsApiConfigBuilder {
        WordsApiConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `WORDS_API_KEY` (required)
    /// - `WORDS_API_HOST` (default: "wordsapiv1.p.rapidapi.com")
    pub fn from_env() -> Result<Self, DictionaryError> {
        let api_key = std::env::var("WORDS_API_KEY")
            .map_err(|_| DictionaryError::new(DictionaryErrorKind::MissingApiKey))?;
        let host = std::env::var("WORDS_API_HOST")
            .unwrap_or_else(|_| "wordsapiv1.p.rapidapi.com".to_string());

        Ok(WordsApiConfigBuilder::default()
            .api_key(api_key)
            .host(host)
            .build()
            .expect("Valid WordsApiConfig"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_rapidapi_host_default() {
        let config = WordsApiConfig::builder()
            .api_key("rapid-test")
            .build()
            .expect("Valid WordsApiConfig");

        assert_eq!(config.host(), "wordsapiv1.p.rapidapi.com");
    }
}
