//! Request and response types for text generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A generation request, constructed fresh per call.
///
/// `temperature` is valid in `[0.0, 2.0]` and `max_tokens` must be positive;
/// both are optional and omitted from the wire when unset.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Role-tagged prompt list
    messages: Vec<Message>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Creates a builder for GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The text of the first completion, opaque until parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    text: String,
}

impl GenerateResponse {
    /// Wraps a completion's text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw completion text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the response, yielding the raw text.
    pub fn into_text(self) -> String {
        self.text
    }
}
