//! Provider clients for the Wordforge vocabulary backend.
//!
//! Two upstream services back the router: an OpenAI-compatible chat
//! completions API for generated content (vocabulary lists, definitions,
//! quizzes) and WordsAPI for raw dictionary lookups. Each client implements
//! the matching `wordforge_interface` trait and maps transport problems into
//! `wordforge_error` kinds. Neither client retries; a failed call is
//! reported exactly once.

mod openai;
mod wordsapi;

pub use openai::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage,
    OpenAiClient, OpenAiConfig, OpenAiConfigBuilder, from_chat_response, to_chat_request,
};
pub use wordsapi::{WordsApiClient, WordsApiConfig, WordsApiConfigBuilder};
