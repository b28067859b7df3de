//! OpenAI chat completions provider.

mod client;
mod config;
mod conversions;
mod dto;

pub use client::OpenAiClient;
pub use config::{OpenAiConfig, OpenAiConfigBuilder};
pub use conversions::{from_chat_response, to_chat_request};
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage};
