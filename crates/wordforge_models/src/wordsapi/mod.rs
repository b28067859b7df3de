//! WordsAPI dictionary provider.

mod client;
mod config;

pub use client::WordsApiClient;
pub use config::{WordsApiConfig, WordsApiConfigBuilder};
