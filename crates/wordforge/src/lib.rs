//! Wordforge: a vocabulary-learning backend.
//!
//! The crate proxies a browser frontend to two upstreams: WordsAPI for raw
//! dictionary lookups, relayed untouched, and an OpenAI-compatible chat API
//! for generated content. Generated completions pass through the
//! structured-response extractor, which turns free text into typed JSON
//! payloads and degrades predictably when the model ignores its format
//! instructions.
//!
//! This facade re-exports the workspace surface; the `wordforge` binary in
//! this crate runs the HTTP server.

pub use wordforge_cache::{CacheConfig, CacheEntry, VocabCache};
pub use wordforge_core::{
    AnswerKey, Definition, Extraction, Fallback, FallbackReason, GenerateRequest,
    GenerateResponse, Message, Quiz, QuizOptions, Role, Shape, VocabList,
};
pub use wordforge_error::{
    ChatError, ChatErrorKind, ConfigError, DictionaryError, DictionaryErrorKind, ServerError,
    ServerErrorKind, WordforgeError, WordforgeErrorKind, WordforgeResult,
};
pub use wordforge_extract::{Extractor, parse, prompt};
pub use wordforge_interface::{DictionaryLookup, TextGenerator};
pub use wordforge_models::{OpenAiClient, OpenAiConfig, WordsApiClient, WordsApiConfig};
pub use wordforge_server::{AppState, create_router, serve};
