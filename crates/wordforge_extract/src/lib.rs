//! Structured-response extraction for the Wordforge backend.
//!
//! A language model deployed behind a typed API contract needs its free-text
//! answers converted into JSON payloads the frontend can rely on. This crate
//! owns that conversion: prompt builders that spell out the expected format,
//! strict shape parsing, and fallback synthesis for completions that come
//! back malformed. The raw completion text always survives a fallback
//! unmodified.

mod extractor;
pub mod parse;
pub mod prompt;

pub use extractor::Extractor;
