//! HTTP surface of the Wordforge vocabulary backend.
//!
//! A thin axum router over the provider traits: raw dictionary lookups are
//! relayed as-is, generated content goes through the extractor, and the
//! outcome decides the status code. CORS is wide open; the only consumer is
//! a browser frontend served from another origin.

pub mod api;
mod serve;
mod state;

pub use api::{DEFAULT_VOCAB_COUNT, MAX_VOCAB_COUNT, create_router};
pub use serve::serve;
pub use state::AppState;
