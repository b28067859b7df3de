//! Trait definitions for the wordforge vocabulary backend.
//!
//! These traits are the seam between the router/extractor and the concrete
//! provider clients in `wordforge_models`, and the seam mock implementations
//! plug into in tests.

mod dictionary;
mod generator;

pub use dictionary::DictionaryLookup;
pub use generator::TextGenerator;
