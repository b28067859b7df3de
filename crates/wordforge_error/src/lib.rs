//! Error types for the wordforge vocabulary backend.
//!
//! Two layers, following one rule: a failed *request* is an error, a
//! well-delivered completion that fails *shape validation* is not (that case
//! is the fallback outcome in `wordforge_core`). Per-concern kinds carry the
//! detail; [`WordforgeError`] is the workspace-level wrapper.

mod chat;
mod config;
mod dictionary;
mod server;

pub use chat::{ChatError, ChatErrorKind};
pub use config::ConfigError;
pub use dictionary::{DictionaryError, DictionaryErrorKind};
pub use server::{ServerError, ServerErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum WordforgeErrorKind {
    /// Chat-completion provider error
    Chat(ChatError),
    /// Dictionary provider error
    Dictionary(DictionaryError),
    /// Configuration error
    Config(ConfigError),
    /// HTTP server lifecycle error
    Server(ServerError),
}

impl std::fmt::Display for WordforgeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordforgeErrorKind::Chat(e) => write!(f, "{}", e),
            WordforgeErrorKind::Dictionary(e) => write!(f, "{}", e),
            WordforgeErrorKind::Config(e) => write!(f, "{}", e),
            WordforgeErrorKind::Server(e) => write!(f, "{}", e),
        }
    }
}

/// Wordforge error with kind discrimination.
#[derive(Debug)]
pub struct WordforgeError(Box<WordforgeErrorKind>);

impl WordforgeError {
    /// Create a new error from a kind.
    pub fn new(kind: WordforgeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WordforgeErrorKind {
        &self.0
    }
}

impl std::fmt::Display for WordforgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Wordforge Error: {}", self.0)
    }
}

impl std::error::Error for WordforgeError {}

// Generic From implementation for any type that converts to WordforgeErrorKind
impl<T> From<T> for WordforgeError
where
    T: Into<WordforgeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for wordforge operations.
pub type WordforgeResult<T> = std::result::Result<T, WordforgeError>;
