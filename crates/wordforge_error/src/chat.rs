//! Chat-completion provider error types.

/// Failure modes of a chat-completion request.
///
/// Every variant here means "could not ask the model" or "the provider
/// envelope was broken" -- a completion that arrives intact but does not
/// contain the expected JSON shape is *not* an error; that case is handled
/// by the fallback outcome in `wordforge_core`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// Network-level failure before a status was received
    Http(String),
    /// Provider returned a non-success status
    Api {
        /// HTTP status code from the provider
        status: u16,
        /// Error body text
        message: String,
    },
    /// Provider envelope could not be decoded
    Parse(String),
    /// Provider returned an empty choices list
    EmptyCompletion,
    /// Outbound request could not be built
    Request(String),
}

impl std::fmt::Display for ChatErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatErrorKind::MissingApiKey => {
                write!(f, "OPENAI_API_KEY environment variable not set")
            }
            ChatErrorKind::Http(msg) => write!(f, "chat request failed: {}", msg),
            ChatErrorKind::Api { status, message } => {
                write!(f, "chat API returned status {}: {}", status, message)
            }
            ChatErrorKind::Parse(msg) => write!(f, "failed to decode chat response: {}", msg),
            ChatErrorKind::EmptyCompletion => write!(f, "chat response contained no choices"),
            ChatErrorKind::Request(msg) => write!(f, "failed to build chat request: {}", msg),
        }
    }
}

impl ChatErrorKind {
    /// Upstream HTTP status, when the provider answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ChatErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Chat error with source location tracking.
///
/// # Examples
///
/// ```
/// use wordforge_error::{ChatError, ChatErrorKind};
///
/// let err = ChatError::new(ChatErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct ChatError {
    /// The error kind
    pub kind: ChatErrorKind,
    /// Line where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ChatError {
    /// Create a new ChatError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ChatErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chat Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ChatError {}
