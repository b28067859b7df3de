//! Dictionary provider error types.

/// Failure modes of a dictionary lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DictionaryErrorKind {
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
    /// Response body was not valid JSON
    Parse(String),
}

impl std::fmt::Display for DictionaryErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DictionaryErrorKind::MissingApiKey => {
                write!(f, "WORDS_API_KEY environment variable not set")
            }
            DictionaryErrorKind::Http(msg) => write!(f, "dictionary request failed: {}", msg),
            DictionaryErrorKind::Api { status, message } => {
                write!(f, "dictionary API returned status {}: {}", status, message)
            }
            DictionaryErrorKind::Parse(msg) => {
                write!(f, "dictionary response was not valid JSON: {}", msg)
            }
        }
    }
}

impl DictionaryErrorKind {
    /// Upstream HTTP status, when the provider answered with one.
    ///
    /// The router mirrors this status to the frontend on lookup failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            DictionaryErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Dictionary error with source location tracking.
///
/// # Examples
///
/// ```
/// use wordforge_error::{DictionaryError, DictionaryErrorKind};
///
/// let err = DictionaryError::new(DictionaryErrorKind::Api {
///     status: 404,
///     message: "word not found".to_string(),
/// });
/// assert_eq!(err.kind.status(), Some(404));
/// ```
#[derive(Debug, Clone)]
pub struct DictionaryError {
    /// The error kind
    pub kind: DictionaryErrorKind,
    /// Line where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl DictionaryError {
    /// Create a new DictionaryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DictionaryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Dictionary Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for DictionaryError {}
