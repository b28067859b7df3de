//! HTTP server error types.

/// Failure modes of the router's own lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServerErrorKind {
    /// Listener could not bind the requested address
    Bind(String),
    /// Server loop terminated abnormally
    Serve(String),
}

impl std::fmt::Display for ServerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerErrorKind::Bind(msg) => write!(f, "failed to bind listener: {}", msg),
            ServerErrorKind::Serve(msg) => write!(f, "server terminated: {}", msg),
        }
    }
}

/// Server error with source location tracking.
#[derive(Debug, Clone)]
pub struct ServerError {
    /// The error kind
    pub kind: ServerErrorKind,
    /// Line where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Server Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ServerError {}
