use thiserror::Error;

/// Main error type for the sponsors CLI
#[derive(Debug, Error)]
pub enum SponsorsError {
    /// Invalid command-line usage, printed with a usage hint
    #[error("{0}")]
    Flag(String),

    #[error("sponsor list: {0}")]
    SponsorList(#[source] ListerError),

    #[error("authentication required: {0}")]
    Authentication(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SponsorsError {
    /// Build a flag error from a message
    pub fn flag(message: impl Into<String>) -> Self {
        SponsorsError::Flag(message.into())
    }

    /// Whether this error came from argument validation
    pub fn is_flag_error(&self) -> bool {
        matches!(self, SponsorsError::Flag(_))
    }
}

/// Errors raised while fetching sponsors from the remote source
#[derive(Debug, Error)]
pub enum ListerError {
    /// Free-form failure; displayed verbatim
    #[error("{0}")]
    Message(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("GraphQL: {0}")]
    GraphQl(String),

    #[error("Could not resolve to a User with the login of '{0}'.")]
    UserNotFound(String),

    #[error("failed to decode API response: {0}")]
    Decode(String),
}

impl ListerError {
    pub fn message(message: impl Into<String>) -> Self {
        ListerError::Message(message.into())
    }
}

/// Result type alias for command operations
pub type SponsorsResult<T> = Result<T, SponsorsError>;

/// Result type alias for lister operations
pub type ListerResult<T> = Result<T, ListerError>;
