//! Remote generation error types and retry classification.

/// Error conditions raised while talking to the generative capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No credential available in the environment or the credential store
    #[display("GEMINI_API_KEY not set and no saved credential found")]
    MissingApiKey,
    /// Provider signalled a rate-limit or quota condition (HTTP 429)
    #[display("Rate limited by provider: {}", _0)]
    RateLimited(String),
    /// Provider reported the credential or requested entity as not found
    #[display("Credential rejected by provider: {}", _0)]
    CredentialInvalid(String),
    /// Response text failed schema or structural validation
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// Image request returned no inline image payload
    #[display("Response contained no image data")]
    NoImageData,
    /// Non-success HTTP status that is neither a rate limit nor a credential failure
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Request never produced an HTTP response (connection, TLS, body read)
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// Failed to construct the HTTP client
    #[display("Failed to create generation client: {}", _0)]
    ClientCreation(String),
}

impl GenerationErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Only rate-limit conditions are transient; everything else fails fast.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationErrorKind::RateLimited(_))
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GenerationError, GenerationErrorKind, RetryableError};
///
/// let err = GenerationError::new(GenerationErrorKind::RateLimited("quota".to_string()));
/// assert!(err.is_retryable());
///
/// let err = GenerationError::new(GenerationErrorKind::NoImageData);
/// assert!(!err.is_retryable());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// The retrying caller consults this before deciding whether to back off and try
/// again or to propagate the error immediately.
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GenerationError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
