//! Top-level error wrapper types.

use crate::{
    ConfigError, ExportError, GenerationError, GenerationErrorKind, RetryableError,
    ValidationError,
};

/// The foundation error enum, one variant per concern.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardError, GenerationError, GenerationErrorKind};
///
/// let err: StoryboardError = GenerationError::new(GenerationErrorKind::NoImageData).into();
/// assert!(format!("{}", err).contains("no image data"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// Remote generation failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Local input validation failure
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Export packaging error
    #[from(ExportError)]
    Export(ExportError),
}

/// Storyboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardResult, ConfigError};
///
/// fn might_fail() -> StoryboardResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }

    /// The generation error kind, if this is a remote-call failure.
    pub fn generation_kind(&self) -> Option<&GenerationErrorKind> {
        match self.kind() {
            StoryboardErrorKind::Generation(err) => Some(&err.kind),
            _ => None,
        }
    }

    /// True when the provider rejected the credential.
    ///
    /// Callers route the user back to credential entry on this condition.
    pub fn is_credential_invalid(&self) -> bool {
        matches!(
            self.generation_kind(),
            Some(GenerationErrorKind::CredentialInvalid(_) | GenerationErrorKind::MissingApiKey)
        )
    }

    /// True when the provider signalled a rate-limit condition.
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self.generation_kind(),
            Some(GenerationErrorKind::RateLimited(_))
        )
    }
}

// Generic From implementation for any type that converts to StoryboardErrorKind
impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for StoryboardError {
    fn is_retryable(&self) -> bool {
        self.generation_kind()
            .is_some_and(GenerationErrorKind::is_retryable)
    }
}

/// Result type for storyboard operations.
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
