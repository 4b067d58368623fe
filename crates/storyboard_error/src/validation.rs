//! Local input validation errors.

/// Caller-supplied input was missing or out of range.
///
/// These are raised before any remote call is issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Song title is empty or whitespace
    #[display("Song title cannot be empty")]
    EmptyTitle,
    /// Song lyrics are empty or whitespace
    #[display("Song lyrics cannot be empty")]
    EmptyLyrics,
    /// Operation needs a completed song analysis
    #[display("No song analysis available; run the analysis first")]
    MissingAnalysis,
    /// Operation needs a selected visual style
    #[display("No visual style selected")]
    NoSelectedStyle,
    /// Style id is not present in the style catalog
    #[display("Style '{}' is not in the style catalog", _0)]
    UnknownStyle(String),
    /// Operation needs a completed storyboard
    #[display("No storyboard available; build the storyboard first")]
    MissingStoryboard,
    /// Scene index outside the storyboard
    #[display("Scene index {} out of range for {} scenes", index, len)]
    SceneIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of scenes in the storyboard
        len: usize,
    },
    /// Duration is negative or not a finite number
    #[display("Invalid song duration: {}", _0)]
    InvalidDuration(String),
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::SceneIndexOutOfRange { index: 30, len: 12 });
/// assert!(format!("{}", err).contains("out of range"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific validation failure
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
