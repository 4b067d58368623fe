//! Export error types.

/// Specific error conditions while packaging storyboard images.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExportErrorKind {
    /// Failed to create the export directory
    #[display("Failed to create directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write an export file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// An image payload was not valid base64 PNG data
    #[display("Failed to decode image data: {}", _0)]
    ImageDecode(String),
    /// Failed to serialize the storyboard manifest
    #[display("Failed to serialize manifest: {}", _0)]
    Serialization(String),
}

/// Export error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new ExportError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
