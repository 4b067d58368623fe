//! Error types for the storyboard generation pipeline.
//!
//! This crate provides the error taxonomy shared by every storyboard crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Remote-call failures are [`GenerationError`]s, local input problems are
//! [`ValidationError`]s. Only [`GenerationErrorKind::RateLimited`] is retryable.
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{StoryboardResult, ValidationError, ValidationErrorKind};
//!
//! fn check_title(title: &str) -> StoryboardResult<()> {
//!     if title.trim().is_empty() {
//!         Err(ValidationError::new(ValidationErrorKind::EmptyTitle))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_title("").is_err());
//! assert!(check_title("Night Drive").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod generation;
mod validation;

pub use config::ConfigError;
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use export::{ExportError, ExportErrorKind};
pub use generation::{GenerationError, GenerationErrorKind, RetryableError};
pub use validation::{ValidationError, ValidationErrorKind};
