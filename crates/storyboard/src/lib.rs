//! Storyboard - song to music-video storyboard generation
//!
//! Storyboard analyzes a song's lyrics, proposes visual styles, plans a
//! scene-by-scene shot list and images every scene plus a thumbnail, keeping
//! the protagonist and look consistent across all of them.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storyboard::{
//!     CredentialStore, GeminiBackend, GenerationClient, PipelineOptions,
//!     PipelineOrchestrator, StoryboardConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryboardConfig::load()?;
//!     let backend = GeminiBackend::from_credentials(&CredentialStore::load(), config.gemini.clone())?;
//!     let client = GenerationClient::new(backend, config.retry.clone());
//!     let mut pipeline = PipelineOrchestrator::new(client, PipelineOptions::from(&config.pipeline));
//!
//!     pipeline.run_analysis("Night Drive", "City lights on the water...").await?;
//!     pipeline.state_mut().set_duration(200.0)?;
//!     pipeline.build_storyboard().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyboard_error` - Error types
//! - `storyboard_core` - Data model and export naming
//! - `storyboard_interface` - `GenerationBackend` trait
//! - `storyboard_retry` - Retry policy, retrying caller and configuration
//! - `storyboard_models` - Gemini backend and the typed generation client
//! - `storyboard_storage` - Directory exporter
//! - `storyboard_pipeline` - Orchestrator and project state
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod logging;

pub use storyboard_error::{
    ConfigError, ExportError, ExportErrorKind, GenerationError, GenerationErrorKind,
    RetryableError, StoryboardError, StoryboardErrorKind, StoryboardResult, ValidationError,
    ValidationErrorKind,
};

pub use storyboard_core::{
    AspectRatio, ExportEntry, ImageData, Orientation, PipelineProgress, SceneTimestamp,
    SongAnalysis, SongInput, Storyboard, StoryboardManifest, StoryboardScene, StyleId,
    VisualStyle, export,
};

pub use storyboard_interface::{
    GenerationBackend, ImageRequest, ImageResponse, ResponsePart, StructuredRequest,
};

pub use storyboard_retry::{
    GeminiSettings, PipelineSettings, RetryPolicy, RetryingCaller, StoryboardConfig,
};

pub use storyboard_models::{
    API_KEY_ENV, CredentialStore, GeminiBackend, GenerationClient, PlanRequest, StyleIdSource,
    prompts,
};

pub use storyboard_storage::{DirectoryExporter, ExportReport};

pub use storyboard_pipeline::{
    PipelineOptions, PipelineOrchestrator, PipelineStage, ProgressObserver, ProjectState,
};
