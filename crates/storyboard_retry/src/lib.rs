//! Retry and configuration for the storyboard pipeline.
//!
//! [`RetryingCaller`] wraps a fallible remote call with bounded exponential
//! backoff on rate-limit errors. [`StoryboardConfig`] loads the TOML
//! configuration, with bundled defaults and optional user overrides.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod caller;
mod config;
mod policy;

pub use caller::RetryingCaller;
pub use config::{GeminiSettings, PipelineSettings, StoryboardConfig};
pub use policy::RetryPolicy;
