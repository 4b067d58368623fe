//! TOML configuration for the storyboard pipeline.
//!
//! Configuration is layered, later sources taking precedence:
//! 1. Bundled defaults (include_str! from storyboard.toml)
//! 2. `~/.config/storyboard/storyboard.toml`
//! 3. `./storyboard.toml`

use crate::RetryPolicy;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use storyboard_error::{ConfigError, StoryboardError, StoryboardResult};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storyboard.toml");

/// Gemini endpoint and model selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    /// REST base URL, without a trailing slash
    pub base_url: String,
    /// Model used for structured text generation
    pub text_model: String,
    /// Model used for image generation
    pub image_model: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            text_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
        }
    }
}

/// Orchestration tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Pause between consecutive scene image requests, in milliseconds
    pub scene_pause_ms: u64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            scene_pause_ms: 100,
        }
    }
}

impl PipelineSettings {
    /// The scene pause as a duration.
    pub fn scene_pause(&self) -> Duration {
        Duration::from_millis(self.scene_pause_ms)
    }
}

/// Top-level storyboard configuration.
///
/// # Example
///
/// ```toml
/// [retry]
/// max_attempts = 5
///
/// [gemini]
/// image_model = "gemini-2.5-flash-image"
///
/// [pipeline]
/// scene_pause_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryboardConfig {
    /// Backoff policy for rate-limited calls
    pub retry: RetryPolicy,
    /// Provider settings
    pub gemini: GeminiSettings,
    /// Orchestration settings
    pub pipeline: PipelineSettings,
}

impl StoryboardConfig {
    /// Load configuration from a single file.
    ///
    /// Keys missing from the file keep their default values.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StoryboardResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load the layered configuration.
    #[instrument]
    pub fn load() -> StoryboardResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyboard").required(false));

        builder
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// The bundled defaults, without user overrides.
    pub fn bundled() -> StoryboardResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Bundled configuration is invalid: {}",
                    e
                )))
            })
    }
}
