//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyboard binary.

mod auth;
mod commands;
mod generate;
mod styles;

pub use auth::save_credential;
pub use commands::{Cli, Commands, GenerateArgs, StylesArgs};
pub use generate::run_generate;
pub use styles::run_styles;

use std::path::Path;
use storyboard::{
    CredentialStore, GeminiBackend, GenerationClient, PipelineOptions, PipelineOrchestrator,
    PipelineProgress, PipelineStage, StoryboardConfig,
};

/// Build an orchestrator against Gemini from the loaded configuration.
///
/// Progress is echoed to stderr so it stays out of piped stdout.
pub(crate) fn gemini_pipeline(
    config: &StoryboardConfig,
) -> anyhow::Result<PipelineOrchestrator<GeminiBackend>> {
    let backend = GeminiBackend::from_credentials(&CredentialStore::load(), config.gemini.clone())?;
    let client = GenerationClient::new(backend, config.retry.clone());
    Ok(
        PipelineOrchestrator::new(client, PipelineOptions::from(&config.pipeline)).with_observer(
            |stage: &PipelineStage, progress: &PipelineProgress| {
                if let Some(message) = progress.message() {
                    eprintln!("[{}] {}", stage, message);
                }
            },
        ),
    )
}

/// Read a lyrics file.
pub(crate) async fn read_lyrics(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read lyrics from {}: {}", path.display(), e))
}
