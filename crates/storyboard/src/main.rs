//! Storyboard CLI binary.
//!
//! This binary provides command-line access to the storyboard pipeline:
//! - Store the Gemini credential
//! - Explore a song's style catalog
//! - Generate and export a complete storyboard pack

use clap::Parser;
use storyboard::logging::{LoggingConfig, init_logging};
use storyboard::{StoryboardConfig, StoryboardError};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_generate, run_styles, save_credential};

    // Load .env before the credential store reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(&LoggingConfig::from_flags(cli.verbose, cli.json_logs))?;

    let config = match &cli.config {
        Some(path) => StoryboardConfig::from_file(path)?,
        None => StoryboardConfig::load()?,
    };

    let result = match cli.command {
        Commands::Auth { key } => save_credential(key.as_deref()),
        Commands::Styles(args) => run_styles(&config, args).await,
        Commands::Generate(args) => run_generate(&config, args).await,
    };

    if let Err(e) = &result {
        let credential_rejected = e
            .downcast_ref::<StoryboardError>()
            .is_some_and(StoryboardError::is_credential_invalid);
        if credential_rejected {
            eprintln!("The Gemini API key is missing or was rejected. Run `storyboard auth` to set it.");
        }
    }

    result.map_err(Into::into)
}
