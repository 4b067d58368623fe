//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use storyboard::Orientation;

/// Storyboard - turn a song into a fully imaged music-video storyboard
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn a song into a fully imaged music-video storyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Load configuration from this file instead of the layered defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save the Gemini API key
    Auth {
        /// API key to store; read from stdin when omitted
        key: Option<String>,
    },

    /// Analyze a song and print its style catalog
    Styles(StylesArgs),

    /// Run the full pipeline and export the storyboard pack
    Generate(GenerateArgs),
}

/// Arguments of the `styles` command
#[derive(Args, Debug)]
pub struct StylesArgs {
    /// Song title
    #[arg(long)]
    pub title: String,

    /// File containing the lyrics
    #[arg(long)]
    pub lyrics: PathBuf,

    /// Additional style batches to generate after the analysis
    #[arg(long, default_value = "0")]
    pub more: usize,

    /// Write the style preview images under this directory
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments of the `generate` command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Song title
    #[arg(long)]
    pub title: String,

    /// File containing the lyrics
    #[arg(long)]
    pub lyrics: PathBuf,

    /// Song duration in seconds
    #[arg(long)]
    pub duration: f64,

    /// Audio track the storyboard is timed against
    #[arg(long)]
    pub audio: Option<PathBuf>,

    /// Style to build with, as its 1-based position in the catalog
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub style: Option<u64>,

    /// Frame orientation of the scene images
    #[arg(long, default_value = "horizontal")]
    pub orientation: Orientation,

    /// Director notes passed to the planner
    #[arg(long)]
    pub notes: Option<String>,

    /// Shots to regenerate from a new angle, as 1-based positions
    #[arg(long, num_args = 1.., value_parser = clap::value_parser!(u64).range(1..))]
    pub regenerate: Vec<u64>,

    /// Directory the pack is written under
    #[arg(long)]
    pub out: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_arguments() {
        let cli = Cli::try_parse_from([
            "storyboard",
            "--verbose",
            "generate",
            "--title",
            "Night Drive",
            "--lyrics",
            "lyrics.txt",
            "--duration",
            "200",
            "--orientation",
            "vertical",
            "--regenerate",
            "1",
            "3",
            "--out",
            "packs",
        ])
        .unwrap();

        assert!(cli.verbose);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.orientation, Orientation::Vertical);
        assert_eq!(args.regenerate, vec![1, 3]);
        assert_eq!(args.duration, 200.0);
        assert!(args.style.is_none());
    }

    #[test]
    fn test_style_position_is_one_based() {
        let result = Cli::try_parse_from([
            "storyboard", "generate", "--title", "T", "--lyrics", "l.txt", "--duration", "10",
            "--style", "0", "--out", "o",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_auth_key_is_optional() {
        let cli = Cli::try_parse_from(["storyboard", "auth"]).unwrap();
        assert!(matches!(cli.command, Commands::Auth { key: None }));

        let cli = Cli::try_parse_from(["storyboard", "auth", "abc"]).unwrap();
        assert!(matches!(cli.command, Commands::Auth { key: Some(ref k) } if k == "abc"));
    }

    #[test]
    fn test_styles_defaults() {
        let cli =
            Cli::try_parse_from(["storyboard", "styles", "--title", "T", "--lyrics", "l.txt"])
                .unwrap();
        let Commands::Styles(args) = cli.command else {
            panic!("expected styles");
        };
        assert_eq!(args.more, 0);
        assert!(args.out.is_none());
        assert!(!cli.json_logs);
    }
}
