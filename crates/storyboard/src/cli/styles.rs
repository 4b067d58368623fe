//! Style catalog command handler.

use super::{StylesArgs, gemini_pipeline, read_lyrics};
use storyboard::{DirectoryExporter, StoryboardConfig};
use tracing::info;

/// Analyze the song, grow the catalog `args.more` times and print it.
pub async fn run_styles(config: &StoryboardConfig, args: StylesArgs) -> anyhow::Result<()> {
    let lyrics = read_lyrics(&args.lyrics).await?;
    let mut pipeline = gemini_pipeline(config)?;

    pipeline.run_analysis(&args.title, &lyrics).await?;
    for _ in 0..args.more {
        pipeline.run_more_styles().await?;
    }

    let analysis = pipeline
        .state()
        .analysis()
        .ok_or_else(|| anyhow::anyhow!("analysis was not published"))?;
    println!("{} ({} bpm)", analysis.genre, analysis.bpm);
    println!("{}", analysis.synopsis);
    println!();
    for (i, style) in analysis.suggested_styles.iter().enumerate() {
        println!("{:>2}. {} - {}", i + 1, style.name, style.description);
    }

    if let Some(out) = &args.out {
        let report = DirectoryExporter::new(out)
            .export_styles(&args.title, &analysis.suggested_styles)
            .await?;
        info!(files = report.files.len(), "Style gallery written");
        println!("\nWrote {} style images to {}", report.files.len(), report.directory.display());
    }
    Ok(())
}
