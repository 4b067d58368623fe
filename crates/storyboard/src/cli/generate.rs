//! Full pipeline command handler.

use super::{GenerateArgs, gemini_pipeline, read_lyrics};
use storyboard::{DirectoryExporter, SceneTimestamp, StoryboardConfig};
use tracing::info;

/// Analyze, build, regenerate the requested shots and export the pack.
pub async fn run_generate(config: &StoryboardConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let lyrics = read_lyrics(&args.lyrics).await?;
    let mut pipeline = gemini_pipeline(config)?;

    pipeline.run_analysis(&args.title, &lyrics).await?;

    let state = pipeline.state_mut();
    if let Some(position) = args.style {
        state.select_style_at(position as usize - 1)?;
    }
    state.set_duration(args.duration)?;
    state.set_orientation(args.orientation);
    if let Some(audio) = &args.audio {
        state.set_audio_track(audio.display().to_string());
    }
    if let Some(notes) = &args.notes {
        state.set_director_notes(notes.as_str());
    }

    pipeline.build_storyboard().await?;
    for position in &args.regenerate {
        pipeline.regenerate_shot(*position as usize - 1).await?;
    }

    let state = pipeline.state();
    let (Some(storyboard), Some(thumbnail)) = (state.storyboard(), state.thumbnail()) else {
        anyhow::bail!("storyboard was not published");
    };
    let report = DirectoryExporter::new(&args.out)
        .export_storyboard(&args.title, storyboard, thumbnail)
        .await?;

    info!(
        scenes = storyboard.len(),
        style = %storyboard.style().name,
        directory = %report.directory.display(),
        "Storyboard exported"
    );
    println!(
        "Wrote {} files ({} shots over {} in {}) to {}",
        report.files.len(),
        storyboard.len(),
        SceneTimestamp::format(args.duration),
        storyboard.style().name,
        report.directory.display()
    );
    Ok(())
}
