//! Core data types for the storyboard generation pipeline.
//!
//! This crate provides the in-memory data model accumulated while a song is turned
//! into an illustrated music-video storyboard: the song input, its analysis, the
//! visual style catalog, scenes, and the finished storyboard. It also names and
//! decodes the files a finished storyboard exports to.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod aspect;
pub mod export;
mod image;
mod progress;
mod scene;
mod song;
mod style;
mod timestamp;

pub use analysis::SongAnalysis;
pub use aspect::{AspectRatio, Orientation};
pub use export::{ExportEntry, StoryboardManifest};
pub use image::ImageData;
pub use progress::PipelineProgress;
pub use scene::{Storyboard, StoryboardScene};
pub use song::SongInput;
pub use style::{StyleId, VisualStyle};
pub use timestamp::SceneTimestamp;
