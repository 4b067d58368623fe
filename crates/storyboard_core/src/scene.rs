//! Storyboard scenes and the finished storyboard.

use crate::{ImageData, Orientation, SceneTimestamp, VisualStyle};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storyboard_error::{StoryboardResult, ValidationError, ValidationErrorKind};

/// One planned shot of the music video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardScene {
    /// Identifier assigned by the planner, independent of position
    pub id: u32,
    /// Sync point as a `mm:ss` code
    pub timestamp: String,
    /// Lyric fragment sung during this shot
    pub lyrics: String,
    /// Description for the image model
    pub visual_prompt: String,
    /// Description for a downstream video model
    pub video_prompt: String,
    /// Rendered still, once generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<ImageData>,
}

impl StoryboardScene {
    /// Return this scene with its rendered still attached.
    pub fn with_image(mut self, image: ImageData) -> Self {
        self.image_url = Some(image);
        self
    }

    /// Sync point in seconds, if the timestamp is readable.
    pub fn start_seconds(&self) -> Option<f64> {
        SceneTimestamp::parse_seconds(&self.timestamp)
    }
}

/// A complete storyboard: every scene imaged, in playback order.
///
/// Only built once all scene images exist, so a `Storyboard` is never
/// observed half populated. Scene images are replaced by producing a new
/// storyboard with [`Storyboard::with_scene_image`].
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct Storyboard {
    /// Scenes in playback order
    scenes: Vec<StoryboardScene>,
    /// Style every scene was rendered in
    style: VisualStyle,
    /// Frame orientation the scenes were rendered at
    orientation: Orientation,
}

impl Storyboard {
    /// Assemble a storyboard from imaged scenes.
    pub fn new(scenes: Vec<StoryboardScene>, style: VisualStyle, orientation: Orientation) -> Self {
        Self {
            scenes,
            style,
            orientation,
        }
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// True when the storyboard has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Scene at `index`, if in range.
    pub fn scene(&self, index: usize) -> Option<&StoryboardScene> {
        self.scenes.get(index)
    }

    /// Reject an index outside the scene list.
    pub fn check_index(&self, index: usize) -> StoryboardResult<()> {
        if index < self.scenes.len() {
            Ok(())
        } else {
            Err(ValidationError::new(ValidationErrorKind::SceneIndexOutOfRange {
                index,
                len: self.scenes.len(),
            })
            .into())
        }
    }

    /// Copy of this storyboard with only scene `index`'s image replaced.
    pub fn with_scene_image(&self, index: usize, image: ImageData) -> StoryboardResult<Storyboard> {
        self.check_index(index)?;
        let mut updated = self.clone();
        updated.scenes[index].image_url = Some(image);
        Ok(updated)
    }

    /// Index of the scene playing at `seconds`: the last scene whose sync point
    /// is at or before that position. Scenes with unreadable timestamps are skipped.
    pub fn scene_index_at(&self, seconds: f64) -> Option<usize> {
        self.scenes
            .iter()
            .enumerate()
            .filter_map(|(index, scene)| scene.start_seconds().map(|start| (index, start)))
            .filter(|(_, start)| *start <= seconds)
            .map(|(index, _)| index)
            .last()
    }
}
