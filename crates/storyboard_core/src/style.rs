//! Visual style catalog entries.

use crate::ImageData;
use serde::{Deserialize, Serialize};

/// Stable, session-unique identifier of a visual style.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct StyleId(String);

impl StyleId {
    /// Wrap an id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A proposed art direction for the video.
///
/// The preview image is attached only after the style record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStyle {
    /// Unique id across the whole style catalog
    pub id: StyleId,
    /// Short display name
    pub name: String,
    /// What the style looks and feels like
    pub description: String,
    /// Prompt fed to image generation for the preview and every scene
    pub image_prompt: String,
    /// Preview image, once generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<ImageData>,
}

impl VisualStyle {
    /// Return this style with its preview image attached.
    pub fn with_image(mut self, image: ImageData) -> Self {
        self.image_url = Some(image);
        self
    }

    /// True once a preview image is attached.
    pub fn has_image(&self) -> bool {
        self.image_url.as_ref().is_some_and(|image| !image.is_empty())
    }
}
