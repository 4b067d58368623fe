//! Structured response payloads and their validation.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use storyboard_core::{StoryboardScene, StyleId, VisualStyle};
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StylePayload {
    pub name: String,
    pub description: String,
    pub image_prompt: String,
}

impl StylePayload {
    pub fn into_style(self, id: StyleId) -> VisualStyle {
        VisualStyle {
            id,
            name: self.name,
            description: self.description,
            image_prompt: self.image_prompt,
            image_url: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalysisPayload {
    pub genre: String,
    pub bpm: f64,
    pub synopsis: String,
    pub character_design: String,
    pub visual_consistency_guide: String,
    pub suggested_styles: Vec<StylePayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoreStylesPayload {
    pub styles: Vec<StylePayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlanPayload {
    pub scenes: Vec<ScenePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScenePayload {
    #[serde(deserialize_with = "scene_id")]
    pub id: u32,
    pub timestamp: String,
    pub lyrics: String,
    pub visual_prompt: String,
    pub video_prompt: String,
}

impl From<ScenePayload> for StoryboardScene {
    fn from(payload: ScenePayload) -> Self {
        StoryboardScene {
            id: payload.id,
            timestamp: payload.timestamp,
            lyrics: payload.lyrics,
            visual_prompt: payload.visual_prompt,
            video_prompt: payload.video_prompt,
            image_url: None,
        }
    }
}

/// Scene ids arrive as JSON numbers; accept any non-negative integral value.
fn scene_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(D::Error::custom(format!("scene id {} is not a non-negative integer", value)))
    }
}

pub(crate) fn malformed(message: impl Into<String>) -> GenerationError {
    GenerationError::new(GenerationErrorKind::MalformedResponse(message.into()))
}

/// Decode structured JSON text into `T`.
pub(crate) fn parse<T: DeserializeOwned>(text: &str, what: &str) -> StoryboardResult<T> {
    serde_json::from_str(text.trim())
        .map_err(|e| malformed(format!("{} response did not match schema: {}", what, e)).into())
}
