//! Request and response types exchanged with a backend.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storyboard_core::{AspectRatio, ImageData};

/// A prompt whose answer must be JSON matching `schema`.
///
/// # Examples
///
/// ```
/// use storyboard_interface::StructuredRequestBuilder;
///
/// let request = StructuredRequestBuilder::default()
///     .prompt("Analyze this song")
///     .schema(serde_json::json!({"type": "OBJECT"}))
///     .build()
///     .unwrap();
///
/// assert!(request.model().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct StructuredRequest {
    /// Model override; the backend's text model when absent
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    model: Option<String>,

    /// Full prompt text
    prompt: String,

    /// Response schema in the provider's schema dialect
    schema: serde_json::Value,
}

impl StructuredRequest {
    /// Request against the backend's default text model.
    pub fn new(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            schema,
        }
    }

    /// Creates a new builder for `StructuredRequest`.
    pub fn builder() -> StructuredRequestBuilder {
        StructuredRequestBuilder::default()
    }
}

/// A prompt for a single still image.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Model override; the backend's image model when absent
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    model: Option<String>,

    /// Full prompt text
    prompt: String,

    /// Declared aspect ratio of the image
    aspect_ratio: AspectRatio,
}

impl ImageRequest {
    /// Request against the backend's default image model.
    pub fn new(prompt: impl Into<String>, aspect_ratio: AspectRatio) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            aspect_ratio,
        }
    }

    /// Creates a new builder for `ImageRequest`.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// One part of a generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponsePart {
    /// Text emitted alongside (or instead of) an image
    Text(String),
    /// Inline binary payload, base64 encoded
    InlineData {
        /// MIME type reported by the provider
        mime_type: String,
        /// Base64 payload
        data: String,
    },
}

/// Raw parts returned for an image request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageResponse {
    /// Parts in provider order
    pub parts: Vec<ResponsePart>,
}

impl ImageResponse {
    /// Response holding a single inline PNG payload.
    pub fn png(data: impl Into<String>) -> Self {
        Self {
            parts: vec![ResponsePart::InlineData {
                mime_type: "image/png".to_string(),
                data: data.into(),
            }],
        }
    }

    /// The first non-empty inline payload, as a PNG data URI.
    pub fn first_image(&self) -> Option<ImageData> {
        self.parts.iter().find_map(|part| match part {
            ResponsePart::InlineData { data, .. } if !data.is_empty() => {
                Some(ImageData::from_png_base64(data))
            }
            _ => None,
        })
    }
}
