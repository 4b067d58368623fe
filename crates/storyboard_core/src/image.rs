//! Generated image payloads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use storyboard_error::{ExportError, ExportErrorKind, StoryboardResult};

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// An encoded still image, held as a PNG data URI.
///
/// # Examples
///
/// ```
/// use storyboard_core::ImageData;
///
/// let image = ImageData::from_png_base64("iVBORw0KGgo=");
/// assert_eq!(image.as_data_uri(), "data:image/png;base64,iVBORw0KGgo=");
/// assert_eq!(image.base64_payload(), "iVBORw0KGgo=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageData(String);

impl ImageData {
    /// Wrap base64-encoded PNG bytes in a data URI.
    pub fn from_png_base64(payload: impl AsRef<str>) -> Self {
        Self(format!("{}{}", PNG_DATA_URI_PREFIX, payload.as_ref()))
    }

    /// The full `data:` URI.
    pub fn as_data_uri(&self) -> &str {
        &self.0
    }

    /// The base64 payload after the data URI header.
    pub fn base64_payload(&self) -> &str {
        self.0
            .split_once(',')
            .map(|(_, payload)| payload)
            .unwrap_or(&self.0)
    }

    /// True when the image carries no payload.
    pub fn is_empty(&self) -> bool {
        self.base64_payload().is_empty()
    }

    /// Decode the payload into raw image bytes.
    pub fn decode(&self) -> StoryboardResult<Vec<u8>> {
        STANDARD.decode(self.base64_payload()).map_err(|e| {
            ExportError::new(ExportErrorKind::ImageDecode(e.to_string())).into()
        })
    }
}
