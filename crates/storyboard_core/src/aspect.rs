//! Image aspect ratios and storyboard orientation.

use serde::{Deserialize, Serialize};

/// Aspect ratio directive sent with an image generation request.
///
/// # Examples
///
/// ```
/// use storyboard_core::AspectRatio;
///
/// assert_eq!(AspectRatio::Square.to_string(), "1:1");
/// assert_eq!("9:16".parse::<AspectRatio>().unwrap(), AspectRatio::Portrait);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum AspectRatio {
    /// 1:1, used for style preview images
    #[strum(serialize = "1:1")]
    #[serde(rename = "1:1")]
    Square,
    /// 16:9, used for horizontal storyboards and thumbnails
    #[strum(serialize = "16:9")]
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16, used for vertical storyboards
    #[strum(serialize = "9:16")]
    #[serde(rename = "9:16")]
    Portrait,
}

/// Orientation chosen for a storyboard's scene images.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Landscape frames (16:9)
    #[default]
    Horizontal,
    /// Portrait frames (9:16), for short-form video
    Vertical,
}

impl Orientation {
    /// The image aspect ratio scene images are generated at.
    pub fn aspect_ratio(self) -> AspectRatio {
        match self {
            Orientation::Horizontal => AspectRatio::Landscape,
            Orientation::Vertical => AspectRatio::Portrait,
        }
    }
}
