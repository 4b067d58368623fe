//! Song input supplied by the user.

use serde::{Deserialize, Serialize};

/// The song a storyboard is generated for.
///
/// Title and lyrics are fixed once an analysis run starts; the duration arrives
/// later, when the audio track's metadata is known.
///
/// # Examples
///
/// ```
/// use storyboard_core::SongInput;
///
/// let song = SongInput::new("Night Drive", "City lights in the rear view...");
/// assert_eq!(song.duration_seconds, 0.0);
/// assert!(song.audio_track.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInput {
    /// Song title
    pub title: String,
    /// Full lyrics
    pub lyrics: String,
    /// Reference to the audio track (path or URL), if one was chosen
    pub audio_track: Option<String>,
    /// Playable duration in seconds, 0.0 until known
    pub duration_seconds: f64,
}

impl SongInput {
    /// Create song input with no audio track and unknown duration.
    pub fn new(title: impl Into<String>, lyrics: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lyrics: lyrics.into(),
            audio_track: None,
            duration_seconds: 0.0,
        }
    }
}
