//! Export naming and packaging of a finished storyboard.
//!
//! Archival is left to the caller: this module turns a storyboard into named
//! byte entries and a JSON manifest, and `storyboard_storage` writes them out.

use crate::{ImageData, Orientation, Storyboard, VisualStyle};
use serde::{Deserialize, Serialize};
use storyboard_error::{ExportError, ExportErrorKind, StoryboardResult};

/// File name of the thumbnail entry.
pub const THUMBNAIL_FILE_NAME: &str = "youtube_thumbnail.png";

/// File name of the manifest written next to the images.
pub const MANIFEST_FILE_NAME: &str = "storyboard.json";

/// One named file of an export pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    /// Filesystem-safe file name
    pub name: String,
    /// Decoded file contents
    pub bytes: Vec<u8>,
}

/// Directory name for a song's export pack.
///
/// ```
/// use storyboard_core::export::pack_name;
///
/// assert_eq!(pack_name("Night  Drive"), "Night_Drive_storyboard");
/// ```
pub fn pack_name(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    let base = if words.is_empty() {
        "untitled".to_string()
    } else {
        sanitize_component(&words.join("_"))
    };
    format!("{}_storyboard", base)
}

/// Map a string to a filesystem-safe name component.
///
/// `:` becomes `-`; anything other than ASCII alphanumerics, `-`, `_` and `.`
/// becomes `_`.
pub fn sanitize_component(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ':' => '-',
            c if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') => c,
            _ => '_',
        })
        .collect()
}

/// File name for the shot at zero-based `index`.
///
/// ```
/// use storyboard_core::export::shot_file_name;
///
/// assert_eq!(shot_file_name(0, "01:30"), "shot_1_01-30.png");
/// ```
pub fn shot_file_name(index: usize, timestamp: &str) -> String {
    format!("shot_{}_{}.png", index + 1, sanitize_component(timestamp))
}

/// File name for the style preview at zero-based `index`.
pub fn style_file_name(index: usize, style_name: &str) -> String {
    let words: Vec<String> = style_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    let slug = sanitize_component(&words.join("_"));
    format!("style_{}_{}.png", index + 1, slug)
}

fn decode(image: Option<&ImageData>, name: &str) -> StoryboardResult<Vec<u8>> {
    match image {
        Some(image) if !image.is_empty() => image.decode(),
        _ => Err(ExportError::new(ExportErrorKind::ImageDecode(format!(
            "{} has no image",
            name
        )))
        .into()),
    }
}

/// Entry for a single shot.
pub fn shot_entry(storyboard: &Storyboard, index: usize) -> StoryboardResult<ExportEntry> {
    storyboard.check_index(index)?;
    let scene = &storyboard.scenes()[index];
    let name = shot_file_name(index, &scene.timestamp);
    let bytes = decode(scene.image_url.as_ref(), &name)?;
    Ok(ExportEntry { name, bytes })
}

/// Entries for every shot in playback order, followed by the thumbnail.
pub fn export_entries(
    storyboard: &Storyboard,
    thumbnail: &ImageData,
) -> StoryboardResult<Vec<ExportEntry>> {
    let mut entries = (0..storyboard.len())
        .map(|index| shot_entry(storyboard, index))
        .collect::<StoryboardResult<Vec<_>>>()?;
    entries.push(ExportEntry {
        name: THUMBNAIL_FILE_NAME.to_string(),
        bytes: decode(Some(thumbnail), THUMBNAIL_FILE_NAME)?,
    });
    Ok(entries)
}

/// Entries for every style preview that has an image.
pub fn style_entries(styles: &[VisualStyle]) -> StoryboardResult<Vec<ExportEntry>> {
    styles
        .iter()
        .enumerate()
        .filter(|(_, style)| style.has_image())
        .map(|(index, style)| {
            let name = style_file_name(index, &style.name);
            let bytes = decode(style.image_url.as_ref(), &name)?;
            Ok(ExportEntry { name, bytes })
        })
        .collect()
}

/// Manifest row for one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestScene {
    /// Planner-assigned scene id
    pub id: u32,
    /// Sync point code
    pub timestamp: String,
    /// Lyric fragment
    pub lyrics: String,
    /// Image prompt used for the shot
    pub visual_prompt: String,
    /// Prompt for a downstream video model
    pub video_prompt: String,
    /// Image file name inside the pack
    pub image_file: String,
}

/// JSON description of an exported storyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryboardManifest {
    /// Song title
    pub title: String,
    /// Style name
    pub style: String,
    /// Style description
    pub style_description: String,
    /// Frame orientation
    pub orientation: Orientation,
    /// Thumbnail file name
    pub thumbnail_file: String,
    /// Scene rows in playback order
    pub scenes: Vec<ManifestScene>,
}

impl StoryboardManifest {
    /// Describe `storyboard` for the song `title`.
    pub fn new(title: &str, storyboard: &Storyboard) -> Self {
        let scenes = storyboard
            .scenes()
            .iter()
            .enumerate()
            .map(|(index, scene)| ManifestScene {
                id: scene.id,
                timestamp: scene.timestamp.clone(),
                lyrics: scene.lyrics.clone(),
                visual_prompt: scene.visual_prompt.clone(),
                video_prompt: scene.video_prompt.clone(),
                image_file: shot_file_name(index, &scene.timestamp),
            })
            .collect();
        Self {
            title: title.to_string(),
            style: storyboard.style().name.clone(),
            style_description: storyboard.style().description.clone(),
            orientation: *storyboard.orientation(),
            thumbnail_file: THUMBNAIL_FILE_NAME.to_string(),
            scenes,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> StoryboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ExportError::new(ExportErrorKind::Serialization(e.to_string())).into()
        })
    }
}
