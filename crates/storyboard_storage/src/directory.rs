//! Directory-backed exporter.

use std::path::{Path, PathBuf};
use storyboard_core::export::{self, MANIFEST_FILE_NAME};
use storyboard_core::{ExportEntry, ImageData, Storyboard, StoryboardManifest, VisualStyle};
use storyboard_error::{ExportError, ExportErrorKind, StoryboardResult};
use tracing::{debug, info, instrument, warn};

/// Files written by one export call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Pack directory
    pub directory: PathBuf,
    /// Every file written, in write order
    pub files: Vec<PathBuf>,
}

/// Writes storyboard packs under a root directory.
///
/// Each file is written to a temporary sibling and renamed into place, so a
/// reader never sees a partially written image.
#[derive(Debug, Clone)]
pub struct DirectoryExporter {
    root: PathBuf,
}

impl DirectoryExporter {
    /// Exporter writing packs under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the pack for `title` is written to.
    pub fn pack_dir(&self, title: &str) -> PathBuf {
        self.root.join(export::pack_name(title))
    }

    /// Write every shot, the thumbnail and the manifest.
    #[instrument(skip(self, storyboard, thumbnail), fields(scenes = storyboard.len()))]
    pub async fn export_storyboard(
        &self,
        title: &str,
        storyboard: &Storyboard,
        thumbnail: &ImageData,
    ) -> StoryboardResult<ExportReport> {
        let entries = export::export_entries(storyboard, thumbnail)?;
        let manifest = StoryboardManifest::new(title, storyboard).to_json_pretty()?;

        let directory = self.pack_dir(title);
        let mut files = self.write_entries(&directory, &entries).await?;
        files.push(write_atomic(&directory.join(MANIFEST_FILE_NAME), manifest.as_bytes()).await?);

        info!(directory = %directory.display(), files = files.len(), "Storyboard exported");
        Ok(ExportReport { directory, files })
    }

    /// Write a single shot into the pack.
    #[instrument(skip(self, storyboard))]
    pub async fn export_shot(
        &self,
        title: &str,
        storyboard: &Storyboard,
        index: usize,
    ) -> StoryboardResult<PathBuf> {
        let entry = export::shot_entry(storyboard, index)?;
        let directory = self.pack_dir(title);
        let mut files = self.write_entries(&directory, std::slice::from_ref(&entry)).await?;
        files.pop().ok_or_else(|| {
            ExportError::new(ExportErrorKind::FileWrite(entry.name.clone())).into()
        })
    }

    /// Write the style gallery: every style that has a preview image.
    #[instrument(skip(self, styles), fields(styles = styles.len()))]
    pub async fn export_styles(
        &self,
        title: &str,
        styles: &[VisualStyle],
    ) -> StoryboardResult<ExportReport> {
        let entries = export::style_entries(styles)?;
        let directory = self.pack_dir(title);
        let files = self.write_entries(&directory, &entries).await?;
        info!(directory = %directory.display(), files = files.len(), "Style gallery exported");
        Ok(ExportReport { directory, files })
    }

    async fn write_entries(
        &self,
        directory: &Path,
        entries: &[ExportEntry],
    ) -> StoryboardResult<Vec<PathBuf>> {
        tokio::fs::create_dir_all(directory).await.map_err(|e| {
            ExportError::new(ExportErrorKind::DirectoryCreation(format!(
                "{}: {}",
                directory.display(),
                e
            )))
        })?;

        let mut files = Vec::with_capacity(entries.len());
        for entry in entries {
            files.push(write_atomic(&directory.join(&entry.name), &entry.bytes).await?);
        }
        Ok(files)
    }
}

async fn write_atomic(path: &Path, bytes: &[u8]) -> StoryboardResult<PathBuf> {
    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, bytes).await.map_err(|e| {
        ExportError::new(ExportErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;
    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
            warn!(path = %temp_path.display(), error = %cleanup, "Failed to remove temp file");
        }
        return Err(ExportError::new(ExportErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
        .into());
    }

    debug!(path = %path.display(), size = bytes.len(), "File written");
    Ok(path.to_path_buf())
}
