//! In-memory project state.

use storyboard_core::{
    ImageData, Orientation, PipelineProgress, SongAnalysis, SongInput, Storyboard,
    StoryboardScene, StyleId, VisualStyle,
};
use storyboard_error::{StoryboardResult, ValidationError, ValidationErrorKind};
use tracing::debug;

/// Everything accumulated during one session.
///
/// Public methods are the user's selection actions and are validated.
/// Generation results are published by the orchestrator only, each as a
/// whole, so readers never see a partially built analysis or storyboard.
#[derive(Debug, Clone, Default)]
pub struct ProjectState {
    song: SongInput,
    analysis: Option<SongAnalysis>,
    selected_style: Option<StyleId>,
    storyboard: Option<Storyboard>,
    thumbnail: Option<ImageData>,
    active_scene: usize,
    director_notes: String,
    orientation: Orientation,
    progress: PipelineProgress,
}

impl ProjectState {
    /// Song input of the current analysis.
    pub fn song(&self) -> &SongInput {
        &self.song
    }

    /// Published analysis, if any.
    pub fn analysis(&self) -> Option<&SongAnalysis> {
        self.analysis.as_ref()
    }

    /// Id of the selected style, if any.
    pub fn selected_style_id(&self) -> Option<&StyleId> {
        self.selected_style.as_ref()
    }

    /// The selected style record.
    pub fn selected_style(&self) -> Option<&VisualStyle> {
        let id = self.selected_style.as_ref()?;
        self.analysis.as_ref()?.style(id)
    }

    /// Published storyboard, if any.
    pub fn storyboard(&self) -> Option<&Storyboard> {
        self.storyboard.as_ref()
    }

    /// Published thumbnail, if any.
    pub fn thumbnail(&self) -> Option<&ImageData> {
        self.thumbnail.as_ref()
    }

    /// Index of the scene being viewed.
    pub fn active_scene_index(&self) -> usize {
        self.active_scene
    }

    /// The scene being viewed, once a storyboard exists.
    pub fn active_scene(&self) -> Option<&StoryboardScene> {
        self.storyboard.as_ref()?.scene(self.active_scene)
    }

    /// Index of the scene playing at `seconds` into the song.
    pub fn scene_at(&self, seconds: f64) -> Option<usize> {
        self.storyboard.as_ref()?.scene_index_at(seconds)
    }

    /// Free-text notes passed to the planner.
    pub fn director_notes(&self) -> &str {
        &self.director_notes
    }

    /// Orientation the next storyboard is rendered at.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Status of the operation in flight.
    pub fn progress(&self) -> &PipelineProgress {
        &self.progress
    }

    /// True while an operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.progress.is_active()
    }

    /// Select a style from the catalog.
    pub fn select_style(&mut self, id: &StyleId) -> StoryboardResult<()> {
        let analysis = self
            .analysis
            .as_ref()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingAnalysis))?;
        if analysis.style(id).is_none() {
            return Err(ValidationError::new(ValidationErrorKind::UnknownStyle(id.to_string())).into());
        }
        debug!(style = %id, "Style selected");
        self.selected_style = Some(id.clone());
        Ok(())
    }

    /// Select the style at catalog position `index`.
    pub fn select_style_at(&mut self, index: usize) -> StoryboardResult<()> {
        let id = self
            .analysis
            .as_ref()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingAnalysis))?
            .suggested_styles
            .get(index)
            .map(|style| style.id.clone())
            .ok_or_else(|| {
                ValidationError::new(ValidationErrorKind::UnknownStyle(format!("#{}", index + 1)))
            })?;
        self.select_style(&id)
    }

    /// Move the viewed scene to `index`.
    pub fn set_active_scene(&mut self, index: usize) -> StoryboardResult<()> {
        let storyboard = self
            .storyboard
            .as_ref()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingStoryboard))?;
        storyboard.check_index(index)?;
        self.active_scene = index;
        Ok(())
    }

    /// Step to the next scene, stopping at the last.
    pub fn next_scene(&mut self) -> usize {
        if let Some(storyboard) = &self.storyboard {
            self.active_scene = (self.active_scene + 1).min(storyboard.len().saturating_sub(1));
        }
        self.active_scene
    }

    /// Step to the previous scene, stopping at the first.
    pub fn previous_scene(&mut self) -> usize {
        self.active_scene = self.active_scene.saturating_sub(1);
        self.active_scene
    }

    /// Replace the director notes.
    pub fn set_director_notes(&mut self, notes: impl Into<String>) {
        self.director_notes = notes.into();
    }

    /// Choose the orientation for the next storyboard.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Attach an audio track reference.
    pub fn set_audio_track(&mut self, reference: impl Into<String>) {
        self.song.audio_track = Some(reference.into());
    }

    /// Record the playable duration once known.
    pub fn set_duration(&mut self, seconds: f64) -> StoryboardResult<()> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ValidationError::new(ValidationErrorKind::InvalidDuration(seconds.to_string())).into());
        }
        self.song.duration_seconds = seconds;
        Ok(())
    }

    pub(crate) fn set_progress(&mut self, progress: PipelineProgress) {
        self.progress = progress;
    }

    /// Publish a fresh analysis. Any storyboard belongs to the previous
    /// analysis and is dropped.
    pub(crate) fn publish_analysis(&mut self, title: &str, lyrics: &str, analysis: SongAnalysis) {
        self.song.title = title.to_string();
        self.song.lyrics = lyrics.to_string();
        self.selected_style = analysis.suggested_styles.first().map(|style| style.id.clone());
        self.analysis = Some(analysis);
        self.storyboard = None;
        self.thumbnail = None;
        self.active_scene = 0;
    }

    pub(crate) fn append_styles(&mut self, styles: Vec<VisualStyle>) {
        if let Some(analysis) = self.analysis.take() {
            self.analysis = Some(analysis.with_appended_styles(styles));
        }
    }

    pub(crate) fn publish_storyboard(&mut self, storyboard: Storyboard, thumbnail: ImageData) {
        self.storyboard = Some(storyboard);
        self.thumbnail = Some(thumbnail);
        self.active_scene = 0;
    }

    pub(crate) fn replace_storyboard(&mut self, storyboard: Storyboard) {
        self.active_scene = self.active_scene.min(storyboard.len().saturating_sub(1));
        self.storyboard = Some(storyboard);
    }
}
