//! The generation orchestrator.

use crate::{PipelineStage, ProgressObserver, ProjectState};
use std::time::Duration;
use storyboard_core::{
    AspectRatio, ImageData, Orientation, PipelineProgress, SongAnalysis, Storyboard,
    StoryboardScene, VisualStyle,
};
use storyboard_error::{StoryboardError, StoryboardResult, ValidationError, ValidationErrorKind};
use storyboard_interface::GenerationBackend;
use storyboard_models::{GenerationClient, PlanRequest, prompts};
use storyboard_retry::PipelineSettings;
use tracing::{info, instrument, warn};

/// Orchestration tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Pause between consecutive scene image requests
    pub scene_pause: Duration,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            scene_pause: Duration::from_millis(100),
        }
    }
}

impl From<&PipelineSettings> for PipelineOptions {
    fn from(settings: &PipelineSettings) -> Self {
        Self {
            scene_pause: settings.scene_pause(),
        }
    }
}

/// Sequences the generation flow and owns the project state.
///
/// Every operation issues its remote calls strictly one after another and
/// takes `&mut self`, so only one operation can be in flight. Results are
/// assembled locally and published to [`ProjectState`] only on success; on
/// failure the state and stage are left as they were before the call.
pub struct PipelineOrchestrator<B> {
    client: GenerationClient<B>,
    state: ProjectState,
    stage: PipelineStage,
    options: PipelineOptions,
    observers: Vec<Box<dyn ProgressObserver>>,
}

impl<B> std::fmt::Debug for PipelineOrchestrator<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineOrchestrator")
            .field("stage", &self.stage)
            .field("options", &self.options)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

fn require_text(value: &str, kind: ValidationErrorKind) -> StoryboardResult<()> {
    if value.trim().is_empty() {
        Err(ValidationError::new(kind).into())
    } else {
        Ok(())
    }
}

impl<B: GenerationBackend> PipelineOrchestrator<B> {
    /// Create an orchestrator with empty project state.
    pub fn new(client: GenerationClient<B>, options: PipelineOptions) -> Self {
        Self {
            client,
            state: ProjectState::default(),
            stage: PipelineStage::Idle,
            options,
            observers: Vec::new(),
        }
    }

    /// Register a progress observer.
    pub fn with_observer(mut self, observer: impl ProgressObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Read the project state.
    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    /// Apply user selection actions to the project state.
    pub fn state_mut(&mut self) -> &mut ProjectState {
        &mut self.state
    }

    /// Current stage.
    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    fn enter(&mut self, stage: PipelineStage, message: impl Into<String>) {
        let progress = PipelineProgress::active(message);
        info!(stage = %stage, progress = progress.message().unwrap_or_default(), "Pipeline progress");
        self.stage = stage;
        self.state.set_progress(progress);
        self.notify();
    }

    fn settle(&mut self, stage: PipelineStage) {
        self.stage = stage;
        self.state.set_progress(PipelineProgress::idle());
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_progress(&self.stage, self.state.progress());
        }
    }

    /// Return to `prior` after a failed operation.
    fn fail(&mut self, error: StoryboardError, prior: PipelineStage) -> StoryboardError {
        warn!(error = %error, stage = %self.stage, "Pipeline operation failed");
        self.settle(prior);
        error
    }

    /// Image each style in order, returning them with previews attached.
    async fn image_styles(&mut self, styles: Vec<VisualStyle>) -> StoryboardResult<Vec<VisualStyle>> {
        let total = styles.len();
        let mut imaged = Vec::with_capacity(total);
        for (index, style) in styles.into_iter().enumerate() {
            self.enter(
                PipelineStage::StyleImaging { index, total },
                format!("Generating style {} of {}: {}...", index + 1, total, style.name),
            );
            let image = self
                .client
                .generate_image(&style.image_prompt, AspectRatio::Square)
                .await?;
            imaged.push(style.with_image(image));
        }
        Ok(imaged)
    }

    /// Analyze a song and image its proposed styles.
    ///
    /// On success the analysis is published with its first style selected.
    /// On failure nothing is published.
    #[instrument(skip(self, lyrics))]
    pub async fn run_analysis(&mut self, title: &str, lyrics: &str) -> StoryboardResult<()> {
        require_text(title, ValidationErrorKind::EmptyTitle)?;
        require_text(lyrics, ValidationErrorKind::EmptyLyrics)?;

        let prior = self.stage;
        self.enter(PipelineStage::Analyzing, "Analyzing song and structuring the narrative...");
        let analysis = match self.analyze(title, lyrics).await {
            Ok(analysis) => analysis,
            Err(e) => return Err(self.fail(e, prior)),
        };

        info!(styles = analysis.suggested_styles.len(), "Analysis published");
        self.state.publish_analysis(title, lyrics, analysis);
        self.settle(PipelineStage::AnalysisReady);
        Ok(())
    }

    async fn analyze(&mut self, title: &str, lyrics: &str) -> StoryboardResult<SongAnalysis> {
        let mut analysis = self.client.analyze_song(title, lyrics).await?;
        let styles = std::mem::take(&mut analysis.suggested_styles);
        analysis.suggested_styles = self.image_styles(styles).await?;
        Ok(analysis)
    }

    /// Generate and image another batch of styles for the current analysis.
    ///
    /// New styles are appended after the existing catalog; on failure the
    /// whole batch is discarded.
    #[instrument(skip(self))]
    pub async fn run_more_styles(&mut self) -> StoryboardResult<usize> {
        let analysis = self
            .state
            .analysis()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingAnalysis))?;
        let existing_names = analysis.style_names();
        let song = self.state.song().clone();

        let prior = self.stage;
        self.enter(PipelineStage::GeneratingMoreStyles, "Exploring new art directions...");
        let styles = match self.more_styles(&song.title, &song.lyrics, &existing_names).await {
            Ok(styles) => styles,
            Err(e) => return Err(self.fail(e, prior)),
        };

        let added = styles.len();
        info!(added, "Styles appended");
        self.state.append_styles(styles);
        self.settle(prior);
        Ok(added)
    }

    async fn more_styles(
        &mut self,
        title: &str,
        lyrics: &str,
        existing_names: &[String],
    ) -> StoryboardResult<Vec<VisualStyle>> {
        let styles = self
            .client
            .generate_more_styles(title, lyrics, existing_names)
            .await?;
        self.image_styles(styles).await
    }

    /// Plan the storyboard for the selected style and image every scene and
    /// the thumbnail.
    ///
    /// The duration, director notes and orientation come from the project
    /// state. The storyboard and thumbnail are published together, only once
    /// the thumbnail exists.
    #[instrument(skip(self))]
    pub async fn build_storyboard(&mut self) -> StoryboardResult<()> {
        let analysis = self
            .state
            .analysis()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingAnalysis))?
            .clone();
        let style = self
            .state
            .selected_style()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::NoSelectedStyle))?
            .clone();
        let song = self.state.song().clone();
        let notes = self.state.director_notes().to_string();
        let orientation = self.state.orientation();

        let prior = self.stage;
        self.enter(PipelineStage::Planning, "Writing the cinematic shot list...");
        let request = PlanRequest {
            title: &song.title,
            lyrics: &song.lyrics,
            duration_seconds: song.duration_seconds,
            style: &style,
            analysis: &analysis,
            director_notes: Some(notes.as_str()),
        };
        let (scenes, thumbnail) = match self.assemble_storyboard(&request, orientation).await {
            Ok(assembled) => assembled,
            Err(e) => return Err(self.fail(e, prior)),
        };

        info!(scenes = scenes.len(), %orientation, "Storyboard published");
        self.state
            .publish_storyboard(Storyboard::new(scenes, style, orientation), thumbnail);
        self.settle(PipelineStage::StoryboardReady);
        Ok(())
    }

    async fn assemble_storyboard(
        &mut self,
        request: &PlanRequest<'_>,
        orientation: Orientation,
    ) -> StoryboardResult<(Vec<StoryboardScene>, ImageData)> {
        let plan = self.client.plan_storyboard(request).await?;

        let total = plan.len();
        let mut scenes = Vec::with_capacity(total);
        for (index, scene) in plan.into_iter().enumerate() {
            if index > 0 && !self.options.scene_pause.is_zero() {
                tokio::time::sleep(self.options.scene_pause).await;
            }
            self.enter(
                PipelineStage::SceneImaging { index, total },
                format!("Generating shot {} of {} ({})...", index + 1, total, scene.timestamp),
            );
            let prompt = prompts::scene(request.analysis, request.style, &scene);
            let image = self
                .client
                .generate_image(&prompt, orientation.aspect_ratio())
                .await?;
            scenes.push(scene.with_image(image));
        }

        self.enter(PipelineStage::ThumbnailImaging, "Designing the video thumbnail...");
        let prompt = prompts::thumbnail(request.title, request.analysis, request.style);
        let thumbnail = self
            .client
            .generate_image(&prompt, AspectRatio::Landscape)
            .await?;

        Ok((scenes, thumbnail))
    }

    /// Re-image scene `index` from a different camera angle.
    ///
    /// Only that scene's image changes. An out-of-range index is rejected
    /// before any remote call.
    #[instrument(skip(self))]
    pub async fn regenerate_shot(&mut self, index: usize) -> StoryboardResult<()> {
        let storyboard = self
            .state
            .storyboard()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingStoryboard))?;
        storyboard.check_index(index)?;
        let analysis = self
            .state
            .analysis()
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingAnalysis))?;
        let prompt = prompts::regenerate(analysis, storyboard.style(), &storyboard.scenes()[index]);
        let aspect_ratio = storyboard.orientation().aspect_ratio();

        let prior = self.stage;
        self.enter(
            PipelineStage::RegeneratingShot { index },
            format!("Regenerating shot {} with a new perspective...", index + 1),
        );
        let image = match self.client.generate_image(&prompt, aspect_ratio).await {
            Ok(image) => image,
            Err(e) => return Err(self.fail(e, prior)),
        };

        let updated = self
            .state
            .storyboard()
            .ok_or_else(|| StoryboardError::from(ValidationError::new(ValidationErrorKind::MissingStoryboard)))
            .and_then(|storyboard| storyboard.with_scene_image(index, image));
        match updated {
            Ok(updated) => {
                self.state.replace_storyboard(updated);
                self.settle(prior);
                info!(index, "Shot regenerated");
                Ok(())
            }
            Err(e) => Err(self.fail(e, prior)),
        }
    }
}
