//! The typed generation client.

use super::StyleIdSource;
use super::payload::{self, AnalysisPayload, MoreStylesPayload, PlanPayload};
use super::{prompts, schema};
use storyboard_core::{AspectRatio, ImageData, SongAnalysis, StoryboardScene, VisualStyle};
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};
use storyboard_interface::{GenerationBackend, ImageRequest, StructuredRequest};
use storyboard_retry::{RetryPolicy, RetryingCaller};
use tracing::{debug, info, instrument};

/// Inputs to storyboard planning.
#[derive(Debug, Clone, Copy)]
pub struct PlanRequest<'a> {
    /// Song title
    pub title: &'a str,
    /// Full lyrics
    pub lyrics: &'a str,
    /// Song duration in seconds
    pub duration_seconds: f64,
    /// Style every scene is drawn in
    pub style: &'a VisualStyle,
    /// Analysis supplying the protagonist and consistency guide
    pub analysis: &'a SongAnalysis,
    /// Free-text director notes
    pub director_notes: Option<&'a str>,
}

/// Typed facade over a generation backend.
///
/// Every backend call goes through the [`RetryingCaller`], so rate-limit
/// failures are retried with backoff and everything else fails fast.
#[derive(Debug)]
pub struct GenerationClient<B> {
    backend: B,
    caller: RetryingCaller,
    ids: StyleIdSource,
}

impl<B: GenerationBackend> GenerationClient<B> {
    /// Create a client over `backend` with the given retry policy.
    pub fn new(backend: B, policy: RetryPolicy) -> Self {
        Self {
            backend,
            caller: RetryingCaller::new(policy),
            ids: StyleIdSource::new(),
        }
    }

    async fn structured(&self, prompt: String, schema: serde_json::Value) -> StoryboardResult<String> {
        let request = StructuredRequest::new(prompt, schema);
        let request = &request;
        let backend = &self.backend;
        self.caller
            .call(|| async move { backend.generate_structured(request).await })
            .await
    }

    /// Analyze a song and propose an initial style catalog.
    ///
    /// Styles get fresh ids and no images.
    #[instrument(skip(self, lyrics), fields(provider = self.backend.provider_name()))]
    pub async fn analyze_song(&self, title: &str, lyrics: &str) -> StoryboardResult<SongAnalysis> {
        let text = self
            .structured(prompts::analysis(title, lyrics), schema::analysis())
            .await?;
        let parsed: AnalysisPayload = payload::parse(&text, "Analysis")?;

        if !(parsed.bpm.is_finite() && parsed.bpm > 0.0) {
            return Err(payload::malformed(format!("bpm {} is not a positive number", parsed.bpm)).into());
        }
        if parsed.suggested_styles.is_empty() {
            return Err(payload::malformed("analysis proposed no styles").into());
        }

        let ids = self.ids.initial_batch(parsed.suggested_styles.len());
        let suggested_styles: Vec<VisualStyle> = parsed
            .suggested_styles
            .into_iter()
            .zip(ids)
            .map(|(style, id)| style.into_style(id))
            .collect();

        info!(
            genre = %parsed.genre,
            bpm = parsed.bpm,
            styles = suggested_styles.len(),
            "Song analyzed"
        );
        Ok(SongAnalysis {
            genre: parsed.genre,
            bpm: parsed.bpm,
            synopsis: parsed.synopsis,
            character_design: parsed.character_design,
            visual_consistency_guide: parsed.visual_consistency_guide,
            suggested_styles,
        })
    }

    /// Propose additional styles, asking the model to avoid `existing_names`.
    ///
    /// Duplicate names are not filtered; ids come from a separate namespace.
    #[instrument(skip(self, lyrics, existing_names), fields(existing = existing_names.len()))]
    pub async fn generate_more_styles(
        &self,
        title: &str,
        lyrics: &str,
        existing_names: &[String],
    ) -> StoryboardResult<Vec<VisualStyle>> {
        let text = self
            .structured(
                prompts::more_styles(title, lyrics, existing_names),
                schema::more_styles(),
            )
            .await?;
        let parsed: MoreStylesPayload = payload::parse(&text, "More styles")?;

        let ids = self.ids.more_batch(parsed.styles.len());
        let styles: Vec<VisualStyle> = parsed
            .styles
            .into_iter()
            .zip(ids)
            .map(|(style, id)| style.into_style(id))
            .collect();
        info!(styles = styles.len(), "Additional styles generated");
        Ok(styles)
    }

    /// Generate one image at `aspect_ratio`.
    ///
    /// Fails with `NoImageData` when the response carries no inline payload.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> StoryboardResult<ImageData> {
        let request = ImageRequest::new(prompt, aspect_ratio);
        let request = &request;
        let backend = &self.backend;
        self.caller
            .call(|| async move {
                let response = backend.generate_image(request).await?;
                let image: StoryboardResult<ImageData> = response
                    .first_image()
                    .ok_or_else(|| GenerationError::new(GenerationErrorKind::NoImageData).into());
                image
            })
            .await
            .inspect(|_| debug!("Image generated"))
    }

    /// Plan the storyboard scenes, in the planner's order and without images.
    ///
    /// Scene count and song coverage are requested in the prompt and not
    /// re-validated here.
    #[instrument(skip(self, request), fields(title = request.title, style = %request.style.name))]
    pub async fn plan_storyboard(
        &self,
        request: &PlanRequest<'_>,
    ) -> StoryboardResult<Vec<StoryboardScene>> {
        let text = self
            .structured(prompts::plan(request), schema::storyboard_plan())
            .await?;
        let parsed: PlanPayload = payload::parse(&text, "Storyboard plan")?;

        if parsed.scenes.is_empty() {
            return Err(payload::malformed("storyboard plan has no scenes").into());
        }

        let scenes: Vec<StoryboardScene> = parsed.scenes.into_iter().map(Into::into).collect();
        info!(scenes = scenes.len(), "Storyboard planned");
        Ok(scenes)
    }
}
