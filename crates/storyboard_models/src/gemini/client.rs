//! Gemini `generateContent` REST client.

use super::classify::classify_api_error;
use super::dto::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use super::CredentialStore;
use async_trait::async_trait;
use reqwest::Client;
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};
use storyboard_interface::{
    GenerationBackend, ImageRequest, ImageResponse, ResponsePart, StructuredRequest,
};
use storyboard_retry::GeminiSettings;
use tracing::{debug, instrument, warn};

/// Gemini backend over the REST API.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    settings: GeminiSettings,
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl GeminiBackend {
    /// Creates a backend with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns `ClientCreation` if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn new(api_key: impl Into<String>, settings: GeminiSettings) -> StoryboardResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("storyboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string()))
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            settings,
        })
    }

    /// Creates a backend from the loaded credential.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when no credential is present.
    pub fn from_credentials(
        credentials: &CredentialStore,
        settings: GeminiSettings,
    ) -> StoryboardResult<Self> {
        Self::new(credentials.api_key()?, settings)
    }

    /// Provider settings in effect.
    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> StoryboardResult<GenerateContentResponse> {
        let url = self.endpoint(model);
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let kind = classify_api_error(status.as_u16(), &error_text);
            warn!(status = status.as_u16(), error = %kind, "Gemini API request failed");
            return Err(GenerationError::new(kind).into());
        }

        response.json().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
            .into()
        })
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    #[instrument(skip(self, req), fields(model = tracing::field::Empty))]
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String> {
        let model = req.model().as_deref().unwrap_or(&self.settings.text_model);
        tracing::Span::current().record("model", model);

        let body = GenerateContentRequest::user_prompt(
            req.prompt(),
            GenerationConfig::structured(req.schema().clone()),
        );
        let response = self.generate_content(model, &body).await?;

        response.answer_text().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::MalformedResponse(response.empty_reason()))
                .into()
        })
    }

    #[instrument(skip(self, req), fields(model = tracing::field::Empty, aspect_ratio = %req.aspect_ratio()))]
    async fn generate_image(&self, req: &ImageRequest) -> StoryboardResult<ImageResponse> {
        let model = req.model().as_deref().unwrap_or(&self.settings.image_model);
        tracing::Span::current().record("model", model);

        let body = GenerateContentRequest::user_prompt(
            req.prompt(),
            GenerationConfig::image(&req.aspect_ratio().to_string()),
        );
        let response = self.generate_content(model, &body).await?;

        let parts = response
            .first_parts()
            .iter()
            .filter_map(|part| match (&part.inline_data, &part.text) {
                (Some(inline), _) => Some(ResponsePart::InlineData {
                    mime_type: inline.mime_type.clone(),
                    data: inline.data.clone(),
                }),
                (None, Some(text)) => Some(ResponsePart::Text(text.clone())),
                (None, None) => None,
            })
            .collect();
        Ok(ImageResponse { parts })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
