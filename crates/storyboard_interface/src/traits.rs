//! The backend trait.

use crate::{ImageRequest, ImageResponse, StructuredRequest};
use async_trait::async_trait;
use std::sync::Arc;
use storyboard_error::StoryboardResult;

/// A remote generation capability.
///
/// Implementations classify provider failures into
/// [`GenerationErrorKind`](storyboard_error::GenerationErrorKind) so that rate
/// limits and rejected credentials can be told apart from other failures.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate JSON text conforming to the request's response schema.
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String>;

    /// Generate an image, returning the raw response parts.
    async fn generate_image(&self, req: &ImageRequest) -> StoryboardResult<ImageResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<B: GenerationBackend + ?Sized> GenerationBackend for Arc<B> {
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String> {
        (**self).generate_structured(req).await
    }

    async fn generate_image(&self, req: &ImageRequest) -> StoryboardResult<ImageResponse> {
        (**self).generate_image(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}

#[async_trait]
impl<B: GenerationBackend + ?Sized> GenerationBackend for Box<B> {
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String> {
        (**self).generate_structured(req).await
    }

    async fn generate_image(&self, req: &ImageRequest) -> StoryboardResult<ImageResponse> {
        (**self).generate_image(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
