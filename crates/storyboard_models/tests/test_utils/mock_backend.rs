//! Scripted generation backend.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};
use storyboard_interface::{GenerationBackend, ImageRequest, ImageResponse, StructuredRequest};

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Structured JSON text
    Text(String),
    /// Image response parts
    Image(ImageResponse),
    /// Provider failure
    Error(GenerationErrorKind),
}

/// Backend that replays queued replies and records every request.
///
/// Structured and image requests have separate queues. An exhausted queue
/// answers with a `MalformedResponse` error.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    structured: Arc<Mutex<VecDeque<MockReply>>>,
    images: Arc<Mutex<VecDeque<MockReply>>>,
    structured_log: Arc<Mutex<Vec<StructuredRequest>>>,
    image_log: Arc<Mutex<Vec<ImageRequest>>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_structured(&self, text: impl Into<String>) -> &Self {
        self.structured
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
        self
    }

    pub fn push_structured_error(&self, kind: GenerationErrorKind) -> &Self {
        self.structured.lock().unwrap().push_back(MockReply::Error(kind));
        self
    }

    pub fn push_image(&self, base64: impl Into<String>) -> &Self {
        self.images
            .lock()
            .unwrap()
            .push_back(MockReply::Image(ImageResponse::png(base64)));
        self
    }

    pub fn push_image_response(&self, response: ImageResponse) -> &Self {
        self.images.lock().unwrap().push_back(MockReply::Image(response));
        self
    }

    pub fn push_image_error(&self, kind: GenerationErrorKind) -> &Self {
        self.images.lock().unwrap().push_back(MockReply::Error(kind));
        self
    }

    pub fn structured_requests(&self) -> Vec<StructuredRequest> {
        self.structured_log.lock().unwrap().clone()
    }

    pub fn image_requests(&self) -> Vec<ImageRequest> {
        self.image_log.lock().unwrap().clone()
    }

    fn next(queue: &Mutex<VecDeque<MockReply>>) -> MockReply {
        queue.lock().unwrap().pop_front().unwrap_or_else(|| {
            MockReply::Error(GenerationErrorKind::MalformedResponse(
                "mock queue exhausted".to_string(),
            ))
        })
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String> {
        self.structured_log.lock().unwrap().push(req.clone());
        match Self::next(&self.structured) {
            MockReply::Text(text) => Ok(text),
            MockReply::Error(kind) => Err(GenerationError::new(kind).into()),
            MockReply::Image(_) => panic!("image reply queued for a structured request"),
        }
    }

    async fn generate_image(&self, req: &ImageRequest) -> StoryboardResult<ImageResponse> {
        self.image_log.lock().unwrap().push(req.clone());
        match Self::next(&self.images) {
            MockReply::Image(response) => Ok(response),
            MockReply::Error(kind) => Err(GenerationError::new(kind).into()),
            MockReply::Text(_) => panic!("text reply queued for an image request"),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
