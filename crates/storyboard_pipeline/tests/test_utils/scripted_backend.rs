//! Backend that answers image requests with fresh images and fails on cue.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};
use storyboard_interface::{GenerationBackend, ImageRequest, ImageResponse, StructuredRequest};

/// Structured replies are replayed from a queue. Image calls are numbered
/// from zero; each returns a distinct PNG payload unless a failure was
/// scheduled for that call number.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    structured: Arc<Mutex<VecDeque<Result<String, GenerationErrorKind>>>>,
    image_failures: Arc<Mutex<HashMap<usize, GenerationErrorKind>>>,
    structured_log: Arc<Mutex<Vec<StructuredRequest>>>,
    image_log: Arc<Mutex<Vec<ImageRequest>>>,
}

#[allow(dead_code)]
impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_structured(&self, text: impl Into<String>) -> &Self {
        self.structured.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    pub fn push_structured_error(&self, kind: GenerationErrorKind) -> &Self {
        self.structured.lock().unwrap().push_back(Err(kind));
        self
    }

    /// Fail the image call with number `call`, counted across the backend's lifetime.
    pub fn fail_image_call(&self, call: usize, kind: GenerationErrorKind) -> &Self {
        self.image_failures.lock().unwrap().insert(call, kind);
        self
    }

    pub fn structured_requests(&self) -> Vec<StructuredRequest> {
        self.structured_log.lock().unwrap().clone()
    }

    pub fn image_requests(&self) -> Vec<ImageRequest> {
        self.image_log.lock().unwrap().clone()
    }

    pub fn image_calls(&self) -> usize {
        self.image_log.lock().unwrap().len()
    }

    /// The payload image call `call` returns on success.
    pub fn payload_for(call: usize) -> String {
        format!("SU1H{:04}", call)
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String> {
        self.structured_log.lock().unwrap().push(req.clone());
        let reply = self.structured.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(GenerationErrorKind::MalformedResponse(
                "script exhausted".to_string(),
            ))
        });
        reply.map_err(|kind| GenerationError::new(kind).into())
    }

    async fn generate_image(&self, req: &ImageRequest) -> StoryboardResult<ImageResponse> {
        let call = {
            let mut log = self.image_log.lock().unwrap();
            log.push(req.clone());
            log.len() - 1
        };
        match self.image_failures.lock().unwrap().remove(&call) {
            Some(kind) => Err(GenerationError::new(kind).into()),
            None => Ok(ImageResponse::png(Self::payload_for(call))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
