//! Trait definitions for storyboard generation backends.
//!
//! A backend is the remote generation capability: it answers prompts either
//! with schema-constrained JSON text or with inline image data. The typed
//! generation client in `storyboard_models` sits on top of this seam.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::GenerationBackend;
pub use types::{
    ImageRequest, ImageRequestBuilder, ImageResponse, ResponsePart, StructuredRequest,
    StructuredRequestBuilder,
};
