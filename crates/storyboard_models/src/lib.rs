//! Generation backends and the typed generation client.
//!
//! [`GeminiBackend`] talks to the Gemini REST API. [`GenerationClient`] sits on
//! top of any [`GenerationBackend`](storyboard_interface::GenerationBackend):
//! it builds prompts, declares response schemas, parses the structured answers
//! and wraps every call in the retry policy.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod generation;

pub use gemini::{API_KEY_ENV, CredentialStore, GeminiBackend, classify_api_error};
pub use generation::{GenerationClient, PlanRequest, StyleIdSource, prompts, schema};
