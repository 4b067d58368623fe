//! Gemini REST API integration.

mod classify;
mod client;
mod credential;
mod dto;

pub use classify::classify_api_error;
pub use client::GeminiBackend;
pub use credential::{API_KEY_ENV, CredentialStore};
