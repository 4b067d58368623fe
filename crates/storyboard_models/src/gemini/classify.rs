//! Mapping of Gemini error responses onto the generation error taxonomy.

use super::dto::ApiErrorEnvelope;
use storyboard_error::GenerationErrorKind;

const CREDENTIAL_MARKERS: [&str; 3] = ["entity was not found", "api_key_invalid", "api key not valid"];

/// Classify a non-success response from its HTTP status and body.
///
/// Rate limits are recognised by status 429, a `RESOURCE_EXHAUSTED` status, or
/// a `429` in the message. Rejected credentials are recognised by their
/// message markers. Everything else is a plain HTTP failure.
///
/// # Examples
///
/// ```
/// use storyboard_error::GenerationErrorKind;
/// use storyboard_models::classify_api_error;
///
/// let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
/// assert!(matches!(classify_api_error(429, body), GenerationErrorKind::RateLimited(_)));
/// ```
pub fn classify_api_error(status_code: u16, body: &str) -> GenerationErrorKind {
    let envelope = serde_json::from_str::<ApiErrorEnvelope>(body).ok();
    let message = envelope
        .as_ref()
        .map(|e| e.error.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());
    let status = envelope
        .as_ref()
        .and_then(|e| e.error.status.clone())
        .unwrap_or_default();
    let code = envelope
        .as_ref()
        .and_then(|e| e.error.code)
        .unwrap_or(status_code);

    if status_code == 429 || code == 429 || status == "RESOURCE_EXHAUSTED" || message.contains("429")
    {
        return GenerationErrorKind::RateLimited(message);
    }

    let lowered = body.to_lowercase();
    if CREDENTIAL_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return GenerationErrorKind::CredentialInvalid(message);
    }

    GenerationErrorKind::Http {
        status_code,
        message,
    }
}
