//! GeminiBackend tests against a local HTTP server.

use mockito::{Matcher, Server};
use serde_json::json;
use storyboard_core::AspectRatio;
use storyboard_error::GenerationErrorKind;
use storyboard_interface::{GenerationBackend, ImageRequest, StructuredRequest};
use storyboard_models::GeminiBackend;
use storyboard_retry::GeminiSettings;

const TEXT_PATH: &str = "/models/gemini-3-flash-preview:generateContent";
const IMAGE_PATH: &str = "/models/gemini-2.5-flash-image:generateContent";

fn backend(server: &Server) -> anyhow::Result<GeminiBackend> {
    let settings = GeminiSettings {
        base_url: server.url(),
        ..GeminiSettings::default()
    };
    Ok(GeminiBackend::new("test-key", settings)?)
}

fn structured_request() -> StructuredRequest {
    StructuredRequest::new("Analyze", json!({"type": "OBJECT"}))
}

#[tokio::test]
async fn test_quota_response_is_rate_limited() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", TEXT_PATH)
        .match_header("x-goog-api-key", "test-key")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"error": {
                "code": 429,
                "message": "Resource has been exhausted (e.g. check quota).",
                "status": "RESOURCE_EXHAUSTED"
            }})
            .to_string(),
        )
        .create_async()
        .await;

    let err = backend(&server)?
        .generate_structured(&structured_request())
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_invalid_key_response_is_credential_invalid() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", IMAGE_PATH)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT",
                "details": [{"reason": "API_KEY_INVALID"}]
            }})
            .to_string(),
        )
        .create_async()
        .await;

    let err = backend(&server)?
        .generate_image(&ImageRequest::new("A highway", AspectRatio::Landscape))
        .await
        .unwrap_err();

    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::CredentialInvalid(_))
    ));
    assert!(err.is_credential_invalid());
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_http_kind() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", TEXT_PATH)
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let err = backend(&server)?
        .generate_structured(&structured_request())
        .await
        .unwrap_err();

    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::Http { status_code: 500, .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_image_request_declares_aspect_ratio() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", IMAGE_PATH)
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {
                "responseModalities": ["IMAGE"],
                "imageConfig": {"aspectRatio": "9:16"}
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"candidates": [{"content": {"parts": [
                {"text": "Here is your image"},
                {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
            ]}}]})
            .to_string(),
        )
        .create_async()
        .await;

    let response = backend(&server)?
        .generate_image(&ImageRequest::new("A highway", AspectRatio::Portrait))
        .await?;

    let image = response.first_image().expect("inline image");
    assert_eq!(image.as_data_uri(), "data:image/png;base64,iVBORw0KGgo=");
    mock.assert_async().await;
    Ok(())
}
