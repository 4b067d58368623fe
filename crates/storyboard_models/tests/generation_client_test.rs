//! GenerationClient tests against a scripted backend.

mod test_utils;

use serde_json::json;
use std::collections::HashSet;
use storyboard_core::{AspectRatio, ImageData, SongAnalysis, StyleId, VisualStyle};
use storyboard_error::GenerationErrorKind;
use storyboard_interface::{ImageResponse, ResponsePart};
use storyboard_models::{GenerationClient, PlanRequest, schema};
use storyboard_retry::RetryPolicy;
use test_utils::MockBackend;

fn analysis_json() -> String {
    json!({
        "genre": "Synthwave",
        "bpm": 112,
        "synopsis": "A late drive through a sleeping city.",
        "characterDesign": "A woman in a red bomber jacket, short silver hair.",
        "visualConsistencyGuide": "Magenta and cyan neon, wet asphalt, night.",
        "suggestedStyles": [
            {"name": "Neon Noir", "description": "Rain and reflections", "imagePrompt": "neon noir"},
            {"name": "Super 8", "description": "Grainy home movie", "imagePrompt": "super 8 film"},
            {"name": "Paper Cut", "description": "Layered paper", "imagePrompt": "paper cutout"}
        ]
    })
    .to_string()
}

fn client(mock: &MockBackend) -> GenerationClient<MockBackend> {
    GenerationClient::new(mock.clone(), RetryPolicy::default())
}

#[tokio::test]
async fn test_analyze_song_assigns_unique_ids() -> anyhow::Result<()> {
    let mock = MockBackend::new();
    mock.push_structured(analysis_json());

    let analysis = client(&mock).analyze_song("Night Drive", "City lights...").await?;

    assert_eq!(analysis.genre, "Synthwave");
    assert_eq!(analysis.bpm, 112.0);
    assert_eq!(analysis.suggested_styles.len(), 3);
    let ids: HashSet<&StyleId> = analysis.suggested_styles.iter().map(|s| &s.id).collect();
    assert_eq!(ids.len(), 3);
    assert!(analysis.suggested_styles.iter().all(|s| s.image_url.is_none()));

    let requests = mock.structured_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].schema(), &schema::analysis());
    assert!(requests[0].prompt().contains("\"Night Drive\""));
    assert!(requests[0].prompt().contains("City lights..."));
    Ok(())
}

#[tokio::test]
async fn test_analyze_song_missing_field_is_malformed_and_not_retried() {
    let mock = MockBackend::new();
    mock.push_structured(r#"{"genre":"Pop","bpm":100}"#);

    let err = client(&mock)
        .analyze_song("Night Drive", "...")
        .await
        .unwrap_err();

    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::MalformedResponse(_))
    ));
    assert_eq!(mock.structured_requests().len(), 1);
}

#[tokio::test]
async fn test_analyze_song_rejects_non_positive_bpm() {
    let mock = MockBackend::new();
    let mut body: serde_json::Value = serde_json::from_str(&analysis_json()).unwrap();
    body["bpm"] = json!(0);
    mock.push_structured(body.to_string());

    let err = client(&mock).analyze_song("Night Drive", "...").await.unwrap_err();
    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::MalformedResponse(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_analyze_song_retries_rate_limits() -> anyhow::Result<()> {
    let mock = MockBackend::new();
    mock.push_structured_error(GenerationErrorKind::RateLimited("429".to_string()))
        .push_structured_error(GenerationErrorKind::RateLimited("429".to_string()))
        .push_structured(analysis_json());

    let started = tokio::time::Instant::now();
    let analysis = client(&mock).analyze_song("Night Drive", "...").await?;

    assert_eq!(analysis.suggested_styles.len(), 3);
    assert_eq!(mock.structured_requests().len(), 3);
    assert!(started.elapsed() >= std::time::Duration::from_millis(6000));
    Ok(())
}

#[tokio::test]
async fn test_credential_invalid_is_not_retried() {
    let mock = MockBackend::new();
    mock.push_structured_error(GenerationErrorKind::CredentialInvalid(
        "Requested entity was not found.".to_string(),
    ));

    let err = client(&mock).analyze_song("Night Drive", "...").await.unwrap_err();

    assert!(err.is_credential_invalid());
    assert_eq!(mock.structured_requests().len(), 1);
}

#[tokio::test]
async fn test_more_styles_use_separate_id_namespace() -> anyhow::Result<()> {
    let mock = MockBackend::new();
    mock.push_structured(analysis_json()).push_structured(
        json!({"styles": [
            {"name": "Claymation", "description": "Stop motion", "imagePrompt": "clay"},
            {"name": "Ukiyo-e", "description": "Woodblock print", "imagePrompt": "ukiyo-e"}
        ]})
        .to_string(),
    );
    let client = client(&mock);

    let analysis = client.analyze_song("Night Drive", "...").await?;
    let more = client
        .generate_more_styles("Night Drive", "...", &analysis.style_names())
        .await?;

    assert_eq!(more.len(), 2);
    assert!(more.iter().all(|s| s.id.as_str().starts_with("style-more-")));
    let mut ids: HashSet<StyleId> = analysis.suggested_styles.iter().map(|s| s.id.clone()).collect();
    for style in &more {
        assert!(ids.insert(style.id.clone()));
    }

    let prompt = mock.structured_requests()[1].prompt().clone();
    assert!(prompt.contains("Neon Noir, Super 8, Paper Cut"));
    Ok(())
}

#[tokio::test]
async fn test_generate_image_returns_png_data_uri() -> anyhow::Result<()> {
    let mock = MockBackend::new();
    mock.push_image_response(ImageResponse {
        parts: vec![
            ResponsePart::Text("Here is the image".to_string()),
            ResponsePart::InlineData {
                mime_type: "image/png".to_string(),
                data: "iVBORw0KGgo=".to_string(),
            },
        ],
    });

    let image = client(&mock)
        .generate_image("a neon street", AspectRatio::Portrait)
        .await?;

    assert_eq!(image, ImageData::from_png_base64("iVBORw0KGgo="));
    let requests = mock.image_requests();
    assert_eq!(requests[0].aspect_ratio(), &AspectRatio::Portrait);
    assert_eq!(requests[0].prompt(), "a neon street");
    Ok(())
}

#[tokio::test]
async fn test_generate_image_without_payload_is_no_image_data() {
    let mock = MockBackend::new();
    mock.push_image_response(ImageResponse {
        parts: vec![ResponsePart::Text("I can't draw that".to_string())],
    });

    let err = client(&mock)
        .generate_image("a neon street", AspectRatio::Square)
        .await
        .unwrap_err();

    assert_eq!(err.generation_kind(), Some(&GenerationErrorKind::NoImageData));
    assert_eq!(mock.image_requests().len(), 1);
}

fn analysis_fixture() -> SongAnalysis {
    SongAnalysis {
        genre: "Synthwave".to_string(),
        bpm: 112.0,
        synopsis: "A late drive.".to_string(),
        character_design: "A woman in a red bomber jacket".to_string(),
        visual_consistency_guide: "Magenta and cyan neon".to_string(),
        suggested_styles: vec![VisualStyle {
            id: StyleId::new("style-1-0-0"),
            name: "Neon Noir".to_string(),
            description: "Rain and reflections".to_string(),
            image_prompt: "neon noir".to_string(),
            image_url: None,
        }],
    }
}

#[tokio::test]
async fn test_plan_storyboard_keeps_planner_order() -> anyhow::Result<()> {
    let mock = MockBackend::new();
    mock.push_structured(
        json!({"scenes": [
            {"id": 2.0, "timestamp": "0:00", "lyrics": "Engine hum", "visualPrompt": "wide", "videoPrompt": "dolly"},
            {"id": 1, "timestamp": "0:12", "lyrics": "City lights", "visualPrompt": "close", "videoPrompt": "pan"}
        ]})
        .to_string(),
    );
    let analysis = analysis_fixture();
    let style = analysis.suggested_styles[0].clone();

    let scenes = client(&mock)
        .plan_storyboard(&PlanRequest {
            title: "Night Drive",
            lyrics: "...",
            duration_seconds: 180.0,
            style: &style,
            analysis: &analysis,
            director_notes: Some("No dialogue"),
        })
        .await?;

    assert_eq!(scenes.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(scenes[1].lyrics, "City lights");
    assert!(scenes.iter().all(|s| s.image_url.is_none()));

    let prompt = mock.structured_requests()[0].prompt().clone();
    assert!(prompt.contains("A woman in a red bomber jacket"));
    assert!(prompt.contains("Magenta and cyan neon"));
    assert!(prompt.contains("No dialogue"));
    Ok(())
}

#[tokio::test]
async fn test_plan_storyboard_missing_scene_field_is_malformed() {
    let mock = MockBackend::new();
    mock.push_structured(
        json!({"scenes": [{"id": 1, "timestamp": "0:00", "lyrics": "x", "visualPrompt": "y"}]})
            .to_string(),
    );
    let analysis = analysis_fixture();
    let style = analysis.suggested_styles[0].clone();

    let err = client(&mock)
        .plan_storyboard(&PlanRequest {
            title: "Night Drive",
            lyrics: "...",
            duration_seconds: 180.0,
            style: &style,
            analysis: &analysis,
            director_notes: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.generation_kind(),
        Some(GenerationErrorKind::MalformedResponse(message)) if message.contains("videoPrompt")
    ));
}
