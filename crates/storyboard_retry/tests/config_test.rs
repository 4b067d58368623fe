//! Configuration loading tests.

use std::io::Write;
use std::time::Duration;
use storyboard_retry::{RetryPolicy, StoryboardConfig};

#[test]
fn test_bundled_config_matches_defaults() -> anyhow::Result<()> {
    let bundled = StoryboardConfig::bundled()?;
    assert_eq!(bundled, StoryboardConfig::default());
    assert_eq!(bundled.pipeline.scene_pause(), Duration::from_millis(100));
    Ok(())
}

#[test]
fn test_from_file_partial_override() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        "[retry]\nmax_attempts = 5\n\n[gemini]\nimage_model = \"custom-image\"\n"
    )?;

    let config = StoryboardConfig::from_file(file.path())?;

    assert_eq!(config.retry.max_attempts, 5);
    assert_eq!(config.retry.backoff_unit_ms, 1000);
    assert_eq!(config.gemini.image_model, "custom-image");
    assert_eq!(config.gemini.text_model, "gemini-3-flash-preview");
    assert_eq!(config.pipeline.scene_pause_ms, 100);
    Ok(())
}

#[test]
fn test_from_file_missing_is_config_error() {
    let err = StoryboardConfig::from_file("/nonexistent/storyboard.toml").unwrap_err();
    assert!(err.to_string().contains("Configuration"));
}

#[test]
fn test_policy_from_file_drives_delays() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[retry]\nmax_attempts = 4\nbackoff_unit_ms = 10\n")?;

    let config = StoryboardConfig::from_file(file.path())?;

    assert_eq!(
        config.retry.delays(),
        vec![
            Duration::from_millis(20),
            Duration::from_millis(40),
            Duration::from_millis(80)
        ]
    );
    assert_ne!(config.retry, RetryPolicy::default());
    Ok(())
}
