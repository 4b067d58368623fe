//! API credential storage.

use std::path::{Path, PathBuf};
use storyboard_error::{
    ConfigError, GenerationError, GenerationErrorKind, StoryboardError, StoryboardResult,
};
use tracing::{debug, info, instrument};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// The single opaque API credential.
///
/// Loaded once at process start from [`API_KEY_ENV`], or else from the
/// credential file. Replaced only through [`CredentialStore::save`].
#[derive(Clone, Default)]
pub struct CredentialStore {
    key: Option<String>,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("present", &self.is_present())
            .field("path", &self.path)
            .finish()
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl CredentialStore {
    /// `<config_dir>/storyboard/credential`, when a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("storyboard").join("credential"))
    }

    /// Load from the environment, falling back to the default credential file.
    #[instrument]
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => Self {
                key: std::env::var(API_KEY_ENV).ok().and_then(non_empty),
                path: None,
            },
        }
    }

    /// Load from the environment, falling back to the credential file at `path`.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let key = match std::env::var(API_KEY_ENV).ok().and_then(non_empty) {
            Some(key) => {
                debug!(source = API_KEY_ENV, "Credential loaded from environment");
                Some(key)
            }
            None => {
                let key = std::fs::read_to_string(&path).ok().and_then(non_empty);
                if key.is_some() {
                    debug!(path = %path.display(), "Credential loaded from file");
                }
                key
            }
        };
        Self {
            key,
            path: Some(path),
        }
    }

    /// An in-memory credential that is never persisted.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: non_empty(key.into()),
            path: None,
        }
    }

    /// True when a credential is present.
    pub fn is_present(&self) -> bool {
        self.key.is_some()
    }

    /// Credential file location, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The credential, or `MissingApiKey`.
    pub fn api_key(&self) -> StoryboardResult<&str> {
        self.key
            .as_deref()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey).into())
    }

    /// Replace the credential and persist it to the credential file.
    #[instrument(skip(self, key))]
    pub fn save(&mut self, key: impl Into<String>) -> StoryboardResult<()> {
        let key = non_empty(key.into()).ok_or_else(|| {
            StoryboardError::from(ConfigError::new("Credential cannot be empty"))
        })?;
        let path = self
            .path
            .clone()
            .or_else(Self::default_path)
            .ok_or_else(|| {
                StoryboardError::from(ConfigError::new("No configuration directory for credential"))
            })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }
        write_private(&path, &format!("{}\n", key)).map_err(|e| {
            StoryboardError::from(ConfigError::new(format!(
                "Failed to write credential to {}: {}",
                path.display(),
                e
            )))
        })?;

        info!(path = %path.display(), "Credential saved");
        self.key = Some(key);
        self.path = Some(path);
        Ok(())
    }
}

/// Write `contents` readable by the owner only.
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    use std::io::Write;

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(0o600);
        let mut file = options.open(path)?;
        // mode() only applies on creation
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        file.write_all(contents.as_bytes())
    }
    #[cfg(not(unix))]
    {
        options.open(path)?.write_all(contents.as_bytes())
    }
}
