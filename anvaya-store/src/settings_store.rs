//! User settings store.
//!
//! Persists the CLI's connection preferences and resolves them against
//! command-line flags and the environment.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anvaya_client::context::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use anvaya_client::ClientSettings;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use url::Url;

use crate::error::StoreError;
use crate::persistence::{default_settings_path, load_json_or_default, remove_file, save_json};

// ============================================================================
// Settings Types
// ============================================================================

/// Where the admin token is kept between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStorage {
    /// JSON file in the config directory.
    #[default]
    File,
    /// System keychain.
    Keychain,
}

impl TokenStorage {
    /// Returns the display name.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenStorage::File => "file",
            TokenStorage::Keychain => "keychain",
        }
    }
}

impl std::fmt::Display for TokenStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TokenStorage {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(TokenStorage::File),
            "keychain" => Ok(TokenStorage::Keychain),
            other => Err(StoreError::InvalidValue {
                key: "token_storage",
                reason: format!("expected 'file' or 'keychain', got '{other}'"),
            }),
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend base URL. `None` falls back to the environment, then the default.
    pub api_base_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Token storage backend.
    pub token_storage: TokenStorage,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            token_storage: TokenStorage::default(),
        }
    }
}

impl Settings {
    /// Picks the base URL: flag, then environment, then this file, then the default.
    pub fn resolve_base_url(&self, flag: Option<&str>, env: Option<&str>) -> String {
        [flag, env, self.api_base_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    /// Builds client settings, reading `ANVAYA_API_URL` from the environment.
    pub fn client_settings(&self, flag: Option<&str>) -> ClientSettings {
        let env = std::env::var(BASE_URL_ENV).ok();
        let base_url = self.resolve_base_url(flag, env.as_deref());
        debug!(base_url = %base_url, "Resolved API base URL");

        ClientSettings::default()
            .with_base_url(base_url)
            .with_timeout(self.timeout())
    }

    /// Request timeout; zero falls back to the default.
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            DEFAULT_TIMEOUT
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }
}

/// Checks that a base URL is absolute http(s) and can take path segments.
pub fn validate_base_url(raw: &str) -> Result<String, StoreError> {
    let invalid = |reason: String| StoreError::InvalidValue {
        key: "api_base_url",
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

// ============================================================================
// Settings Store
// ============================================================================

/// Thread-safe settings store with persistence.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    settings: Arc<RwLock<Settings>>,
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store with default settings at a path, without reading it.
    pub fn new(path: PathBuf) -> Self {
        Self {
            settings: Arc::new(RwLock::new(Settings::default())),
            path,
        }
    }

    /// Loads settings from the default path.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be loaded from disk.
    pub async fn load_default() -> Result<Self, StoreError> {
        Self::load(default_settings_path()).await
    }

    /// Loads settings from a path. A missing or corrupt file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be loaded from disk.
    pub async fn load(path: PathBuf) -> Result<Self, StoreError> {
        if path.exists() {
            info!(path = %path.display(), "Loading settings");
        } else {
            debug!(path = %path.display(), "Settings file not found, using defaults");
        }
        let settings: Settings = load_json_or_default(&path).await;

        Ok(Self {
            settings: Arc::new(RwLock::new(settings)),
            path,
        })
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets a copy of the current settings.
    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Updates settings in memory. Call [`save`](Self::save) to persist.
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings.write().await;
        f(&mut settings);
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be written to disk.
    pub async fn save(&self) -> Result<(), StoreError> {
        let settings = self.settings.read().await;
        save_json(&self.path, &*settings).await?;
        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    /// Restores defaults and removes the settings file.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be removed.
    pub async fn reset(&self) -> Result<(), StoreError> {
        *self.settings.write().await = Settings::default();
        remove_file(&self.path).await?;
        info!(path = %self.path.display(), "Settings reset");
        Ok(())
    }

    // ========================================================================
    // Convenience Methods
    // ========================================================================

    /// Validates and sets the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidValue`] for URLs the client cannot use.
    pub async fn set_api_base_url(&self, raw: &str) -> Result<String, StoreError> {
        let url = validate_base_url(raw)?;
        let stored = url.clone();
        self.update(|s| s.api_base_url = Some(stored)).await;
        Ok(url)
    }

    /// Sets the token storage backend.
    pub async fn set_token_storage(&self, storage: TokenStorage) {
        self.update(|s| s.token_storage = storage).await;
    }
}

// ============================================================================
// Tests
// ============================================================================
