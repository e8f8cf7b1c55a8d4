//! File persistence helpers.
//!
//! Handles loading and saving state to disk with proper security.

use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::StoreError;

/// Directory name under the platform config directory.
const APP_DIR: &str = "anvaya";

// ============================================================================
// Default Paths
// ============================================================================

/// Returns the default configuration directory.
///
/// - macOS: `~/Library/Application Support/anvaya`
/// - Linux: `~/.config/anvaya`
/// - Windows: `%APPDATA%\anvaya`
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|c| c.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default settings file path.
pub fn default_settings_path() -> PathBuf {
    default_config_dir().join("settings.json")
}

/// Returns the default session (token) file path.
pub fn default_session_path() -> PathBuf {
    default_config_dir().join("session.json")
}

// ============================================================================
// Security: File Permissions
// ============================================================================

/// Sets restrictive file permissions (0o600) on Unix systems.
///
/// The session file holds a bearer token.
#[cfg(unix)]
async fn set_restrictive_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = tokio::fs::metadata(path).await?;
    let mut perms = metadata.permissions();
    perms.set_mode(0o600);
    tokio::fs::set_permissions(path, perms).await?;

    debug!(path = %path.display(), mode = "0600", "Set restrictive permissions");
    Ok(())
}

/// Sets restrictive directory permissions (0o700) on Unix systems.
#[cfg(unix)]
async fn set_restrictive_dir_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = tokio::fs::metadata(path).await?;
    let mut perms = metadata.permissions();
    perms.set_mode(0o700);
    tokio::fs::set_permissions(path, perms).await?;

    debug!(path = %path.display(), mode = "0700", "Set restrictive directory permissions");
    Ok(())
}

/// No-op for non-Unix systems.
#[cfg(not(unix))]
async fn set_restrictive_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

/// No-op for non-Unix systems.
#[cfg(not(unix))]
async fn set_restrictive_dir_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ============================================================================
// File Operations
// ============================================================================

/// Creates parent directories, restricting the ones under the config dir.
async fn create_secure_parent_dirs(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            debug!(path = %parent.display(), "Creating secure directory");
            tokio::fs::create_dir_all(parent).await?;

            let config_dir = default_config_dir();
            let mut current = parent.to_path_buf();
            while current.starts_with(&config_dir) {
                if current.exists() {
                    set_restrictive_dir_permissions(&current).await?;
                }
                if !current.pop() {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Saves data to a JSON file with secure permissions.
///
/// Creates parent directories if they don't exist, writes atomically
/// (via temp file + rename), and sets restrictive permissions on Unix.
pub async fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    debug!(path = %path.display(), "Saving JSON file");

    create_secure_parent_dirs(path).await?;

    let json = serde_json::to_string_pretty(data)?;

    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &json).await?;
    set_restrictive_permissions(&temp_path).await?;
    tokio::fs::rename(&temp_path, path).await?;

    debug!(path = %path.display(), "JSON file saved securely");
    Ok(())
}

/// Loads data from a JSON file.
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    debug!(path = %path.display(), "Loading JSON file");

    let content = tokio::fs::read_to_string(path).await?;
    let data = serde_json::from_str(&content)?;

    debug!(path = %path.display(), "JSON file loaded");
    Ok(data)
}

/// Loads data from a JSON file, returning default if missing or unreadable.
pub async fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json(path).await {
        Ok(data) => data,
        Err(e) => {
            if !e.is_not_found() {
                warn!(path = %path.display(), error = %e, "Failed to load, using defaults");
            }
            T::default()
        }
    }
}

/// Removes a file. A missing file is not an error.
pub async fn remove_file(path: &Path) -> Result<(), StoreError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            debug!(path = %path.display(), "File removed");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// Tests
// ============================================================================
