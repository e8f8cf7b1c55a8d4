//! File-backed token storage.
//!
//! The session file is a small JSON object keyed by
//! [`TOKEN_STORAGE_KEY`], written atomically with owner-only permissions.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anvaya_client::{KeychainTokenStore, StorageError, TokenStore, TOKEN_STORAGE_KEY};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::persistence::{default_session_path, load_json, remove_file, save_json};
use crate::settings_store::TokenStorage;

type SessionFile = BTreeMap<String, String>;

/// Token store persisted as a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store at the given path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store at `<config dir>/anvaya/session.json`.
    pub fn default_location() -> Self {
        Self::new(default_session_path())
    }

    /// Path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<SessionFile, StorageError> {
        match load_json(&self.path).await {
            Ok(map) => Ok(map),
            Err(e) if e.is_not_found() => Ok(SessionFile::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> Result<Option<String>, StorageError> {
        let mut map = self.read().await?;
        Ok(map.remove(TOKEN_STORAGE_KEY))
    }

    async fn set(&self, token: &str) -> Result<(), StorageError> {
        let mut map = self.read().await.unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Unreadable session file, replacing it");
            SessionFile::new()
        });
        map.insert(TOKEN_STORAGE_KEY.to_string(), token.to_string());
        save_json(&self.path, &map).await?;
        debug!(path = %self.path.display(), "Token written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut map = match self.read().await {
            Ok(map) => map,
            Err(_) => return Ok(remove_file(&self.path).await?),
        };
        if map.remove(TOKEN_STORAGE_KEY).is_none() {
            return Ok(());
        }

        if map.is_empty() {
            remove_file(&self.path).await?;
        } else {
            save_json(&self.path, &map).await?;
        }
        debug!(path = %self.path.display(), "Token removed");
        Ok(())
    }
}

/// Opens the token store selected in settings.
pub fn open_token_store(storage: TokenStorage) -> Arc<dyn TokenStore> {
    match storage {
        TokenStorage::File => Arc::new(FileTokenStore::default_location()),
        TokenStorage::Keychain => Arc::new(KeychainTokenStore::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_has_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"));
        assert_eq!(store.get().await.unwrap(), None);
        assert!(store.clear().await.is_ok());
    }

    #[tokio::test]
    async fn test_set_get_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileTokenStore::new(path.clone());

        store.set("tok-1").await.unwrap();
        assert_eq!(store.get().await.unwrap().as_deref(), Some("tok-1"));

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("\"anvaya_admin_token\""));

        store.set("tok-2").await.unwrap();
        assert_eq!(store.get().await.unwrap().as_deref(), Some("tok-2"));

        store.clear().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error_but_clearable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let store = FileTokenStore::new(path.clone());
        assert!(matches!(store.get().await, Err(StorageError::Serialization(_))));

        store.clear().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_set_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let store = FileTokenStore::new(path.clone());
        store.set("fresh").await.unwrap();
        assert_eq!(store.get().await.unwrap().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_other_keys_survive_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, r#"{"anvaya_admin_token":"t","note":"keep"}"#)
            .await
            .unwrap();

        let store = FileTokenStore::new(path.clone());
        store.clear().await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("keep"));
        assert!(!raw.contains("anvaya_admin_token"));
    }
}
