//! Session handling.
//!
//! The bearer token lives in a [`TokenStore`]. A [`Session`] wraps one and is
//! handed to the transport explicitly, so there is no process-wide token.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::StorageError;

/// Fixed key the admin token is stored under.
pub const TOKEN_STORAGE_KEY: &str = "anvaya_admin_token";

// ============================================================================
// Token Store Trait
// ============================================================================

/// Persistent storage for the admin bearer token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Reads the stored token.
    ///
    /// # Returns
    /// * `Ok(Some(token))` - A token is stored
    /// * `Ok(None)` - Nothing stored
    /// * `Err(e)` - The backend failed
    async fn get(&self) -> Result<Option<String>, StorageError>;

    /// Stores a token, replacing any previous one.
    async fn set(&self, token: &str) -> Result<(), StorageError>;

    /// Removes the stored token. Removing an absent token succeeds.
    async fn clear(&self) -> Result<(), StorageError>;

    /// Check if a token is stored.
    async fn exists(&self) -> bool {
        matches!(self.get().await, Ok(Some(_)))
    }
}

// ============================================================================
// Memory Token Store
// ============================================================================

/// Token store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Result<Option<String>, StorageError> {
        Ok(self.token.read().await.clone())
    }

    async fn set(&self, token: &str) -> Result<(), StorageError> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.token.write().await = None;
        Ok(())
    }
}

// ============================================================================
// Session
// ============================================================================

/// Handle to the current admin session.
///
/// Presence of a stored token is the only session check; expiry is left to
/// the server.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Creates a session backed by the given store.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Creates a session backed by an in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Returns the stored token, if any.
    ///
    /// Storage failures are logged and treated as "no token".
    pub async fn token(&self) -> Option<String> {
        match self.store.get().await {
            Ok(Some(token)) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read session token");
                None
            }
        }
    }

    /// Persists a new token.
    ///
    /// # Errors
    ///
    /// Returns the storage backend's error.
    pub async fn store_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(token).await?;
        debug!("Session token stored");
        Ok(())
    }

    /// Clears the stored token. Failures are logged, not returned.
    pub async fn clear(&self) {
        match self.store.clear().await {
            Ok(()) => debug!("Session token cleared"),
            Err(e) => warn!(error = %e, "Failed to clear session token"),
        }
    }

    /// Returns true if a token is stored.
    pub async fn is_authenticated(&self) -> bool {
        self.token().await.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
