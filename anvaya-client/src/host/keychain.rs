//! Token storage in the system keychain.
//!
//! This module stores the admin token in the system's secure credential storage:
//! - macOS: Keychain Services
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KDE Wallet)

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use super::session::{TokenStore, TOKEN_STORAGE_KEY};
use crate::error::StorageError;

/// Default keychain service name.
pub const DEFAULT_SERVICE: &str = "anvaya";

// ============================================================================
// Keychain Token Store
// ============================================================================

/// Token store backed by the system keychain.
///
/// This uses the `keyring` crate which provides cross-platform access to:
/// - macOS Keychain Services
/// - Windows Credential Manager
/// - Linux Secret Service API
#[derive(Debug, Clone)]
pub struct KeychainTokenStore {
    service: String,
    account: String,
}

impl KeychainTokenStore {
    /// Creates a store under the default service, keyed by [`TOKEN_STORAGE_KEY`].
    pub fn new() -> Self {
        Self::with_service(DEFAULT_SERVICE)
    }

    /// Creates a store under a custom service name.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            account: TOKEN_STORAGE_KEY.to_string(),
        }
    }

    /// Returns the keychain service name.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Creates a keyring entry.
    fn entry(&self) -> Result<Entry, StorageError> {
        Entry::new(&self.service, &self.account).map_err(|e| StorageError::Keychain(e.to_string()))
    }
}

impl Default for KeychainTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for KeychainTokenStore {
    async fn get(&self) -> Result<Option<String>, StorageError> {
        debug!(service = %self.service, "Reading token from keychain");

        match self.entry()?.get_password() {
            Ok(token) if !token.is_empty() => Ok(Some(token)),
            Ok(_) | Err(keyring::Error::NoEntry) => {
                debug!(service = %self.service, "No token in keychain");
                Ok(None)
            }
            Err(e) => {
                warn!(service = %self.service, error = %e, "Failed to read token");
                Err(e.into())
            }
        }
    }

    async fn set(&self, token: &str) -> Result<(), StorageError> {
        self.entry()?.set_password(token).map_err(|e| {
            warn!(service = %self.service, error = %e, "Failed to store token");
            StorageError::from(e)
        })?;

        debug!(service = %self.service, "Token stored in keychain");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match self.entry()?.delete_credential() {
            Ok(()) => {
                debug!(service = %self.service, "Token deleted from keychain");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                debug!(service = %self.service, "Token not found (already deleted)");
                Ok(())
            }
            Err(e) => {
                warn!(service = %self.service, error = %e, "Failed to delete token");
                Err(e.into())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
