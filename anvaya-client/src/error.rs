//! Client error types.

use anvaya_core::ValidationError;
use thiserror::Error;

/// Boxed error used to keep the original cause of a failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// Api Error
// ============================================================================

/// Broad classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// No response was received (connection failure or timeout).
    Network,
    /// The server answered with a 4xx status.
    Client,
    /// The server answered with a 5xx status.
    Server,
    /// Anything else (unexpected status, local failure).
    Other,
}

/// Normalized error for every failed API call.
///
/// A status of `0` means no response was received at all. Classification
/// helpers derive from the status code; 401/403/404 are not separate kinds.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    status: u16,
    is_network_error: bool,
    message: String,
    error_code: Option<String>,
    source: Option<BoxError>,
}

impl ApiError {
    /// Creates an HTTP-level error.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            is_network_error: false,
            message: message.into(),
            error_code: None,
            source: None,
        }
    }

    /// Creates a network-level error (no response, status 0).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            is_network_error: true,
            message: message.into(),
            error_code: None,
            source: None,
        }
    }

    /// Attaches the machine-readable code sent by the server.
    #[must_use]
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    /// Attaches the original cause.
    #[must_use]
    pub fn with_source(mut self, source: BoxError) -> Self {
        self.source = Some(source);
        self
    }

    /// HTTP status code, or `0` for network failures.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if no response was received.
    pub fn is_network_error(&self) -> bool {
        self.is_network_error
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Machine-readable code sent by the server, if any.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// Returns true for 4xx statuses.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Returns true for 5xx (and higher) statuses.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }

    /// Returns true for 401.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }

    /// Returns true for 403.
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// Returns true for 404.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ApiErrorKind {
        if self.is_network_error {
            ApiErrorKind::Network
        } else if self.is_client_error() {
            ApiErrorKind::Client
        } else if self.is_server_error() {
            ApiErrorKind::Server
        } else {
            ApiErrorKind::Other
        }
    }
}

// ============================================================================
// Client Error
// ============================================================================

/// Error returned by operations that validate input locally before sending.
///
/// Keeps the two failure shapes apart: [`ClientError::Validation`] is raised
/// before any request, [`ClientError::Api`] after one.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Caller input failed a local precondition; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The session token could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The client could not be set up.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns the normalized API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if this error was raised locally without a request.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// ============================================================================
// Storage Error
// ============================================================================

/// Error type for token storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The system keychain refused or failed the operation.
    #[error("Keychain error: {0}")]
    Keychain(String),

    /// Access to the keychain was denied.
    #[error("Access denied to keychain")]
    AccessDenied,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<keyring::Error> for StorageError {
    fn from(err: keyring::Error) -> Self {
        match err {
            keyring::Error::NoStorageAccess(_) => StorageError::AccessDenied,
            keyring::Error::PlatformFailure(e) => StorageError::Keychain(e.to_string()),
            _ => StorageError::Keychain(err.to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
