//! Authentication and health shapes.

use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Admin credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response carrying the bearer credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token.
    pub access_token: String,
    /// Token type, `bearer` in practice.
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

// ============================================================================
// Health
// ============================================================================

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `healthy` when the service is up.
    pub status: String,
}

impl HealthStatus {
    /// Returns true if the backend reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Response of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Service name.
    pub message: String,
    /// Run state, `running` in practice.
    pub status: String,
    /// Backend version.
    pub version: String,
}
