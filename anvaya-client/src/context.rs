//! Client context.
//!
//! The context bundles what the transport needs besides the network: the
//! session holding the bearer token, the navigation collaborator and the
//! connection settings.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::host::{
    navigation::{Navigator, NoopNavigator},
    session::{Session, TokenStore},
};

/// Default API base URL (local development backend).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Path prefix whose pages redirect to login on 401.
pub const DEFAULT_PROTECTED_PREFIX: &str = "/admin";

/// Login page path.
pub const DEFAULT_LOGIN_PATH: &str = "/admin/login";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "ANVAYA_API_URL";

// ============================================================================
// Client Settings
// ============================================================================

/// Connection settings for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Backend base URL, without the `/api` prefix.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Locations under this prefix are redirected to login on 401.
    pub protected_prefix: String,
    /// Where to redirect on 401.
    pub login_path: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            protected_prefix: DEFAULT_PROTECTED_PREFIX.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl ClientSettings {
    /// Default settings with the base URL taken from `ANVAYA_API_URL` if set.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(url) = std::env::var(BASE_URL_ENV).ok().filter(|u| !u.trim().is_empty()) {
            debug!(base_url = %url, "Using base URL from environment");
            settings.base_url = url;
        }
        settings
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// Client Context
// ============================================================================

/// Everything the transport needs besides the network.
#[derive(Clone)]
pub struct ClientContext {
    /// Session holding the bearer token.
    pub session: Session,
    /// Collaborator told about redirects to login.
    pub navigator: Arc<dyn Navigator>,
    /// Connection settings.
    pub settings: ClientSettings,
}

impl ClientContext {
    /// Creates a context with an in-memory session and no navigation.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> ClientContextBuilder {
        ClientContextBuilder::new()
    }
}

impl Default for ClientContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Client Context Builder
// ============================================================================

/// Builder for constructing a [`ClientContext`].
pub struct ClientContextBuilder {
    session: Option<Session>,
    navigator: Option<Arc<dyn Navigator>>,
    settings: ClientSettings,
}

impl ClientContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            session: None,
            navigator: None,
            settings: ClientSettings::default(),
        }
    }

    /// Sets the session.
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Sets the token store, wrapping it in a new session.
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.session = Some(Session::new(store));
        self
    }

    /// Sets the navigation collaborator.
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Sets all connection settings.
    pub fn settings(mut self, settings: ClientSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.settings.base_url = base_url.into();
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Builds the context.
    pub fn build(self) -> ClientContext {
        ClientContext {
            session: self.session.unwrap_or_default(),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator)),
            settings: self.settings,
        }
    }
}

impl Default for ClientContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url, "http://localhost:8000");
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.protected_prefix, "/admin");
        assert_eq!(settings.login_path, "/admin/login");
    }

    #[test]
    fn test_context_builder() {
        let ctx = ClientContext::builder()
            .base_url("https://api.anvaya.example")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(ctx.settings.base_url, "https://api.anvaya.example");
        assert_eq!(ctx.settings.timeout, Duration::from_secs(5));
        assert_eq!(ctx.navigator.current_path(), "/");
    }

    #[test]
    fn test_settings_chain() {
        let settings = ClientSettings::default()
            .with_base_url("http://10.0.0.2:9000")
            .with_timeout(Duration::from_millis(500));
        assert_eq!(settings.base_url, "http://10.0.0.2:9000");
        assert_eq!(settings.timeout, Duration::from_millis(500));
    }
}
