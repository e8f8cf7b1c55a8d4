//! The Anvaya API client.
//!
//! [`AnvayaClient`] owns the shared transport. Its operations are split by
//! audience: read endpoints live in [`crate::public`], authenticated write
//! endpoints in [`crate::admin`].

use anvaya_core::{ApiInfo, HealthStatus};
use tracing::{info, instrument};

use crate::context::{ClientContext, ClientSettings};
use crate::error::{ApiError, ClientError};
use crate::host::{HttpClient, Session};

/// Prefix of every resource path on the backend.
pub(crate) const API_PREFIX: &str = "api";

/// Client for the Anvaya backend.
#[derive(Debug, Clone)]
pub struct AnvayaClient {
    pub(crate) http: HttpClient,
}

impl AnvayaClient {
    /// Creates a client from a context.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL is unusable.
    pub fn new(ctx: ClientContext) -> Result<Self, ClientError> {
        let http = HttpClient::new(&ctx)?;
        Ok(Self { http })
    }

    /// Creates a client with an in-memory session, configured from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL is unusable.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientContext::builder().settings(ClientSettings::from_env()).build())
    }

    /// The shared transport.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The session whose token is sent with requests.
    pub fn session(&self) -> &Session {
        self.http.session()
    }

    /// Returns true if an admin token is stored.
    pub async fn is_authenticated(&self) -> bool {
        self.session().is_authenticated().await
    }

    /// Forgets the stored admin token. The backend keeps no session state.
    pub async fn logout(&self) {
        self.session().clear().await;
        info!("Logged out");
    }

    /// Checks backend liveness via `GET /health`.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.http.get(&["health"], &[]).await
    }

    /// Fetches service metadata via `GET /`.
    #[instrument(skip(self))]
    pub async fn api_info(&self) -> Result<ApiInfo, ApiError> {
        self.http.get(&[], &[]).await
    }
}
