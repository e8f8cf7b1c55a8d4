//! Shared HTTP transport.
//!
//! Every API call goes through one [`HttpClient`]. It resolves paths against
//! the configured base URL, attaches the session's bearer token, reacts to
//! 401 responses and turns every failure into an [`ApiError`].

use std::sync::Arc;

use anvaya_core::ValidationError;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    multipart::Form,
    Client, Method, RequestBuilder, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::context::ClientContext;
use crate::error::{ApiError, ClientError};
use crate::host::navigation::{is_under_prefix, Navigator};
use crate::host::session::Session;
use crate::normalize::{normalize_error, RawFailure};

/// User agent string for Anvaya.
const USER_AGENT: &str = concat!("anvaya/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Client
// ============================================================================

/// Pre-configured transport shared by the public and admin APIs.
#[derive(Clone)]
pub struct HttpClient {
    inner: Client,
    base_url: Url,
    session: Session,
    navigator: Arc<dyn Navigator>,
    protected_prefix: String,
    login_path: String,
}

impl HttpClient {
    /// Creates a transport from a client context.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL cannot be used as a
    /// base or the underlying HTTP client cannot be built.
    pub fn new(ctx: &ClientContext) -> Result<Self, ClientError> {
        let settings = &ctx.settings;

        let base_url = Url::parse(settings.base_url.trim())
            .map_err(|e| ClientError::Config(format!("invalid base URL '{}': {e}", settings.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base URL '{}' cannot have paths appended",
                settings.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let inner = Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {e}")))?;

        debug!(base_url = %base_url, timeout_ms = settings.timeout.as_millis(), "HTTP client ready");

        Ok(Self {
            inner,
            base_url,
            session: ctx.session.clone(),
            navigator: Arc::clone(&ctx.navigator),
            protected_prefix: settings.protected_prefix.clone(),
            login_path: settings.login_path.clone(),
        })
    }

    /// Base URL all paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Session whose token is attached to requests.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resolves path segments against the base URL.
    ///
    /// Each segment is percent-encoded, so caller-supplied identifiers
    /// containing `/`, `?` or `#` stay inside their segment.
    ///
    /// # Errors
    ///
    /// Returns a 400 [`ApiError`] without sending anything if a segment is
    /// empty, `.` or `..`.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        for segment in segments {
            ValidationError::require_segment(segment).map_err(|e| {
                debug!(segment = %segment, "Rejected path segment");
                ApiError::new(400, e.to_string()).with_source(Box::new(e))
            })?;
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    // ------------------------------------------------------------------------
    // Verbs
    // ------------------------------------------------------------------------

    /// Performs a GET request and decodes the JSON response.
    #[instrument(skip(self, segments, query), fields(path = %segments.join("/")))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = self.inner.get(self.endpoint(segments)?).query(query);
        let response = self.execute(builder).await?;
        decode(response).await
    }

    /// Performs a POST request with a JSON body.
    #[instrument(skip(self, segments, body), fields(path = %segments.join("/")))]
    pub async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.inner.post(self.endpoint(segments)?).json(body);
        let response = self.execute(builder).await?;
        decode(response).await
    }

    /// Performs a POST request with a multipart body.
    #[instrument(skip(self, segments, form), fields(path = %segments.join("/")))]
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        form: Form,
    ) -> Result<T, ApiError> {
        self.multipart(Method::POST, segments, form).await
    }

    /// Performs a PUT request with a multipart body.
    #[instrument(skip(self, segments, form), fields(path = %segments.join("/")))]
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        form: Form,
    ) -> Result<T, ApiError> {
        self.multipart(Method::PUT, segments, form).await
    }

    /// Performs a DELETE request. Any response body is ignored.
    #[instrument(skip(self, segments), fields(path = %segments.join("/")))]
    pub async fn delete(&self, segments: &[&str]) -> Result<(), ApiError> {
        let builder = self.inner.delete(self.endpoint(segments)?);
        self.execute(builder).await?;
        Ok(())
    }

    async fn multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        form: Form,
    ) -> Result<T, ApiError> {
        let builder = self
            .inner
            .request(method, self.endpoint(segments)?)
            .multipart(form);
        let response = self.execute(builder).await?;
        decode(response).await
    }

    // ------------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------------

    /// Sends a request with the session token attached.
    ///
    /// Non-success responses are normalized; a 401 clears the session first.
    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let builder = match self.session.token().await {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let request = builder.build().map_err(|e| normalize_error(e.into()))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!(%method, %path, "Sending request");

        let response = match self.inner.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                let err = normalize_error(e.into());
                warn!(%method, %path, error = %err, "Request got no response");
                return Err(err);
            }
        };

        let status = response.status();
        debug!(status = status.as_u16(), "Response received");
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized().await;
        }

        let body = response.bytes().await.unwrap_or_default();
        let err = normalize_error(RawFailure::from_body(status.as_u16(), &body));
        debug!(status = status.as_u16(), message = %err, "Request failed");
        Err(err)
    }

    /// Clears the session and, on protected locations, redirects to login.
    async fn handle_unauthorized(&self) {
        self.session.clear().await;

        let current = self.navigator.current_path();
        if is_under_prefix(&current, &self.protected_prefix) {
            warn!(from = %current, to = %self.login_path, "Session rejected, redirecting to login");
            self.navigator.redirect(&self.login_path);
        } else {
            debug!(path = %current, "Session rejected outside protected area");
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("protected_prefix", &self.protected_prefix)
            .field("login_path", &self.login_path)
            .finish_non_exhaustive()
    }
}

/// Reads a response body as JSON.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await.map_err(|e| normalize_error(e.into()))?;
    serde_json::from_slice(&bytes).map_err(|e| normalize_error(RawFailure::other(e)))
}

// ============================================================================
// Tests
// ============================================================================
