//! Error normalization.
//!
//! Every failure leaving the client goes through [`normalize_error`], which
//! maps it onto [`ApiError`]. [`error_message`] applies the same message
//! precedence without building an error, for callers that only need text:
//!
//! 1. message of an already-normalized error
//! 2. timeout / connectivity messages when no response was received
//! 3. the server's `detail` field
//! 4. the status-code table
//! 5. a generic fallback

use serde_json::Value;

use crate::error::{ApiError, BoxError};

// ============================================================================
// Messages
// ============================================================================

/// Message for requests aborted by the client timeout.
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please check your connection and try again.";

/// Message for requests that never got a response.
pub const NETWORK_MESSAGE: &str =
    "Unable to connect to the server. Please check your internet connection.";

/// Message when nothing better is known.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Returns the fixed message for an HTTP status code.
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => "Invalid request. Please check your input.",
        401 => "Authentication required. Please log in again.",
        403 => "You do not have permission to perform this action.",
        404 => "The requested resource was not found.",
        422 => "Validation failed. Please check the submitted data.",
        429 => "Too many requests. Please wait a moment and try again.",
        500 => "Internal server error. Please try again later.",
        502..=504 => "The server is temporarily unavailable. Please try again later.",
        _ => "An unknown error occurred (unexpected status).",
    }
}

// ============================================================================
// Raw Failure
// ============================================================================

/// A failure as caught, before normalization.
#[derive(Debug)]
pub enum RawFailure {
    /// Already normalized; passes through unchanged.
    Normalized(ApiError),

    /// The request was sent but no response arrived.
    NoResponse {
        /// True if the client timeout fired.
        timed_out: bool,
        /// Underlying transport error.
        source: Option<BoxError>,
    },

    /// A response arrived with a non-success status.
    Response {
        /// HTTP status code.
        status: u16,
        /// Parsed JSON body, if the body was JSON.
        body: Option<Value>,
    },

    /// Any other failure.
    Other {
        /// Description of the failure, if one is available.
        description: Option<String>,
        /// Underlying error.
        source: Option<BoxError>,
    },
}

impl RawFailure {
    /// Wraps an arbitrary error, keeping its description.
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            description: Some(err.to_string()),
            source: Some(Box::new(err)),
        }
    }

    /// Builds a response failure from a status and raw body bytes.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        Self::Response {
            status,
            body: serde_json::from_slice(body).ok(),
        }
    }
}

impl From<ApiError> for RawFailure {
    fn from(err: ApiError) -> Self {
        Self::Normalized(err)
    }
}

impl From<reqwest::Error> for RawFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::NoResponse {
                timed_out: true,
                source: Some(Box::new(err)),
            };
        }

        if let Some(status) = err.status() {
            return Self::Response {
                status: status.as_u16(),
                body: None,
            };
        }

        if err.is_connect() || err.is_request() {
            return Self::NoResponse {
                timed_out: false,
                source: Some(Box::new(err)),
            };
        }

        Self::other(err)
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Extracts a human-readable `detail` from a server error body.
///
/// A string detail is returned verbatim. A list of validation items has its
/// `msg` entries joined with `; `.
pub fn server_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// Derives the user-facing message for a failure.
pub fn error_message(failure: &RawFailure) -> String {
    match failure {
        RawFailure::Normalized(err) => err.message().to_string(),
        RawFailure::NoResponse { timed_out: true, .. } => TIMEOUT_MESSAGE.to_string(),
        RawFailure::NoResponse { timed_out: false, .. } => NETWORK_MESSAGE.to_string(),
        RawFailure::Response { status, body } => body
            .as_ref()
            .and_then(server_detail)
            .unwrap_or_else(|| status_message(*status).to_string()),
        RawFailure::Other { description, .. } => description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string(),
    }
}

/// Converts a caught failure into an [`ApiError`].
///
/// Idempotent: an already-normalized error is returned unchanged.
pub fn normalize_error(failure: RawFailure) -> ApiError {
    let message = error_message(&failure);

    match failure {
        RawFailure::Normalized(err) => err,
        RawFailure::NoResponse { source, .. } => {
            let err = ApiError::network(message);
            match source {
                Some(source) => err.with_source(source),
                None => err,
            }
        }
        RawFailure::Response { status, body } => {
            let err = ApiError::new(status, message);
            match body
                .as_ref()
                .and_then(|b| b.get("error_code"))
                .and_then(Value::as_str)
            {
                Some(code) => err.with_error_code(code),
                None => err,
            }
        }
        RawFailure::Other { source, .. } => {
            let err = ApiError::new(500, message);
            match source {
                Some(source) => err.with_source(source),
                None => err,
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalized_passes_through() {
        let original = ApiError::new(418, "teapot").with_error_code("TEAPOT");
        let again = normalize_error(RawFailure::Normalized(original));
        assert_eq!(again.status(), 418);
        assert_eq!(again.message(), "teapot");
        assert_eq!(again.error_code(), Some("TEAPOT"));

        let twice = normalize_error(normalize_error(RawFailure::Response { status: 404, body: None }).into());
        assert_eq!(twice.status(), 404);
        assert_eq!(twice.message(), status_message(404));
    }

    #[test]
    fn test_no_response_is_network_with_status_zero() {
        for timed_out in [true, false] {
            let err = normalize_error(RawFailure::NoResponse { timed_out, source: None });
            assert!(err.is_network_error());
            assert_eq!(err.status(), 0);
        }
    }

    #[test]
    fn test_timeout_message() {
        let err = normalize_error(RawFailure::NoResponse { timed_out: true, source: None });
        assert!(err.message().starts_with("Request timed out"));

        let err = normalize_error(RawFailure::NoResponse { timed_out: false, source: None });
        assert_eq!(err.message(), NETWORK_MESSAGE);
    }

    #[test]
    fn test_detail_overrides_table() {
        let body = json!({"detail": "Wing not found (slug='nope')", "error_code": "NOT_FOUND"});
        let err = normalize_error(RawFailure::Response { status: 404, body: Some(body) });
        assert_eq!(err.message(), "Wing not found (slug='nope')");
        assert_eq!(err.error_code(), Some("NOT_FOUND"));
        assert!(!err.is_network_error());
        assert!(err.is_not_found());
    }

    #[test]
    fn test_too_many_requests_without_detail() {
        let err = normalize_error(RawFailure::Response { status: 429, body: Some(json!({})) });
        assert_eq!(err.message(), "Too many requests. Please wait a moment and try again.");
    }

    #[test]
    fn test_status_table() {
        assert_eq!(status_message(502), status_message(503));
        assert_eq!(status_message(503), status_message(504));
        assert_ne!(status_message(500), status_message(502));
        assert!(status_message(418).contains("unknown"));
    }

    #[test]
    fn test_validation_detail_list_is_joined() {
        let body = json!({"detail": [
            {"loc": ["body", "title"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "wing_id"], "msg": "value is not a valid integer", "type": "type_error.integer"}
        ]});
        assert_eq!(
            server_detail(&body).as_deref(),
            Some("field required; value is not a valid integer")
        );
    }

    #[test]
    fn test_empty_or_non_string_detail_falls_back() {
        assert!(server_detail(&json!({"detail": ""})).is_none());
        assert!(server_detail(&json!({"detail": 12})).is_none());
        assert!(server_detail(&json!({"detail": []})).is_none());

        let err = normalize_error(RawFailure::Response { status: 403, body: Some(json!({"detail": null})) });
        assert_eq!(err.message(), status_message(403));
    }

    #[test]
    fn test_non_json_body() {
        let failure = RawFailure::from_body(502, b"<html>Bad Gateway</html>");
        let err = normalize_error(failure);
        assert_eq!(err.status(), 502);
        assert_eq!(err.message(), status_message(502));
    }

    #[test]
    fn test_other_errors_become_500() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = normalize_error(RawFailure::other(io));
        assert_eq!(err.status(), 500);
        assert!(!err.is_network_error());
        assert_eq!(err.message(), "disk on fire");

        let err = normalize_error(RawFailure::Other { description: None, source: None });
        assert_eq!(err.message(), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_error_message_matches_normalized() {
        let failure = RawFailure::Response { status: 401, body: None };
        let text = error_message(&failure);
        assert_eq!(normalize_error(failure).message(), text);
    }
}
