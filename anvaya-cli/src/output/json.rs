//! JSON output formatting.

use anyhow::Result;
use serde::Serialize;

/// JSON shape of a failed command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub network_error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

/// JSON shape of the session state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutput<'a> {
    pub api_base_url: &'a str,
    pub authenticated: bool,
    pub token_storage: &'a str,
}

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats a command failure.
    pub fn format_error(&self, error: &ErrorOutput) -> String {
        // ErrorOutput only holds strings, numbers and bools
        self.format(error)
            .unwrap_or_else(|_| format!(r#"{{"error":{:?}}}"#, error.error))
    }
}
