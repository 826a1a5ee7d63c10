//! Client error types.
//!
//! Provides error types for HTTP client operations and decoding of the
//! Admin API's error payloads.

use serde_json::Value;

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Failed to deserialize response.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// API returned an error response.
    #[error("API error [{status}]: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Rate limited (429).
    #[error("rate limited{}", retry_after_suffix(.retry_after))]
    RateLimited {
        /// Retry after seconds.
        retry_after: Option<u64>,
    },

    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Unauthorized (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request could not be formed from the given arguments.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timeout.
    #[error("request timeout")]
    Timeout,
}

fn retry_after_suffix(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!(", retry after {} seconds", secs),
        None => String::new(),
    }
}

impl ClientError {
    /// Returns the HTTP status code for errors reported by the remote API.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::Unauthorized(_) => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the remote API reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}

/// Extracts a human readable message from an error body.
///
/// The Admin API reports failures as `{"errors": ...}` or `{"error": ...}`
/// where the value is a string, a list, or an object keyed by field name.
/// Messages are sorted and joined with `", "`.
pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let payload = value.get("errors").or_else(|| value.get("error"))?;

    let mut messages = Vec::new();
    collect_messages(None, payload, &mut messages);
    if messages.is_empty() {
        return None;
    }

    messages.sort();
    Some(messages.join(", "))
}

fn collect_messages(field: Option<&str>, value: &Value, out: &mut Vec<String>) {
    let text = match value {
        Value::Null => return,
        Value::Array(items) => {
            for item in items {
                collect_messages(field, item, out);
            }
            return;
        }
        Value::Object(map) => {
            for (key, inner) in map {
                collect_messages(Some(key), inner, out);
            }
            return;
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    match field {
        Some(field) => out.push(format!("{}: {}", field, text)),
        None => out.push(text),
    }
}
