//! # Error normalization for API responses
//!
//! Every request made by this crate resolves to one of two failures:
//!
//! - [`ApiError::Network`] — the request never produced a usable HTTP
//!   response (DNS failure, refused connection, aborted fetch). The display
//!   string is a fixed connectivity message; the underlying [`reqwest::Error`]
//!   is kept as the source for logging.
//! - [`ApiError::Server`] — the server answered with a non-success status.
//!   The message is extracted from the response body by [`from_response`].
//!
//! The remote API reports failures in two body shapes: `{"detail": "..."}`
//! for auth and permission errors, and a map of field name to a list of
//! validation messages for bad form input. [`from_response`] shows a `detail`
//! string verbatim, flattens a field map to `field: msg, msg` lines, and
//! falls back to a caller-supplied generic string for anything else.

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced to the user by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable HTTP response.
    #[error("Unable to connect to the server. Please check your internet connection and try again.")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
}

/// Normalize a non-success response into an [`ApiError::Server`].
pub(crate) fn from_response(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = message_from_body(body).unwrap_or_else(|| fallback.to_string());
    ApiError::Server { status, message }
}

fn message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let map = value.as_object()?;

    if let Some(detail) = map.get("detail").and_then(Value::as_str) {
        return Some(detail.to_string());
    }
    if map.is_empty() {
        return None;
    }

    let lines: Vec<String> = map
        .iter()
        .map(|(field, messages)| format!("{field}: {}", flatten_messages(messages)))
        .collect();
    Some(lines.join("\n"))
}

fn flatten_messages(messages: &Value) -> String {
    match messages {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_is_shown_verbatim() {
        let err = from_response(401, r#"{"detail": "Invalid token."}"#, "fallback");
        assert_eq!(err.to_string(), "Invalid token.");
    }

    #[test]
    fn field_map_is_flattened() {
        let body = r#"{"title": ["This field is required."]}"#;
        let err = from_response(400, body, "fallback");
        assert_eq!(err.to_string(), "title: This field is required.");
    }

    #[test]
    fn multiple_messages_per_field_are_joined() {
        let body = r#"{"password": ["Too short.", "Too common."]}"#;
        let err = from_response(400, body, "fallback");
        assert_eq!(err.to_string(), "password: Too short., Too common.");
    }

    #[test]
    fn unstructured_body_uses_fallback() {
        let err = from_response(502, "<html>Bad Gateway</html>", "Error trying to pledge");
        assert_eq!(err.to_string(), "Error trying to pledge");
    }

    #[test]
    fn empty_body_uses_fallback() {
        let err = from_response(500, "", "Something went wrong");
        assert_eq!(err.to_string(), "Something went wrong");
    }

    #[test]
    fn empty_object_uses_fallback() {
        let err = from_response(500, "{}", "Something went wrong");
        assert_eq!(err.to_string(), "Something went wrong");
    }

    #[test]
    fn status_is_preserved() {
        match from_response(403, r#"{"detail": "Forbidden"}"#, "fallback") {
            ApiError::Server { status, .. } => assert_eq!(status, 403),
            ApiError::Network(_) => panic!("expected a server error"),
        }
    }
}
