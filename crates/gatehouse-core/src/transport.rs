//! Transport seam between the dispatcher and the network.

use async_trait::async_trait;
use serde_json::Value;
use strum::{AsRefStr, Display};
use thiserror::Error;

/// Text every transport failure is reduced to before it reaches a caller.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something bad happened; please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request relative to the configured backend origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Appended verbatim to the base origin.
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Failure below the envelope level.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned code {status}, body was: {body}")]
    Status { status: u16, body: Value },

    /// The backend answered 2xx with a body that is not JSON.
    #[error("backend returned code {status} with a malformed body: {body}")]
    Malformed { status: u16, body: Value },
}

impl TransportError {
    /// Whether the failure carries a body produced by the backend.
    pub fn is_server_origin(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Malformed { .. })
    }

    /// The backend body, or `None` for client-side failures.
    pub fn server_body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } | Self::Malformed { body, .. } => Some(body),
            Self::Network(_) | Self::Encode(_) => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Malformed { status, .. } => Some(*status),
            Self::Network(_) | Self::Encode(_) => None,
        }
    }
}

/// Performs one HTTP exchange and returns the decoded JSON body.
///
/// A 2xx response with an empty body decodes to `Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;
}

/// The only failure a dispatcher caller ever sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Something bad happened; please try again later.")]
pub struct RequestFailed;

impl RequestFailed {
    pub fn message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

/// Parses a raw response body the way the backend is expected to send it:
/// JSON when possible, otherwise the text as a JSON string.
pub fn body_to_value(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_renders_uppercase() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Get.as_ref(), "GET");
    }

    #[test]
    fn test_server_origin() {
        let status = TransportError::Status {
            status: 500,
            body: json!({ "error": "boom" }),
        };
        assert!(status.is_server_origin());
        assert_eq!(status.status_code(), Some(500));

        let network = TransportError::Network("connection refused".to_string());
        assert!(!network.is_server_origin());
        assert_eq!(network.server_body(), None);
    }

    #[test]
    fn test_request_failed_message() {
        assert_eq!(RequestFailed.to_string(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(RequestFailed.message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_body_to_value() {
        assert_eq!(body_to_value(""), Value::Null);
        assert_eq!(body_to_value(r#"{"a":1}"#), json!({ "a": 1 }));
        assert_eq!(body_to_value("Bad Gateway"), json!("Bad Gateway"));
    }
}
