//! Response envelope model and the pure classification step.
//!
//! The backend answers every call with a JSON document. A top-level object
//! with `status: "error"` is an application error; everything else is a
//! success. Classification never performs side effects, so the dispatcher
//! decides separately whether a notification is raised.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{GatehouseError, Result};

/// Value of the `status` field that marks an application error.
pub const ERROR_STATUS: &str = "error";

/// The parsed response of a backend call.
///
/// An allow-listed application error is still returned as
/// [`Envelope::Error`]; branching on the variant after a call is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// The server processed the request. Carries the full response body.
    Success(Value),
    /// The server processed the request but reports a logical failure.
    Error { message: String },
}

impl Envelope {
    /// Parses a response body into an envelope.
    ///
    /// A missing or non-string `message` on an error envelope becomes an
    /// empty string.
    pub fn from_value(body: Value) -> Self {
        let is_error = body
            .get("status")
            .and_then(Value::as_str)
            .is_some_and(|status| status == ERROR_STATUS);

        if !is_error {
            return Self::Success(body);
        }

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self::Error { message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Returns the server message of an error envelope.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            Self::Success(_) => None,
        }
    }

    /// Returns the payload of a success envelope.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(body) => Some(body),
            Self::Error { .. } => None,
        }
    }

    /// Deserializes the payload of a success envelope into `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        match self {
            Self::Success(body) => Ok(T::deserialize(body)?),
            Self::Error { message } => Err(GatehouseError::internal(format!(
                "cannot parse payload of an error envelope: {}",
                message
            ))),
        }
    }
}

impl From<Value> for Envelope {
    fn from(body: Value) -> Self {
        Self::from_value(body)
    }
}

/// Application-error messages that must not raise a notification.
///
/// Matching is exact, e.g. `"user already exists"` during a duplicate
/// check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    messages: Vec<String>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, message: impl Into<String>) -> Self {
        self.insert(message);
        self
    }

    pub fn insert(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.contains(&message) {
            self.messages.push(message);
        }
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|allowed| allowed == message)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for message in iter {
            list.insert(message);
        }
        list
    }
}

/// Result of inspecting an envelope against an allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Success,
    /// Application error whose message is on the allow-list.
    AllowedError,
    /// Application error that should be surfaced to the user.
    Error { message: &'a str },
}

/// Classifies an envelope. The allow-list is consulted before anything
/// else is decided about an error envelope.
pub fn classify<'a>(envelope: &'a Envelope, allowed: &AllowList) -> Classification<'a> {
    match envelope {
        Envelope::Success(_) => Classification::Success,
        Envelope::Error { message } if allowed.contains(message) => Classification::AllowedError,
        Envelope::Error { message } => Classification::Error { message },
    }
}
