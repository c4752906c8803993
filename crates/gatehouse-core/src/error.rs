//! Error types for the Gatehouse client layer.

use thiserror::Error;

/// Failures of the storage and configuration side of Gatehouse.
///
/// Request and session failures have their own narrow types
/// (`TransportError`, `RequestFailed`, `AuthError`).
#[derive(Error, Debug, Clone)]
pub enum GatehouseError {
    #[error("IO error: {message}")]
    Io { message: String },

    /// `format` names the encoding, e.g. "TOML" or "JSON".
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    /// Lock acquisition or an unusable store file.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A value did not have the expected shape.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatehouseError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<std::io::Error> for GatehouseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for GatehouseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GatehouseError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for GatehouseError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatehouseError>;
