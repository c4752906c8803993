//! Authenticated principal and login credentials.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Closed set of roles the backend assigns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// An authenticated principal together with its bearer token.
///
/// Serialized as the `user` record in durable storage. The password is
/// never part of an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// `None` for the synthetic demo account.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub token: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// A usable identity carries a non-empty token.
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Email/password pair submitted at login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keeps passwords out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
