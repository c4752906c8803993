//! Session state vocabulary shared by the session store and its callers.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Storage key of the serialized identity.
pub const USER_KEY: &str = "user";

/// Storage key of the raw bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Whether a login is currently in flight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Idle,
    Processing,
}

/// What a login attempt ended in. Rejections are reported to the user by
/// the store itself; callers only branch on the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Rejected,
}

impl LoginOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}
