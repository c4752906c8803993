//! Authentication seam used by the session store.

use async_trait::async_trait;
use thiserror::Error;

use crate::identity::{Credentials, Identity};

/// Why an authentication attempt did not produce an identity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Incorrect username or password!")]
    InvalidCredentials,

    #[error("Authentication backend error: {0}")]
    Backend(String),
}

/// Validates credentials and produces the identity to store.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError>;
}
