//! Fixed-credential authenticator.
//!
//! Stands in for the backend login call: a single demo account is accepted
//! and mapped to an administrator identity.

use async_trait::async_trait;
use gatehouse_core::auth::{AuthError, Authenticator};
use gatehouse_core::identity::{Credentials, Identity, Role};

pub const DEMO_EMAIL: &str = "example@example.com";
pub const DEMO_PASSWORD: &str = "correct horse battery staple";
pub const DEMO_NAME: &str = "SuperUser";
pub const DEMO_TOKEN: &str = "SuperSecretToken";

#[derive(Debug, Clone, Default)]
pub struct DemoAuthenticator;

impl DemoAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        if credentials.email != DEMO_EMAIL || credentials.password != DEMO_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Identity {
            id: None,
            email: credentials.email.clone(),
            name: DEMO_NAME.to_string(),
            role: Role::Admin,
            token: DEMO_TOKEN.to_string(),
        })
    }
}
