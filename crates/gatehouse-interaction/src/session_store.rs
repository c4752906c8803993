//! Session store: the single owner of the authenticated identity.
//!
//! State is rehydrated from durable storage at construction and changes
//! only through [`SessionStore::login`] and [`SessionStore::logout`]. The
//! identity carries its token, so the two are always set and cleared
//! together.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gatehouse_core::auth::{AuthError, Authenticator};
use gatehouse_core::config::ClientConfig;
use gatehouse_core::identity::{Credentials, Identity};
use gatehouse_core::navigation::Navigator;
use gatehouse_core::notification::Notification;
use gatehouse_core::session::{LoginOutcome, SessionStatus, TOKEN_KEY, USER_KEY};
use gatehouse_core::storage::KeyValueStorage;
use gatehouse_core::transport::GENERIC_FAILURE_MESSAGE;

use crate::notification_broker::NotificationBroker;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect username or password!";

/// Routes the store navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRoutes {
    pub landing: String,
    pub login: String,
}

impl Default for SessionRoutes {
    fn default() -> Self {
        Self {
            landing: "/".to_string(),
            login: "/login".to_string(),
        }
    }
}

impl From<&ClientConfig> for SessionRoutes {
    fn from(config: &ClientConfig) -> Self {
        Self {
            landing: config.landing_route.clone(),
            login: config.login_route.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct SessionState {
    identity: Option<Identity>,
    status: SessionStatus,
}

pub struct SessionStore {
    state: RwLock<SessionState>,
    storage: Arc<dyn KeyValueStorage>,
    authenticator: Arc<dyn Authenticator>,
    navigator: Arc<dyn Navigator>,
    notifications: NotificationBroker,
    routes: SessionRoutes,
}

impl SessionStore {
    /// Creates the store and restores any persisted session.
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        authenticator: Arc<dyn Authenticator>,
        navigator: Arc<dyn Navigator>,
        notifications: NotificationBroker,
    ) -> Self {
        let identity = restore_identity(storage.as_ref());
        if let Some(ref identity) = identity {
            tracing::info!("[SessionStore] Restored session for {}", identity.email);
        }

        Self {
            state: RwLock::new(SessionState {
                identity,
                status: SessionStatus::Idle,
            }),
            storage,
            authenticator,
            navigator,
            notifications,
            routes: SessionRoutes::default(),
        }
    }

    pub fn with_routes(mut self, routes: SessionRoutes) -> Self {
        self.routes = routes;
        self
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.read().identity.clone()
    }

    pub fn current_token(&self) -> Option<String> {
        self.read().identity.as_ref().map(|identity| identity.token.clone())
    }

    pub fn status(&self) -> SessionStatus {
        self.read().status
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().identity.is_some()
    }

    /// Validates `credentials` and, on success, stores and persists the
    /// identity and navigates to the landing route.
    ///
    /// A rejection leaves the current session untouched and raises one
    /// `warn` notification; it is never returned as an error.
    pub async fn login(&self, credentials: Credentials) -> LoginOutcome {
        self.write().status = SessionStatus::Processing;
        tracing::info!("[SessionStore] Login attempt for {}", credentials.email);

        match self.authenticator.authenticate(&credentials).await {
            Ok(identity) if identity.has_token() => {
                self.persist(&identity);
                {
                    let mut state = self.write();
                    state.identity = Some(identity);
                    state.status = SessionStatus::Idle;
                }
                tracing::info!("[SessionStore] Logged in as {}", credentials.email);
                self.navigator.navigate(&self.routes.landing);
                LoginOutcome::Authenticated
            }
            Ok(_) => {
                tracing::error!("[SessionStore] Authenticator returned an identity without a token");
                self.reject(&AuthError::Backend("missing token".to_string()))
            }
            Err(error) => self.reject(&error),
        }
    }

    /// Clears the session everywhere and navigates to the login route.
    /// Safe to call when nobody is logged in.
    pub fn logout(&self) {
        {
            let mut state = self.write();
            if let Some(ref identity) = state.identity {
                tracing::info!("[SessionStore] Logging out {}", identity.email);
            }
            state.identity = None;
            state.status = SessionStatus::Idle;
        }

        clear_persisted(self.storage.as_ref());
        self.navigator.navigate(&self.routes.login);
    }

    fn reject(&self, error: &AuthError) -> LoginOutcome {
        self.write().status = SessionStatus::Idle;
        tracing::warn!("[SessionStore] Login rejected: {}", error);

        let message = match error {
            AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            AuthError::Backend(_) => GENERIC_FAILURE_MESSAGE,
        };
        self.notifications.add(Notification::warn(message));
        LoginOutcome::Rejected
    }

    fn persist(&self, identity: &Identity) {
        let user = match serde_json::to_string(identity) {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("[SessionStore] Failed to serialize identity: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(USER_KEY, &user) {
            tracing::error!("[SessionStore] Failed to persist session: {}", e);
            return;
        }
        if let Err(e) = self.storage.set(TOKEN_KEY, &identity.token) {
            tracing::error!("[SessionStore] Failed to persist token: {}", e);
            // A user record without its token must not outlive this call.
            if let Err(e) = self.storage.remove(USER_KEY) {
                tracing::error!("[SessionStore] Failed to remove '{}': {}", USER_KEY, e);
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Reads the persisted identity. Incomplete, corrupt or mismatched records
/// are removed and yield `None`; read failures yield `None` untouched.
fn restore_identity(storage: &dyn KeyValueStorage) -> Option<Identity> {
    match (storage.get(USER_KEY), storage.get(TOKEN_KEY)) {
        (Ok(None), Ok(None)) => None,
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("[SessionStore] Failed to read persisted session: {}", e);
            None
        }
        (Ok(Some(user)), Ok(Some(token))) => match serde_json::from_str::<Identity>(&user) {
            Ok(identity) if identity.has_token() && identity.token == token => Some(identity),
            Ok(_) => {
                tracing::warn!("[SessionStore] Persisted token does not match identity, discarding");
                clear_persisted(storage);
                None
            }
            Err(e) => {
                tracing::warn!("[SessionStore] Persisted identity is corrupt, discarding: {}", e);
                clear_persisted(storage);
                None
            }
        },
        _ => {
            tracing::warn!("[SessionStore] Persisted session is incomplete, discarding");
            clear_persisted(storage);
            None
        }
    }
}

fn clear_persisted(storage: &dyn KeyValueStorage) {
    for key in [USER_KEY, TOKEN_KEY] {
        if let Err(e) = storage.remove(key) {
            tracing::error!("[SessionStore] Failed to remove '{}': {}", key, e);
        }
    }
}
