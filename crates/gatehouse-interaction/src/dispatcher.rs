//! Request dispatcher.
//!
//! Every call goes through the same pipeline:
//!
//! 1. the transport exchange,
//! 2. the application-error check (`status: "error"` envelopes raise a
//!    `warn` notification unless their message is allow-listed),
//! 3. transport-error recovery (log, notify server-origin bodies, and
//!    collapse everything into [`RequestFailed`]).
//!
//! Callers receive either the envelope, unchanged, or the generic failure.

use std::sync::Arc;

use gatehouse_core::envelope::{AllowList, Classification, Envelope, classify};
use gatehouse_core::notification::Notification;
use gatehouse_core::transport::{ApiRequest, HttpMethod, RequestFailed, Transport, TransportError};
use serde::Serialize;

use crate::notification_broker::NotificationBroker;

/// Per-call options for `get`.
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// Application errors that are returned silently. The caller still
    /// receives `Envelope::Error` and must branch on it.
    pub allowed_errors: AllowList,
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_error(mut self, message: impl Into<String>) -> Self {
        self.allowed_errors.insert(message);
        self
    }
}

/// Issues requests against the single configured backend.
#[derive(Clone)]
pub struct RequestDispatcher {
    transport: Arc<dyn Transport>,
    notifications: NotificationBroker,
}

impl RequestDispatcher {
    pub fn new(transport: Arc<dyn Transport>, notifications: NotificationBroker) -> Self {
        Self {
            transport,
            notifications,
        }
    }

    pub async fn get(&self, path: &str, options: GetOptions) -> Result<Envelope, RequestFailed> {
        let request = ApiRequest::new(HttpMethod::Get, path);
        self.dispatch(request, &options.allowed_errors).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Envelope, RequestFailed>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request_with_body(HttpMethod::Post, path, body)?;
        self.dispatch(request, &AllowList::new()).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Envelope, RequestFailed>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request_with_body(HttpMethod::Put, path, body)?;
        self.dispatch(request, &AllowList::new()).await
    }

    pub async fn delete(&self, path: &str) -> Result<Envelope, RequestFailed> {
        let request = ApiRequest::new(HttpMethod::Delete, path);
        self.dispatch(request, &AllowList::new()).await
    }

    fn request_with_body<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<ApiRequest, RequestFailed>
    where
        B: Serialize + ?Sized,
    {
        match serde_json::to_value(body) {
            Ok(value) => Ok(ApiRequest::new(method, path).with_body(value)),
            Err(e) => Err(self.recover(
                method,
                path,
                TransportError::Encode(e.to_string()),
            )),
        }
    }

    async fn dispatch(
        &self,
        request: ApiRequest,
        allowed: &AllowList,
    ) -> Result<Envelope, RequestFailed> {
        let method = request.method;
        let path = request.path.clone();

        tracing::debug!("[Dispatcher] {} {}", method, path);

        match self.transport.send(request).await {
            Ok(body) => Ok(self.check_error(Envelope::from_value(body), allowed)),
            Err(error) => Err(self.recover(method, &path, error)),
        }
    }

    /// Surfaces non-allow-listed application errors. The envelope is
    /// returned as it came in.
    fn check_error(&self, envelope: Envelope, allowed: &AllowList) -> Envelope {
        match classify(&envelope, allowed) {
            Classification::Error { message } => {
                tracing::warn!("[Dispatcher] Application error: {}", message);
                self.notifications.add(Notification::warn(message));
            }
            Classification::AllowedError => {
                tracing::debug!("[Dispatcher] Allow-listed application error");
            }
            Classification::Success => {}
        }
        envelope
    }

    fn recover(&self, method: HttpMethod, path: &str, error: TransportError) -> RequestFailed {
        match (error.status_code(), error.server_body()) {
            (Some(status), Some(body)) => {
                tracing::error!(
                    "[Dispatcher] {} {}: Backend returned code {}, body was: {}",
                    method,
                    path,
                    status,
                    body
                );
                self.notifications.add(Notification::warn(body.to_string()));
            }
            _ => {
                tracing::error!("[Dispatcher] {} {}: An error occurred: {}", method, path, error);
            }
        }
        RequestFailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_options_collect_allowed_errors() {
        let options = GetOptions::new()
            .allow_error("user already exists")
            .allow_error("user already exists");
        assert!(options.allowed_errors.contains("user already exists"));
        assert_eq!(
            options.allowed_errors,
            AllowList::new().with("user already exists")
        );
    }
}
