//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use gatehouse_core::GatehouseError;
use gatehouse_core::config::ClientConfig;
use gatehouse_core::transport::{ApiRequest, HttpMethod, Transport, TransportError, body_to_value};
use reqwest::{Client, Method};
use serde_json::Value;

/// Sends requests to `<base_url><path>` and decodes JSON bodies.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatehouseError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatehouseError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Uses a preconfigured client, e.g. one with custom proxy settings.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, GatehouseError> {
        Self::new(config.backend_url.clone(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Paths are appended verbatim, without inserting or removing slashes.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let mut builder = self
            .client
            .request(Self::method(request.method), self.url(&request.path));

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: body_to_value(&text),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|_| TransportError::Malformed {
            status: status.as_u16(),
            body: Value::String(text),
        })
    }
}
