use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_APP_NAME: &str = "Gatehouse";

/// Client configuration, stored as `config.toml`.
///
/// Every field has a default so a partial or missing file still loads.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base origin every request path is appended to.
    pub backend_url: String,
    pub app_name: String,
    /// Route navigated to after a successful login.
    pub landing_route: String,
    /// Route navigated to after logout.
    pub login_route: String,
    pub request_timeout_secs: u64,
    pub notification_duration_ms: u64,
    /// Overrides the default location of the session store file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            landing_route: "/".to_string(),
            login_route: "/login".to_string(),
            request_timeout_secs: 30,
            notification_duration_ms: 4000,
            storage_file: None,
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str(r#"backend_url = "https://api.example.com""#).unwrap();
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.login_route, "/login");
        assert_eq!(config.notification_duration(), Duration::from_millis(4000));
    }

    #[test]
    fn test_default_round_trips() {
        let rendered = toml::to_string_pretty(&ClientConfig::default()).unwrap();
        let parsed: ClientConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, ClientConfig::default());
    }
}
