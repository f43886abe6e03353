//! # Client configuration: `bloglist.toml`
//!
//! Defines the TOML configuration read by the frontends at startup
//! (filename: [`ClientConfig::filename`] = `"bloglist.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3003"   # backend origin, without /api
//!
//! [notifications]
//! duration_ms = 5000                   # how long a notification stays visible
//!
//! [session]
//! storage_key = "loggedBlogappUser"    # local storage key for the session
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Provides builder helpers, TOML (de)serialisation, and the canonical filename. |
//! | [`ApiConfig`] | Backend origin. |
//! | [`NotificationConfig`] | Auto-clear delay, default **5 seconds**. |
//! | [`SessionConfig`] | Storage key of the persisted user. |
//!
//! All structs implement `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::DEFAULT_SESSION_KEY;

/// Top-level configuration stored in `bloglist.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin serving `/api/*`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3003".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Notification configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    5000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

/// Session persistence configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Self::default()
        }
    }

    /// Builder method to set the notification delay.
    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notifications.duration_ms = duration.as_millis() as u64;
        self
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notifications.duration_ms)
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "bloglist.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3003");
        assert_eq!(config.notification_duration(), Duration::from_secs(5));
        assert_eq!(config.session.storage_key, "loggedBlogappUser");
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://127.0.0.1:9000"

            [notifications]
            duration_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.notification_duration(), Duration::from_millis(250));
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("http://example.test")
            .with_notification_duration(Duration::from_secs(2));
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
