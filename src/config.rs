//! Client Configuration
//!
//! Deserialized from the page's inline JSON config block; every field has a default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::messages::{Locale, Messages};

/// Toast lifecycle timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyTimings {
    /// Delay before the entry transition starts
    pub show_delay_ms: u64,
    /// How long a toast stays visible
    pub visible_ms: u64,
    /// Exit transition length before the element is removed
    pub exit_ms: u64,
}

impl Default for NotifyTimings {
    fn default() -> Self {
        Self {
            show_delay_ms: 10,
            visible_ms: 2000,
            exit_ms: 300,
        }
    }
}

impl NotifyTimings {
    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms)
    }

    pub fn visible(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    /// Time from `notify` until the element is gone
    pub fn lifetime(&self) -> Duration {
        self.show_delay() + self.visible() + self.exit()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin prepended to relative paths; `None` leaves paths untouched
    pub base_url: Option<String>,
    /// Prefix of the versioned REST API
    pub api_prefix: String,
    pub locale: Locale,
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
    pub notify: NotifyTimings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_prefix: "/v1".to_string(),
            locale: Locale::default(),
            log_level: "info".to_string(),
            notify: NotifyTimings::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn messages(&self) -> Messages {
        Messages::new(self.locale)
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"locale": "ja", "notify": {"visible_ms": 5000}}"#).unwrap();
        assert_eq!(config.locale, Locale::Japanese);
        assert_eq!(config.api_prefix, "/v1");
        assert_eq!(config.notify.visible_ms, 5000);
        assert_eq!(config.notify.show_delay_ms, 10);
        assert_eq!(config.notify.lifetime(), Duration::from_millis(5310));
    }

    #[test]
    fn test_log_level_filter() {
        let mut config = ClientConfig::default();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".into();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
