use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::model::session::Participants;

/// Environment variable that overrides the persisted base address.
pub const API_URL_ENV: &str = "LAST_DIALOGUE_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Connection settings for the session service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub participant_one: String,
    pub participant_two: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.into(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            participant_one: "Persona A".into(),
            participant_two: "Persona B".into(),
        }
    }
}

impl ClientConfig {
    /// Applies `LAST_DIALOGUE_API_URL` when it is set.
    pub fn with_env_override(self) -> Self {
        self.with_override(std::env::var(API_URL_ENV).ok())
    }

    /// Blank overrides are ignored.
    pub fn with_override(mut self, api_base_url: Option<String>) -> Self {
        if let Some(url) = api_base_url {
            let url = url.trim();
            if !url.is_empty() {
                self.api_base_url = url.to_string();
            }
        }
        self
    }

    /// Base address without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim().trim_end_matches('/')
    }

    /// Zero is clamped to one millisecond.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.max(1))
    }

    pub fn participants(&self) -> Participants {
        Participants::new(&self.participant_one, &self.participant_two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_persisted_address() {
        let config = ClientConfig {
            api_base_url: "http://persisted:9000".into(),
            ..Default::default()
        }
        .with_override(Some("http://from-env:8080".into()));

        assert_eq!(config.base_url(), "http://from-env:8080");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = ClientConfig::default().with_override(Some("   ".into()));
        assert_eq!(config.base_url(), DEFAULT_API_URL);

        let config = ClientConfig::default().with_override(None);
        assert_eq!(config.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = ClientConfig::default().with_override(Some("http://host:1/api//".into()));
        assert_eq!(config.base_url(), "http://host:1/api");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "api_base_url": "http://elsewhere" }"#).unwrap();

        assert_eq!(config.api_base_url, "http://elsewhere");
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.participant_one, "Persona A");
        assert_eq!(config.participant_two, "Persona B");
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let config = ClientConfig {
            request_timeout_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_millis(1));
    }
}
