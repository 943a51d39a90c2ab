//! The appservice runtime config document.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Local runtime configuration for an appservice.
///
/// `registration_path` points at the registration file this config was
/// generated alongside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub homeserver_url: String,
    pub homeserver_domain: String,
    #[serde(rename = "registration")]
    pub registration_path: String,
    pub host: HostConfig,
    #[serde(rename = "logging", default)]
    pub log_config: LogConfig,
}

impl Config {
    /// Empty host/homeserver settings with default logging.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_yaml(&self) -> Result<String, DomainError> {
        serde_yaml::to_string(self).map_err(|e| DomainError::SerializationFailed {
            document: "config",
            reason: e.to_string(),
        })
    }

    pub fn from_yaml(text: &str) -> Result<Self, DomainError> {
        serde_yaml::from_str(text).map_err(|e| DomainError::ParseFailed {
            document: "config",
            reason: e.to_string(),
        })
    }
}

/// Where the appservice listens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    pub hostname: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_cert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_key: Option<String>,
}

impl HostConfig {
    pub fn has_tls(&self) -> bool {
        self.tls_cert.is_some() && self.tls_key.is_some()
    }
}

/// File logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub directory: String,
    pub file_name_format: String,
    pub file_date_format: String,
    pub file_mode: u32,
    pub timestamp_format: String,
    pub print_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: "./logs".into(),
            file_name_format: "{date}-{index:02}.log".into(),
            file_date_format: "%Y-%m-%d".into(),
            file_mode: 0o600,
            timestamp_format: "%b %e, %Y %H:%M:%S".into(),
            print_level: "debug".into(),
        }
    }
}
