// ABOUTME: Environment configuration management for the client
// ABOUTME: Platform-dependent backend host selection, data directory, and timeout parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `FITCOACH_API_BASE_URL` | derived from the platform |
//! | `FITCOACH_PLATFORM` | `desktop` |
//! | `FITCOACH_DEVICE_HOST` | `10.0.0.171` |
//! | `FITCOACH_DATA_DIR` | `<platform data dir>/fitcoach` |
//! | `FITCOACH_HTTP_TIMEOUT_SECS` | `30` (`0` disables) |
//! | `FITCOACH_HEALTH_TIMEOUT_SECS` | `10` |
//! | `ENVIRONMENT` | `development` |
//!
//! Logging reads `RUST_LOG` and `LOG_FORMAT` itself, see [`crate::logging`].

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::constants::{network, storage};
use crate::errors::{AppError, AppResult};

/// Deployment environment; production switches logging to JSON with source locations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production build
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Platform the client runs on; decides how the backend host is reached
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android emulator, reaches the host through the loopback alias
    Android,
    /// iOS device or simulator on the development LAN
    Ios,
    /// Desktop build on the development LAN
    #[default]
    Desktop,
}

impl Platform {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "android" => Self::Android,
            "ios" => Self::Ios,
            _ => Self::Desktop,
        }
    }

    /// Default backend base URL for this platform
    #[must_use]
    pub fn default_base_url(self, device_host: &str) -> String {
        match self {
            Self::Android => format!(
                "http://{}:{}",
                network::ANDROID_EMULATOR_HOST,
                network::BACKEND_PORT
            ),
            Self::Ios | Self::Desktop => format!("http://{device_host}:{}", network::BACKEND_PORT),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Android => write!(f, "android"),
            Self::Ios => write!(f, "ios"),
            Self::Desktop => write!(f, "desktop"),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Runtime platform
    pub platform: Platform,
    /// Backend base URL without trailing slash
    pub base_url: String,
    /// Directory holding the local key-value store
    pub data_dir: PathBuf,
    /// Per-request timeout, `None` waits indefinitely
    pub http_timeout: Option<Duration>,
    /// Bound on each platform health call
    pub health_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a numeric variable does not parse, no data
    /// directory can be determined, or validation fails
    pub fn from_env() -> AppResult<Self> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!("Configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let platform = lookup("FITCOACH_PLATFORM")
            .map(|s| Platform::from_str_or_default(&s))
            .unwrap_or_default();
        let device_host = lookup("FITCOACH_DEVICE_HOST")
            .unwrap_or_else(|| network::DEFAULT_DEVICE_HOST.to_owned());
        let base_url = lookup("FITCOACH_API_BASE_URL")
            .unwrap_or_else(|| platform.default_base_url(&device_host));

        let data_dir = match lookup("FITCOACH_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let http_timeout_secs = parse_secs(
            lookup("FITCOACH_HTTP_TIMEOUT_SECS"),
            "FITCOACH_HTTP_TIMEOUT_SECS",
            network::DEFAULT_HTTP_TIMEOUT_SECS,
        )?;
        let health_timeout_secs = parse_secs(
            lookup("FITCOACH_HEALTH_TIMEOUT_SECS"),
            "FITCOACH_HEALTH_TIMEOUT_SECS",
            network::DEFAULT_HEALTH_TIMEOUT_SECS,
        )?;

        let config = Self {
            environment: lookup("ENVIRONMENT")
                .map(|s| Environment::from_str_or_default(&s))
                .unwrap_or_default(),
            platform,
            base_url: normalize_base_url(&base_url),
            data_dir,
            http_timeout: (http_timeout_secs > 0).then(|| Duration::from_secs(http_timeout_secs)),
            health_timeout: Duration::from_secs(health_timeout_secs),
        };

        config.validate()?;
        Ok(config)
    }

    /// Override the backend base URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the URL is not http(s)
    pub fn with_base_url(mut self, base_url: &str) -> AppResult<Self> {
        self.base_url = normalize_base_url(base_url);
        self.validate()?;
        Ok(self)
    }

    /// Override the data directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` on an unusable base URL or a zero health timeout
    pub fn validate(&self) -> AppResult<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| AppError::config(format!("Invalid backend URL '{}': {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "Backend URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.health_timeout.is_zero() {
            return Err(AppError::config(
                "FITCOACH_HEALTH_TIMEOUT_SECS must be greater than 0",
            ));
        }
        Ok(())
    }

    /// One-line summary for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} platform={} backend={} data_dir={} http_timeout={} health_timeout={}s",
            self.environment,
            self.platform,
            self.base_url,
            self.data_dir.display(),
            self.http_timeout
                .map_or_else(|| "none".to_owned(), |t| format!("{}s", t.as_secs())),
            self.health_timeout.as_secs(),
        )
    }
}

fn default_data_dir() -> AppResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(storage::APP_DIR_NAME))
        .ok_or_else(|| AppError::config("Could not determine a data directory; set FITCOACH_DATA_DIR"))
}

fn parse_secs(raw: Option<String>, name: &str, default: u64) -> AppResult<u64> {
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{name} must be a whole number of seconds")))
    })
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_android_uses_emulator_alias() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("FITCOACH_PLATFORM", "android"),
            ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.2.2:8000");
    }

    #[test]
    fn test_other_platforms_use_device_host() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("FITCOACH_PLATFORM", "ios"),
            ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.171:8000");

        let custom = ClientConfig::from_lookup(lookup_from(&[
            ("FITCOACH_DEVICE_HOST", "192.168.1.20"),
            ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
        ]))
        .unwrap();
        assert_eq!(custom.base_url, "http://192.168.1.20:8000");
    }

    #[test]
    fn test_zero_http_timeout_disables_it() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("FITCOACH_HTTP_TIMEOUT_SECS", "0"),
            ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
        ]))
        .unwrap();
        assert!(config.http_timeout.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ClientConfig::from_lookup(lookup_from(&[
            ("FITCOACH_API_BASE_URL", "ftp://example.com"),
            ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
        ]))
        .is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[
            ("FITCOACH_HEALTH_TIMEOUT_SECS", "soon"),
            ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
        ]))
        .is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("FITCOACH_API_BASE_URL", "https://coach.example.com/"),
            ("FITCOACH_DATA_DIR", "/tmp/fitcoach"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://coach.example.com");
    }
}
