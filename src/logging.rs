// ABOUTME: Logging configuration and structured logging setup for the client
// ABOUTME: Selects json, pretty, or compact output and quiets HTTP stack noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration

use std::env;
use std::io;

use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;
use crate::errors::{AppError, AppResult};

/// Name reported in the startup record
const SERVICE_NAME: &str = "fitcoach-client";

/// HTTP stack targets kept at warn unless the level names them explicitly
const QUIET_TARGETS: &str = "hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives, a bare level or a full `RUST_LOG` value
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines
    Json,
    /// Multi-line human output
    Pretty,
    /// Single-line human output
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }

    /// JSON in production, compact everywhere else
    #[must_use]
    pub const fn default_for(environment: Environment) -> Self {
        if environment.is_production() {
            Self::Json
        } else {
            Self::Compact
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build logging configuration from an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|raw| Environment::from_str_or_default(&raw))
            .unwrap_or_default();
        Self {
            level: lookup("RUST_LOG")
                .filter(|raw| !raw.trim().is_empty())
                .unwrap_or_else(|| "info".into()),
            format: lookup("LOG_FORMAT")
                .and_then(|raw| LogFormat::parse(&raw))
                .unwrap_or_else(|| LogFormat::default_for(environment)),
            include_location: environment.is_production() || lookup("LOG_INCLUDE_LOCATION").is_some(),
            environment,
        }
    }

    /// Override the level, used by the CLI's `--verbose`
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Quiet HTTP internals, then the configured directives.
    ///
    /// Unparsable directives fall back to info; the parse error is returned alongside.
    fn env_filter(&self) -> (EnvFilter, Option<String>) {
        match EnvFilter::try_new(format!("{QUIET_TARGETS},{}", self.level)) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(format!("{QUIET_TARGETS},info")), Some(e.to_string())),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// Output goes to stderr so that command output on stdout stays clean.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let (filter, rejected) = self.env_filter();
        let registry = tracing_subscriber::registry().with(filter);

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

        info!(
            service.name = SERVICE_NAME,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "FitCoach client starting"
        );
        if let Some(reason) = rejected {
            warn!(filter = %self.level, %reason, "Invalid log filter, logging at info");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tracing_subscriber::filter::LevelFilter;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("anything"), None);
    }

    #[test]
    fn test_production_defaults_to_json_with_locations() {
        let config = LoggingConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "production")]));
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_location);

        let explicit = LoggingConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "prod"),
            ("LOG_FORMAT", "pretty"),
        ]));
        assert_eq!(explicit.format, LogFormat::Pretty);

        let development = LoggingConfig::from_lookup(lookup_from(&[]));
        assert_eq!(development.format, LogFormat::Compact);
        assert!(!development.include_location);
        assert_eq!(development.level, "info");
    }

    #[test]
    fn test_with_level_overrides() {
        let config = LoggingConfig::default().with_level("debug");
        assert_eq!(config.level, "debug");
        assert_eq!(config.env_filter().0.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_multi_directive_level_is_kept() {
        let config = LoggingConfig::from_lookup(lookup_from(&[("RUST_LOG", "info,reqwest=debug")]));
        assert_eq!(config.env_filter().0.max_level_hint(), Some(LevelFilter::DEBUG));

        let (filter, rejected) = LoggingConfig::default()
            .with_level("fitcoach_client=loud")
            .env_filter();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
        assert!(rejected.is_some());
    }
}
