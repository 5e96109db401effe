// ABOUTME: Shared wiring for fitcoach-cli commands
// ABOUTME: Builds the configuration, backend client, identity store, and output format once per run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use fitcoach_client::config::ClientConfig;
use fitcoach_client::external::{BackendGateway, HttpBackendClient};
use fitcoach_client::formatters::OutputFormat;
use fitcoach_client::health::{HealthBridge, HealthDataSource};
use fitcoach_client::storage::{FileKeyValueStore, IdentityStore};
use fitcoach_client::view_models::PlanScreens;
use tracing::info;

/// Everything a command needs
pub struct CliContext {
    pub config: ClientConfig,
    pub gateway: Arc<dyn BackendGateway>,
    pub identity: IdentityStore,
    pub format: OutputFormat,
}

impl CliContext {
    /// Load configuration from the environment and apply the global flag overrides
    pub fn build(
        base_url: Option<&str>,
        data_dir: Option<&Path>,
        format: OutputFormat,
    ) -> Result<Self> {
        let mut config = ClientConfig::from_env().context("Failed to load client configuration")?;
        if let Some(url) = base_url {
            config = config
                .with_base_url(url)
                .with_context(|| format!("Invalid --base-url '{url}'"))?;
        }
        if let Some(dir) = data_dir {
            config = config.with_data_dir(dir);
        }

        let store = FileKeyValueStore::open(&config.data_dir).with_context(|| {
            format!("Failed to open data directory {}", config.data_dir.display())
        })?;
        info!(store = %store.path().display(), "Using local store");

        let gateway = Arc::new(HttpBackendClient::new(&config)?);
        Ok(Self {
            identity: IdentityStore::new(Arc::new(store)),
            gateway,
            format,
            config,
        })
    }

    pub fn screens(&self) -> PlanScreens {
        PlanScreens::new(Arc::clone(&self.gateway), self.identity.clone())
    }

    pub fn health(&self, source: Arc<dyn HealthDataSource>) -> HealthBridge {
        HealthBridge::new(source, self.config.health_timeout)
    }
}
