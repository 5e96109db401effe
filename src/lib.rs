// ABOUTME: Main library entry point for the FitCoach client
// ABOUTME: Profile intake, backend gateway, identity storage, health bridge, and plan view models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # `FitCoach` Client
//!
//! Client side of the `FitCoach` coaching product. The backend owns every
//! business rule (macro calculation, meal and workout generation, plan
//! persistence); this crate collects the user's profile, submits it, and turns
//! the backend's plan document into display-ready view models.
//!
//! ## Architecture
//!
//! - **External**: `BackendGateway` trait and its `reqwest` implementation
//! - **Storage**: persisted user identity on top of a small key-value store
//! - **Health**: timeout-bounded, non-fatal access to platform energy metrics
//! - **Intake**: label normalization, form hand-off, and the submit flow
//! - **View models**: today, weekly meals, weekly workouts, grocery list
//! - **Formatters**: exercise lines, truncation, and plain-text rendering
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fitcoach_client::config::environment::ClientConfig;
//! use fitcoach_client::external::HttpBackendClient;
//! use fitcoach_client::storage::{FileKeyValueStore, IdentityStore};
//! use fitcoach_client::view_models::PlanScreens;
//! use fitcoach_client::errors::AppResult;
//! use fitcoach_client::models::Weekday;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let gateway = Arc::new(HttpBackendClient::new(&config)?);
//!     let identity = IdentityStore::new(Arc::new(FileKeyValueStore::open(&config.data_dir)?));
//!     let screens = PlanScreens::new(gateway, identity);
//!     let today = screens.today(Weekday::today_local()).await;
//!     println!("{today:?}");
//!     Ok(())
//! }
//! ```

/// Environment-based client configuration
pub mod config;

/// Backend gateway
pub mod external;

/// Text formatting and screen rendering
pub mod formatters;

/// Platform health-data bridge
pub mod health;

/// Profile intake: label normalization, forms, submit flow
pub mod intake;

/// Client-side static plan generator
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Local key-value storage and persisted identity
pub mod storage;

/// Shared utilities
pub mod utils;

/// Plan view models for the four plan screens
pub mod view_models;

/// Unified error handling re-exported from the core crate
pub use fitcoach_core::errors;

/// Application constants re-exported from the core crate
pub use fitcoach_core::constants;

/// Wire models re-exported from the core crate
pub use fitcoach_core::models;

/// Lenient schema parsing re-exported from the core crate
pub use fitcoach_core::schema;
