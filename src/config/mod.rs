// ABOUTME: Configuration management module for client settings
// ABOUTME: Environment-only configuration: backend host, storage location, and timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the `FitCoach` client
//!
//! - **Environment**: client configuration from environment variables

/// Environment and client configuration
pub mod environment;

pub use environment::{ClientConfig, Environment, Platform};
