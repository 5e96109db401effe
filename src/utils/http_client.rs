// ABOUTME: HTTP client construction with timeout configuration
// ABOUTME: Builds the reqwest client used by the backend gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::constants::network;

/// Create an HTTP client with an optional request timeout
///
/// `None` leaves requests unbounded; the connect timeout always applies.
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_client_with_timeout(timeout: Option<Duration>, connect_timeout_secs: u64) -> Client {
    let builder = ClientBuilder::new()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(concat!("fitcoach-client/", env!("CARGO_PKG_VERSION")));
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    builder.build().unwrap_or_else(|_| Client::new())
}

/// Client for backend API calls with the default timeouts
#[must_use]
pub fn api_client() -> Client {
    create_client_with_timeout(
        Some(Duration::from_secs(network::DEFAULT_HTTP_TIMEOUT_SECS)),
        network::CONNECT_TIMEOUT_SECS,
    )
}
