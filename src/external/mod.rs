// ABOUTME: External service integrations for the client
// ABOUTME: Coaching backend gateway trait and its HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API clients
//!
//! - **Backend**: signup, profile setup, plan generation and retrieval

/// Coaching backend gateway
pub mod backend_client;

pub use backend_client::{BackendGateway, HttpBackendClient};
