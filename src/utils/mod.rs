// ABOUTME: Shared utility functions used across client modules
// ABOUTME: HTTP client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP client construction with configurable timeouts
pub mod http_client;
