// ABOUTME: Core types and constants for the FitCoach client
// ABOUTME: Foundation crate with error handling, wire models, schema parsing, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitCoach` Core
//!
//! Foundation crate providing shared types for the `FitCoach` client. Everything
//! that crosses the backend boundary is parsed here once into typed structures,
//! so the screens never re-derive defaults from raw JSON.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the user-facing message policy
//! - **constants**: fallback targets, display limits, storage keys, screen messages
//! - **models**: profile requests, plan responses, weekday codes
//! - **schema**: lenient JSON field extraction with recorded issues

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Wire models for the coaching backend
pub mod models;

/// Lenient schema parsing helpers used by the wire models
pub mod schema;
