// ABOUTME: Unified error type for the FitCoach client library and CLI
// ABOUTME: Error codes, AppError construction helpers, and the on-screen message policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation in the client returns [`AppResult`]. The error carries
//! an [`ErrorCode`] for programmatic handling and a message that is safe to show
//! the user as-is: backend rejections keep the raw response body so the screen
//! can surface it verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::constants::messages;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorCode {
    /// No user identifier has been persisted yet
    MissingUserId,
    /// Backend answered with a non-2xx status
    BackendRejected,
    /// Request could not be sent or the response could not be read
    NetworkError,
    /// Backend answered 2xx but the body failed schema validation
    InvalidResponse,
    /// A plan submission is already running
    SubmissionInProgress,
    /// Local key-value storage failed
    StorageError,
    /// Configuration is missing or invalid
    ConfigInvalid,
    /// Platform health service is not available or refused access
    HealthUnavailable,
    /// Platform health service did not answer in time
    HealthTimeout,
    /// Anything else
    InternalError,
}

impl ErrorCode {
    /// Get a short description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingUserId => "No user identity is stored on this device",
            Self::BackendRejected => "The coaching backend rejected the request",
            Self::NetworkError => "The coaching backend could not be reached",
            Self::InvalidResponse => "The coaching backend returned an unexpected response",
            Self::SubmissionInProgress => "A plan submission is already in progress",
            Self::StorageError => "Local storage operation failed",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::HealthUnavailable => "Health data is not available",
            Self::HealthTimeout => "Health data request timed out",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the client
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message, shown to the user verbatim
    pub message: String,
    /// HTTP status for backend rejections
    pub status: Option<u16>,
    /// JSON path of the offending field for schema failures
    pub field_path: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
            field_path: None,
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The persisted user identifier is missing
    #[must_use]
    pub fn missing_user_id() -> Self {
        Self::new(ErrorCode::MissingUserId, messages::MISSING_USER_ID)
    }

    /// Non-2xx backend response.
    ///
    /// The message is the raw body when there is one, `HTTP <status>` otherwise.
    #[must_use]
    pub fn backend_rejected(status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body.to_owned()
        };
        let mut error = Self::new(ErrorCode::BackendRejected, message);
        error.status = Some(status);
        error
    }

    /// Transport-level failure
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, message)
    }

    /// Schema failure at the backend boundary
    #[must_use]
    pub fn invalid_response(field_path: impl Into<String>, reason: impl Into<String>) -> Self {
        let field_path = field_path.into();
        let mut error = Self::new(
            ErrorCode::InvalidResponse,
            format!("{field_path}: {}", reason.into()),
        );
        error.field_path = Some(field_path);
        error
    }

    /// A submission is already running
    #[must_use]
    pub fn submission_in_progress() -> Self {
        Self::new(
            ErrorCode::SubmissionInProgress,
            ErrorCode::SubmissionInProgress.description(),
        )
    }

    /// Local storage failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Configuration failure
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Health service unavailable or denied
    #[must_use]
    pub fn health_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::HealthUnavailable, message)
    }

    /// Health service timed out
    #[must_use]
    pub fn health_timeout(operation: &str, timeout: Duration) -> Self {
        Self::new(
            ErrorCode::HealthTimeout,
            format!("{operation} did not complete within {timeout:?}"),
        )
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Message to show on screen, falling back when the error carries none
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        let trimmed = self.message.trim();
        if trimmed.is_empty() {
            fallback.to_owned()
        } else {
            trimmed.to_owned()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization failed: {error}")).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_rejected_uses_body_text() {
        let error = AppError::backend_rejected(400, "{\"detail\":\"Email already registered\"}");
        assert_eq!(error.code, ErrorCode::BackendRejected);
        assert_eq!(error.status, Some(400));
        assert_eq!(error.message, "{\"detail\":\"Email already registered\"}");
    }

    #[test]
    fn test_backend_rejected_empty_body_uses_status() {
        let error = AppError::backend_rejected(502, "");
        assert_eq!(error.message, "HTTP 502");
    }

    #[test]
    fn test_user_message_fallback_only_when_blank() {
        let blank = AppError::network("   ");
        assert_eq!(blank.user_message("Unable to load plan."), "Unable to load plan.");

        let missing = AppError::missing_user_id();
        assert_eq!(missing.user_message("Unable to load plan."), "Missing userId");
    }

    #[test]
    fn test_invalid_response_carries_field_path() {
        let error = AppError::invalid_response("userId", "expected a string");
        assert_eq!(error.field_path.as_deref(), Some("userId"));
        assert_eq!(error.code, ErrorCode::InvalidResponse);
    }

    #[test]
    fn test_health_timeout_keeps_sub_second_precision() {
        let error = AppError::health_timeout("Reading active energy", Duration::from_millis(250));
        assert_eq!(error.message, "Reading active energy did not complete within 250ms");
        assert_eq!(
            AppError::health_timeout("Authorization", Duration::from_secs(10)).message,
            "Authorization did not complete within 10s"
        );
    }
}
