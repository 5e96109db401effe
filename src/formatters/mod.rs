// ABOUTME: Output formatting for plan views and command results
// ABOUTME: Plain text for people, JSON for scripts, plus the shared exercise and text helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction
//!
//! Everything the CLI prints implements [`RenderText`] and `Serialize`, so a
//! single [`format_output`] call covers both formats.

use serde::Serialize;
use std::fmt;

use crate::errors::AppResult;

/// Exercise line formatting
pub mod exercise;
/// Plain-text rendering of views
pub mod render;
/// Truncation and number formatting
pub mod text;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive), `Text` when unrecognized
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Types with a plain-text screen rendering
pub trait RenderText {
    /// Render for a terminal; ends without a trailing newline
    fn render_text(&self) -> String;
}

/// Format `data` in `format`
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn format_output<T: Serialize + RenderText>(data: &T, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(data.render_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
    }
}
