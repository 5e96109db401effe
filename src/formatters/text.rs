// ABOUTME: Small text helpers for plan display
// ABOUTME: Instruction truncation and number formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::display::{ELLIPSIS, INSTRUCTION_MAX_CHARS};

/// Shorten instructions to [`INSTRUCTION_MAX_CHARS`] characters.
///
/// Text at or under the limit is returned unchanged. Longer text is cut at
/// the limit, trimmed, and suffixed with an ellipsis.
#[must_use]
pub fn truncate_instructions(text: &str) -> String {
    if text.chars().count() <= INSTRUCTION_MAX_CHARS {
        return text.to_owned();
    }
    let head: String = text.chars().take(INSTRUCTION_MAX_CHARS).collect();
    let mut shortened = head.trim().to_owned();
    shortened.push(ELLIPSIS);
    shortened
}

/// Number as shown on screen: whole numbers without a fraction
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value}")
}

/// Missing numbers show as nothing
#[must_use]
pub fn format_optional_amount(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_boundary() {
        let exact = "a".repeat(140);
        assert_eq!(truncate_instructions(&exact), exact);

        let long = format!("{} {}", "b".repeat(139), "tail");
        let shortened = truncate_instructions(&long);
        assert_eq!(shortened, format!("{}…", "b".repeat(139)));
        assert_eq!(truncate_instructions(""), "");
    }

    #[test]
    fn test_amounts() {
        assert_eq!(format_amount(2000.0), "2000");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_optional_amount(None), "");
    }
}
