// ABOUTME: Lenient JSON field extraction for backend responses
// ABOUTME: Defaults missing or mistyped fields and records what was defaulted, with its JSON path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Schema Parsing
//!
//! The backend response shapes evolve independently of the client. Rather than
//! failing a whole screen because one field changed type, the plan parser reads
//! each field through these helpers: an absent or `null` field silently takes its
//! default, a present-but-mistyped field takes its default and leaves a
//! [`SchemaIssue`] behind so the caller can log it.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A field that was present but could not be read as the expected type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaIssue {
    /// JSON path of the field, `$` for the document root
    pub path: String,
    /// What was expected
    pub reason: String,
}

impl SchemaIssue {
    /// Create an issue for `path`
    #[must_use]
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// A value parsed leniently together with the issues found on the way
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    /// Fully defaulted value
    pub value: T,
    /// Mistyped fields that were replaced by defaults
    pub issues: Vec<SchemaIssue>,
}

impl<T> Parsed<T> {
    /// Whether every present field had the expected type
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Drop the issue list
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Join a parent path and a key
#[must_use]
pub fn child_path(parent: &str, key: &str) -> String {
    format!("{parent}.{key}")
}

/// Join a parent path and an index
#[must_use]
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Look up `key`, treating `null` the same as absent
#[must_use]
pub fn field<'v>(object: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
    object.get(key).filter(|v| !v.is_null())
}

/// Read an object, recording an issue if the value has another type
pub fn object<'v>(
    value: Option<&'v Value>,
    path: &str,
    issues: &mut Vec<SchemaIssue>,
) -> Option<&'v Map<String, Value>> {
    match value? {
        Value::Object(map) => Some(map),
        _ => {
            issues.push(SchemaIssue::new(path, "expected an object"));
            None
        }
    }
}

/// Read an array, recording an issue if the value has another type
pub fn array<'v>(
    value: Option<&'v Value>,
    path: &str,
    issues: &mut Vec<SchemaIssue>,
) -> Option<&'v Vec<Value>> {
    match value? {
        Value::Array(items) => Some(items),
        _ => {
            issues.push(SchemaIssue::new(path, "expected an array"));
            None
        }
    }
}

/// Read a number. Numeric strings are accepted.
pub fn number(value: Option<&Value>, path: &str, issues: &mut Vec<SchemaIssue>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().map_or_else(
            |_| {
                issues.push(SchemaIssue::new(path, "expected a number"));
                None
            },
            Some,
        ),
        _ => {
            issues.push(SchemaIssue::new(path, "expected a number"));
            None
        }
    }
}

/// Read a scalar as text. Numbers and booleans are rendered, containers are rejected.
pub fn text(value: Option<&Value>, path: &str, issues: &mut Vec<SchemaIssue>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => {
            issues.push(SchemaIssue::new(path, "expected a string"));
            None
        }
    }
}

/// Like [`text`], but `false`, `0` and `""` read as absent
pub fn filled_text(value: Option<&Value>, path: &str, issues: &mut Vec<SchemaIssue>) -> Option<String> {
    text(value.filter(|v| is_filled(v)), path, issues)
}

/// Whether a value counts as present: anything except `null`, `false`, `0` and `""`
#[must_use]
pub fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read a boolean
pub fn flag(value: Option<&Value>, path: &str, issues: &mut Vec<SchemaIssue>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        _ => {
            issues.push(SchemaIssue::new(path, "expected a boolean"));
            None
        }
    }
}

/// Read an array of scalars as text, skipping entries that are not scalars
pub fn text_list(value: Option<&Value>, path: &str, issues: &mut Vec<SchemaIssue>) -> Vec<String> {
    array(value, path, issues).map_or_else(Vec::new, |items| {
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| text(Some(item), &index_path(path, i), issues))
            .collect()
    })
}

/// Render any JSON value as display text.
///
/// Strings are taken as-is; every other value keeps its JSON spelling.
#[must_use]
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_absent_without_issue() {
        let doc = json!({ "a": null });
        let mut issues = Vec::new();
        let obj = doc.as_object().unwrap();
        assert_eq!(number(field(obj, "a"), "$.a", &mut issues), None);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_mistyped_number_records_path() {
        let doc = json!({ "calorieTarget": [1] });
        let mut issues = Vec::new();
        let obj = doc.as_object().unwrap();
        let value = number(field(obj, "calorieTarget"), "$.calorieTarget", &mut issues);
        assert_eq!(value, None);
        assert_eq!(issues, vec![SchemaIssue::new("$.calorieTarget", "expected a number")]);
    }

    #[test]
    fn test_numeric_string_accepted() {
        let mut issues = Vec::new();
        assert_eq!(number(Some(&json!(" 42 ")), "$", &mut issues), Some(42.0));
        assert_eq!(number(Some(&json!("2.5")), "$", &mut issues), Some(2.5));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_filled_text_treats_zero_as_absent() {
        let mut issues = Vec::new();
        assert_eq!(filled_text(Some(&json!(0)), "$.reps", &mut issues), None);
        assert_eq!(filled_text(Some(&json!(0.0)), "$.time", &mut issues), None);
        assert_eq!(filled_text(Some(&json!(false)), "$.reps", &mut issues), None);
        assert_eq!(filled_text(Some(&json!("")), "$.reps", &mut issues), None);
        assert_eq!(filled_text(Some(&json!(12)), "$.reps", &mut issues), Some("12".into()));
        assert_eq!(filled_text(Some(&json!("0")), "$.reps", &mut issues), Some("0".into()));
        assert!(issues.is_empty());
        assert!(is_filled(&json!([])));
        assert!(!is_filled(&json!(null)));
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(coerce_text(&json!("Oats")), "Oats");
        assert_eq!(coerce_text(&json!(3)), "3");
        assert_eq!(coerce_text(&json!(null)), "null");
        assert_eq!(coerce_text(&json!({"a": 1})), "{\"a\":1}");
    }
}
