// ABOUTME: Maps human-readable intake labels to backend canonical codes
// ABOUTME: Tolerates comma-joined input and forwards unknown labels unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Label normalization
//!
//! Unknown labels are never an error: the trimmed first comma-token is
//! forwarded as-is and left for the backend to validate.

use tracing::debug;

use crate::models::{ActivityLevel, Goal, Sex};

/// Sex choices offered on the demographics form
pub const SEX_OPTIONS: [&str; 2] = ["Male", "Female"];

/// Activity choices offered on the demographics form
pub const ACTIVITY_OPTIONS: [&str; 4] = ["Sedentary", "Light", "Moderate", "Intense"];

/// Goal choices offered on the demographics form
pub const GOAL_OPTIONS: [&str; 3] = ["Lose Fat", "Build Muscle", "Maintain"];

/// Demographics-screen goal options and their codes
const GOAL_CODE_BY_OPTION: [(&str, &str); 3] = [
    ("Build Muscle", "muscle_gain"),
    ("Lose Fat", "fat_loss"),
    ("Maintain", "recomp"),
];

/// Goal labels understood by the food preferences step, including a known misspelling
const GOAL_BY_LABEL: [(&str, Goal); 4] = [
    ("Build Muscle", Goal::MuscleGain),
    ("Lose Fat", Goal::FatLoss),
    ("Maintain", Goal::Recomp),
    ("Loose Felt", Goal::FatLoss),
];

/// Activity labels, exact case only
const ACTIVITY_BY_LABEL: [(&str, ActivityLevel); 4] = [
    ("Sedentary", ActivityLevel::Sedentary),
    ("Light", ActivityLevel::Light),
    ("Moderate", ActivityLevel::Moderate),
    ("Intense", ActivityLevel::Intense),
];

/// Trimmed text before the first comma
#[must_use]
pub fn first_token(raw: &str) -> &str {
    raw.split(',').next().unwrap_or_default().trim()
}

/// Goal code for a form label as chosen on the demographics screen
///
/// Only the offered options map; anything else becomes an empty string.
#[must_use]
pub fn goal_code_for_option(label: &str) -> &'static str {
    GOAL_CODE_BY_OPTION
        .iter()
        .find(|(known, _)| *known == label)
        .map_or("", |(_, code)| *code)
}

/// Normalize a goal label or code; `None` when the token is empty
#[must_use]
pub fn normalize_goal(raw: &str) -> Option<Goal> {
    let token = first_token(raw);
    if token.is_empty() {
        return None;
    }
    let goal = GOAL_BY_LABEL
        .iter()
        .find(|(label, _)| *label == token)
        .map_or_else(|| Goal::from_code(token), |(_, goal)| goal.clone());
    if !goal.is_canonical() {
        debug!(label = token, "Forwarding unrecognized goal label");
    }
    Some(goal)
}

/// Normalize an activity label or code; `None` when the token is empty
#[must_use]
pub fn normalize_activity(raw: &str) -> Option<ActivityLevel> {
    let token = first_token(raw);
    if token.is_empty() {
        return None;
    }
    let level = ACTIVITY_BY_LABEL
        .iter()
        .find(|(label, _)| *label == token)
        .map_or_else(|| ActivityLevel::from_code(token), |(_, level)| level.clone());
    if !level.is_canonical() {
        debug!(label = token, "Forwarding unrecognized activity label");
    }
    Some(level)
}

/// Normalize a sex label; `None` when empty
#[must_use]
pub fn normalize_sex(raw: &str) -> Option<Sex> {
    let token = first_token(raw);
    if token.is_empty() {
        return None;
    }
    Some(match token.to_ascii_lowercase().as_str() {
        "male" => Sex::Male,
        "female" => Sex::Female,
        _ => Sex::Other(token.to_owned()),
    })
}
