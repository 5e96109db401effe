// ABOUTME: Profile intake for the coaching client
// ABOUTME: Label normalization, demographics and food preference forms, and the submit flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Intake
//!
//! Intake runs in two steps. The demographics form hands its values to the
//! food preferences step as string parameters ([`IntakeHandoff`]); the food
//! preferences step then normalizes everything into a typed
//! `ProfileSetupRequest` and [`PlanSubmitter`] drives the backend calls.

/// Demographics form, navigation hand-off and food preferences
pub mod forms;
/// UI label to backend code mapping
pub mod labels;
/// Submit orchestration
pub mod submit;

pub use forms::{DemographicsForm, FoodPreferences, IntakeHandoff};
pub use labels::{first_token, normalize_activity, normalize_goal, normalize_sex};
pub use submit::{PlanSubmitter, SubmitReceipt};
