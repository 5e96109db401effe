// ABOUTME: Client-side plan intelligence
// ABOUTME: Static goal-keyed plan generator used for offline previews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Local plan generation
//!
//! Real plans come from the backend. The static generator here produces a
//! canned day for previews and never takes part in the submit flow.

/// Goal-keyed canned plan
pub mod static_plan;

pub use static_plan::{
    generate_plan_for_goal, StaticMeal, StaticPlan, StaticPlanInput, StaticTargets,
};
