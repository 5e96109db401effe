// ABOUTME: Wire models for the coaching backend
// ABOUTME: Re-exports profile, plan, and weekday types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Request payloads serialize straight to the backend's JSON; response
//! documents are parsed once into these types at the gateway boundary.

mod plan;
mod profile;
mod weekday;

pub use plan::{
    DailyTargets, Exercise, Macros, Meal, MealEntry, Plan, ResolvedTargets, SessionBlocks,
    WeekMeals, WeekWorkouts, WorkoutDay,
};
pub use profile::{
    parse_signup_response, ActivityLevel, DietType, Goal, ProfileSetupRequest, Sex, SignupRequest,
    StoredProfile, UserId,
};
pub use weekday::Weekday;
