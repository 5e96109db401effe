// ABOUTME: Display-ready view models for the four plan screens
// ABOUTME: Shared plan loader with injected identity and the Ready/Empty/Failed screen state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan View Models
//!
//! Every plan screen fetches the current plan afresh and reshapes it. The
//! loader takes the gateway and the identity store at construction, so the
//! "identity required" precondition is checked in one place.
//!
//! Today's screen picks its day from the local weekday. The weekly screens do
//! not look at the local day at all: they list mon through sun and label them
//! "Day 1" through "Day 7".

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::external::BackendGateway;
use crate::models::{Plan, Weekday};
use crate::storage::IdentityStore;

/// Grocery list screen
pub mod grocery;
/// Today's plan screen
pub mod today;
/// Seven-day meal plan screen
pub mod week_meals;
/// Seven-day workout plan screen
pub mod week_workouts;

pub use grocery::{GroceryListView, ShareTarget};
pub use today::{IntakeTotals, TodayMeal, TodayPlanView};
pub use week_meals::{DayMeals, WeekMealsView};
pub use week_workouts::{WeekWorkoutsView, WorkoutDayView};

/// What a screen shows once loading is over
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ScreenState<T> {
    /// Content to render
    Ready(T),
    /// Loaded fine, nothing to show; carries the empty-state message
    Empty(String),
    /// Loading failed; carries the message to show
    Failed(String),
}

impl<T> ScreenState<T> {
    /// Content, if ready
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Empty(_) | Self::Failed(_) => None,
        }
    }

    /// Whether loading failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    fn failed(error: &AppError, fallback: &str) -> Self {
        Self::Failed(error.user_message(fallback))
    }
}

/// Loads the current plan for the stored user and builds each screen's view
#[derive(Clone)]
pub struct PlanScreens {
    gateway: Arc<dyn BackendGateway>,
    identity: IdentityStore,
}

impl PlanScreens {
    /// Create a loader
    #[must_use]
    pub fn new(gateway: Arc<dyn BackendGateway>, identity: IdentityStore) -> Self {
        Self { gateway, identity }
    }

    /// Fetch the current plan for the stored user
    ///
    /// # Errors
    ///
    /// Returns `MissingUserId` when no identity is stored, otherwise any
    /// gateway error
    pub async fn load_plan(&self) -> AppResult<Plan> {
        let user_id = self.identity.require().await?;
        debug!(user_id = %user_id, "Loading current plan");
        self.gateway.current_plan(&user_id).await
    }

    async fn load_or_fail<T>(
        &self,
        screen: &str,
        fallback: &str,
        build: impl FnOnce(Plan) -> ScreenState<T> + Send,
    ) -> ScreenState<T> {
        match self.load_plan().await {
            Ok(plan) => build(plan),
            Err(error) => {
                warn!(screen, code = ?error.code, error = %error.message, "Plan screen failed to load");
                ScreenState::failed(&error, fallback)
            }
        }
    }

    /// Today's plan for `weekday`
    pub async fn today(&self, weekday: Weekday) -> ScreenState<TodayPlanView> {
        self.load_or_fail("today", messages::TODAY_LOAD_FAILED, |plan| {
            ScreenState::Ready(TodayPlanView::from_plan(&plan, weekday))
        })
        .await
    }

    /// Seven-day meals
    pub async fn week_meals(&self) -> ScreenState<WeekMealsView> {
        self.load_or_fail("week_meals", messages::MEALS_LOAD_FAILED, |plan| {
            WeekMealsView::from_plan(&plan).map_or_else(
                || ScreenState::Empty(messages::NO_MEAL_PLAN.to_owned()),
                ScreenState::Ready,
            )
        })
        .await
    }

    /// Seven-day workouts
    pub async fn week_workouts(&self) -> ScreenState<WeekWorkoutsView> {
        self.load_or_fail("week_workouts", messages::WORKOUTS_LOAD_FAILED, |plan| {
            WeekWorkoutsView::from_plan(&plan).map_or_else(
                || ScreenState::Empty(messages::NO_WORKOUTS.to_owned()),
                ScreenState::Ready,
            )
        })
        .await
    }

    /// Grocery list
    pub async fn grocery_list(&self) -> ScreenState<GroceryListView> {
        self.load_or_fail("grocery", messages::GROCERY_LOAD_FAILED, |plan| {
            let view = GroceryListView::from_plan(&plan);
            if view.is_empty() {
                ScreenState::Empty(messages::NO_GROCERIES.to_owned())
            } else {
                ScreenState::Ready(view)
            }
        })
        .await
    }
}

impl std::fmt::Debug for PlanScreens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanScreens").finish_non_exhaustive()
    }
}
