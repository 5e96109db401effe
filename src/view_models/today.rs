// ABOUTME: Today's plan view model
// ABOUTME: Targets with fallbacks, the day's meals and workout, derived intake totals, and session blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::constants::display;
use crate::formatters::exercise::format_exercise;
use crate::formatters::text::truncate_instructions;
use crate::models::{Macros, Plan, ResolvedTargets, SessionBlocks, Weekday};

/// A meal as shown on today's screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayMeal {
    /// Slot label
    pub label: String,
    /// Dish name
    pub name: String,
    /// Macros, possibly partial
    pub macros: Macros,
    /// Ingredient lines
    pub ingredients: Vec<String>,
    /// Instructions, truncated for display
    pub instructions: String,
    /// Tags
    pub tags: Vec<String>,
}

/// Sum of the macros of today's meals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IntakeTotals {
    /// Calories
    pub calories: f64,
    /// Protein grams
    pub protein: f64,
    /// Carbohydrate grams
    pub carbs: f64,
    /// Fat grams
    pub fat: f64,
}

impl IntakeTotals {
    /// Add one meal; missing macros count as zero
    #[must_use]
    pub fn add(self, macros: &Macros) -> Self {
        Self {
            calories: self.calories + macros.calories.unwrap_or(0.0),
            protein: self.protein + macros.protein.unwrap_or(0.0),
            carbs: self.carbs + macros.carbs.unwrap_or(0.0),
            fat: self.fat + macros.fat.unwrap_or(0.0),
        }
    }
}

/// Today's plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayPlanView {
    /// Day shown
    pub weekday: Weekday,
    /// Daily targets with fallbacks applied
    pub targets: ResolvedTargets,
    /// Meals of the day, in plan order
    pub meals: Vec<TodayMeal>,
    /// Workout focus, "Rest" when the day has none
    pub workout_focus: String,
    /// Formatted exercise lines, blanks dropped
    pub workout_details: Vec<String>,
    /// Coach note, empty when absent
    pub coach_note: String,
    /// Derived intake totals
    pub actual: IntakeTotals,
    /// Warm-up, cool-down and recovery blocks
    pub session: SessionBlocks,
}

impl TodayPlanView {
    /// Build the view for `weekday`
    #[must_use]
    pub fn from_plan(plan: &Plan, weekday: Weekday) -> Self {
        let targets = plan.daily_targets.unwrap_or_default().resolved();

        let meals: Vec<TodayMeal> = plan
            .week_meals
            .as_ref()
            .map(|week| week.day(weekday))
            .unwrap_or_default()
            .iter()
            .map(|entry| TodayMeal {
                label: entry.label.clone(),
                name: entry.meal.name.clone(),
                macros: entry.meal.macros,
                ingredients: entry.meal.ingredients.clone(),
                instructions: truncate_instructions(&entry.meal.instructions),
                tags: entry.meal.tags.clone(),
            })
            .collect();

        let actual = meals
            .iter()
            .fold(IntakeTotals::default(), |totals, meal| totals.add(&meal.macros));

        let workout = plan.week_workouts.as_ref().and_then(|week| week.day(weekday));
        let workout_focus = workout
            .and_then(|day| day.focus.clone())
            .unwrap_or_else(|| display::DEFAULT_WORKOUT_FOCUS.to_owned());
        let workout_details = workout
            .map(|day| {
                day.details
                    .iter()
                    .map(format_exercise)
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let coach_note = workout
            .and_then(|day| day.coach_note.clone())
            .unwrap_or_default();

        Self {
            weekday,
            targets,
            meals,
            workout_focus,
            workout_details,
            coach_note,
            actual,
            session: plan.session.clone(),
        }
    }

    /// No exercise lines to show
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.workout_details.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_day_selection_and_totals() {
        let plan = Plan::from_json(&json!({
            "week_meals": {
                "fri": [
                    { "label": "Breakfast", "meal": { "name": "Oats", "macros": { "calories": 400, "protein": 20 } } },
                    { "meal": { "name": "Wrap", "macros": { "calories": 550, "protein": 35, "carbs": 50, "fat": 18 } } }
                ]
            }
        }))
        .into_value();

        let friday = TodayPlanView::from_plan(&plan, Weekday::Fri);
        assert_eq!(friday.meals.len(), 2);
        assert_eq!(friday.meals[1].label, "Meal");
        assert_eq!(friday.actual.calories, 950.0);
        assert_eq!(friday.actual.protein, 55.0);
        assert_eq!(friday.actual.carbs, 50.0);

        let saturday = TodayPlanView::from_plan(&plan, Weekday::Sat);
        assert!(saturday.meals.is_empty());
        assert_eq!(saturday.actual, IntakeTotals::default());
    }

    #[test]
    fn test_workout_defaults_and_blank_lines() {
        let plan = Plan::from_json(&json!({
            "week_workouts": {
                "mon": { "focus": "Upper", "details": [ { "name": "" }, { "name": "Row", "sets": 3, "reps": "10" } ], "coachNote": "Brace" }
            }
        }))
        .into_value();

        let monday = TodayPlanView::from_plan(&plan, Weekday::Mon);
        assert_eq!(monday.workout_focus, "Upper");
        assert_eq!(monday.workout_details, vec!["Row — 3 × 10"]);
        assert_eq!(monday.coach_note, "Brace");

        let tuesday = TodayPlanView::from_plan(&plan, Weekday::Tue);
        assert_eq!(tuesday.workout_focus, "Rest");
        assert!(tuesday.is_rest_day());
        assert_eq!(tuesday.coach_note, "");
    }
}
