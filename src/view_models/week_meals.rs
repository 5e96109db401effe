// ABOUTME: Seven-day meal plan view model
// ABOUTME: Lists mon through sun as Day 1 to Day 7 with each day's meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{MealEntry, Plan, Weekday};

/// One day of the weekly meal plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMeals {
    /// Positional label, "Day 1" for Monday
    pub label: String,
    /// Weekday the entry comes from
    pub weekday: Weekday,
    /// Meals in plan order; empty when the day is missing
    pub meals: Vec<MealEntry>,
}

/// Seven-day meal plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekMealsView {
    /// Monday of the plan's week, when the backend sent one
    pub week_start: Option<NaiveDate>,
    /// Always seven days, mon first
    pub days: Vec<DayMeals>,
}

impl WeekMealsView {
    /// Build the view; `None` when the plan has no `week_meals` at all
    #[must_use]
    pub fn from_plan(plan: &Plan) -> Option<Self> {
        let week = plan.week_meals.as_ref()?;
        let days = Weekday::ALL
            .into_iter()
            .enumerate()
            .map(|(i, weekday)| DayMeals {
                label: day_label(i),
                weekday,
                meals: week.day(weekday).to_vec(),
            })
            .collect();
        Some(Self {
            week_start: plan.week_start_date,
            days,
        })
    }
}

/// "Day N" for the zero-based position `index`
#[must_use]
pub fn day_label(index: usize) -> String {
    format!("Day {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_days_are_empty() {
        let plan = Plan::from_json(&json!({
            "week_meals": { "wed": [ { "label": "Lunch", "meal": { "name": "Bowl" } } ] }
        }))
        .into_value();
        let view = WeekMealsView::from_plan(&plan).unwrap();
        assert_eq!(view.days.len(), 7);
        assert_eq!(view.days[2].label, "Day 3");
        assert_eq!(view.days[2].meals[0].meal.name, "Bowl");
        assert!(view.days[0].meals.is_empty());
    }

    #[test]
    fn test_absent_week_is_none() {
        assert!(WeekMealsView::from_plan(&Plan::default()).is_none());
    }
}
