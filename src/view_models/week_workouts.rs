// ABOUTME: Seven-day workout plan view model
// ABOUTME: Lists mon through sun as Day 1 to Day 7 with focus, exercise lines, rest days and notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::Serialize;

use super::week_meals::day_label;
use crate::constants::display;
use crate::formatters::exercise::format_exercise;
use crate::models::{Plan, Weekday, WorkoutDay};

/// One day of the weekly workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutDayView {
    /// Positional label, "Day 1" for Monday
    pub label: String,
    /// Weekday the entry comes from
    pub weekday: Weekday,
    /// Focus; "Rest Day" on a rest day without one
    pub focus: String,
    /// No exercises planned, including a missing day
    pub is_rest: bool,
    /// Formatted exercise lines, blanks dropped
    pub lines: Vec<String>,
    /// Coach note
    pub coach_note: Option<String>,
}

/// Seven-day workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekWorkoutsView {
    /// Monday of the plan's week, when the backend sent one
    pub week_start: Option<NaiveDate>,
    /// Always seven days, mon first
    pub days: Vec<WorkoutDayView>,
}

impl WeekWorkoutsView {
    /// Build the view; `None` when the plan has no `week_workouts` at all
    #[must_use]
    pub fn from_plan(plan: &Plan) -> Option<Self> {
        let week = plan.week_workouts.as_ref()?;
        let days = Weekday::ALL
            .into_iter()
            .enumerate()
            .map(|(i, weekday)| {
                let day = week.day(weekday);
                let is_rest = day.is_none_or(WorkoutDay::is_rest);
                let focus = day
                    .and_then(|d| d.focus.clone())
                    .filter(|f| !f.is_empty())
                    .unwrap_or_else(|| {
                        if is_rest {
                            display::REST_DAY_FOCUS.to_owned()
                        } else {
                            String::new()
                        }
                    });
                let lines = day
                    .map(|d| {
                        d.details
                            .iter()
                            .map(format_exercise)
                            .filter(|line| !line.is_empty())
                            .collect()
                    })
                    .unwrap_or_default();
                WorkoutDayView {
                    label: day_label(i),
                    weekday,
                    focus,
                    is_rest,
                    lines,
                    coach_note: day
                        .and_then(|d| d.coach_note.clone())
                        .filter(|n| !n.is_empty()),
                }
            })
            .collect();
        Some(Self {
            week_start: plan.week_start_date,
            days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rest_days_and_focus_defaults() {
        let plan = Plan::from_json(&json!({
            "week_workouts": {
                "mon": { "focus": "Push", "details": [ { "name": "Bench", "sets": 4, "reps": "8" } ] },
                "tue": { "focus": "", "details": [] , "coachNote": "Walk if you feel like it" },
                "wed": { "details": [ { "name": "Plank", "time": "30s" } ] }
            }
        }))
        .into_value();
        let view = WeekWorkoutsView::from_plan(&plan).unwrap();

        assert_eq!(view.days[0].focus, "Push");
        assert_eq!(view.days[0].lines, vec!["Bench — 4 × 8"]);
        assert!(!view.days[0].is_rest);

        assert!(view.days[1].is_rest);
        assert_eq!(view.days[1].focus, "Rest Day");
        assert_eq!(view.days[1].coach_note.as_deref(), Some("Walk if you feel like it"));

        assert_eq!(view.days[2].focus, "");
        assert_eq!(view.days[2].lines, vec!["Plank — 30s"]);

        assert!(view.days[6].is_rest);
        assert_eq!(view.days[6].label, "Day 7");
    }
}
