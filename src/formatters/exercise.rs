// ABOUTME: Single-line exercise formatting shared by the today and weekly workout views
// ABOUTME: Time wins over sets and reps, which win over sets alone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::text::format_amount;
use crate::constants::display::EXERCISE_SEPARATOR;
use crate::models::Exercise;

/// Format one exercise.
///
/// Precedence is fixed: `name — time`, then `name — sets × reps`, then
/// `name — N sets`, then the bare name. Zero sets and empty strings count as
/// absent; fractional sets print as sent. An exercise without a name formats
/// to an empty string.
#[must_use]
pub fn format_exercise(exercise: &Exercise) -> String {
    let name = exercise.name.as_str();
    if name.is_empty() {
        return String::new();
    }

    let time = exercise.time.as_deref().filter(|t| !t.is_empty());
    let sets = exercise.sets.filter(|s| *s > 0.0).map(format_amount);
    let reps = exercise.reps.as_deref().filter(|r| !r.is_empty());

    match (time, sets, reps) {
        (Some(time), _, _) => format!("{name}{EXERCISE_SEPARATOR}{time}"),
        (None, Some(sets), Some(reps)) => format!("{name}{EXERCISE_SEPARATOR}{sets} × {reps}"),
        (None, Some(sets), None) => format!("{name}{EXERCISE_SEPARATOR}{sets} sets"),
        (None, None, _) => name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Plan, Weekday};
    use serde_json::json;

    fn exercise(name: &str, sets: Option<f64>, reps: Option<&str>, time: Option<&str>) -> Exercise {
        Exercise {
            name: name.into(),
            sets,
            reps: reps.map(Into::into),
            time: time.map(Into::into),
        }
    }

    #[test]
    fn test_precedence() {
        assert_eq!(format_exercise(&exercise("Plank", None, None, Some("30s"))), "Plank — 30s");
        assert_eq!(format_exercise(&exercise("Squat", Some(3.0), Some("12"), None)), "Squat — 3 × 12");
        assert_eq!(format_exercise(&exercise("Walk", Some(3.0), None, None)), "Walk — 3 sets");
        assert_eq!(format_exercise(&exercise("Run", None, None, None)), "Run");
        assert_eq!(
            format_exercise(&exercise("Row", Some(3.0), Some("10"), Some("5 min"))),
            "Row — 5 min"
        );
    }

    #[test]
    fn test_falsy_values_are_absent() {
        assert_eq!(format_exercise(&exercise("Hang", Some(0.0), Some("5"), Some(""))), "Hang");
        assert_eq!(format_exercise(&exercise("Curl", None, Some("12"), None)), "Curl");
        assert_eq!(format_exercise(&exercise("", Some(3.0), Some("12"), None)), "");
    }

    #[test]
    fn test_fractional_sets_are_kept() {
        assert_eq!(format_exercise(&exercise("Walk", Some(2.5), None, None)), "Walk — 2.5 sets");
        assert_eq!(format_exercise(&exercise("Lunge", Some(2.5), Some("8"), None)), "Lunge — 2.5 × 8");
    }

    #[test]
    fn test_numeric_zero_reps_and_time_are_absent() {
        let parsed = Plan::from_json(&json!({
            "week_workouts": {
                "mon": { "details": [
                    { "name": "Walk", "sets": 3, "reps": 0 },
                    { "name": "Hold", "sets": 2, "reps": 10, "time": 0 },
                    { "name": "Skip", "sets": "2.5" }
                ] }
            }
        }))
        .into_value();
        let week = parsed.week_workouts.unwrap();
        let lines: Vec<String> = week
            .day(Weekday::Mon)
            .unwrap()
            .details
            .iter()
            .map(format_exercise)
            .collect();
        assert_eq!(lines, vec!["Walk — 3 sets", "Hold — 2 × 10", "Skip — 2.5 sets"]);
    }
}
