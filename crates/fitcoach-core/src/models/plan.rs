// ABOUTME: Weekly plan wire model returned by the coaching backend
// ABOUTME: Daily targets, per-day meals and workouts, grocery list, and session blocks with lenient parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Model
//!
//! `GET /plan/current` returns one JSON document that every plan screen reads
//! from. [`Plan::from_json`] turns it into typed data exactly once, defaulting
//! whatever is missing or mistyped and reporting the mistyped fields as
//! [`SchemaIssue`]s. Presence is kept where the screens need it: a plan with
//! no `week_meals` at all is different from a week where every day is empty.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::weekday::Weekday;
use crate::constants::{display, targets};
use crate::schema::{self, child_path, index_path, Parsed, SchemaIssue};

/// Daily macro targets as sent by the backend, each field optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyTargets {
    /// `calorieTarget`
    pub calorie_target: Option<f64>,
    /// `proteinTarget`
    pub protein_target: Option<f64>,
    /// `carbsTarget`
    pub carbs_target: Option<f64>,
    /// `fatTarget`
    pub fat_target: Option<f64>,
}

impl DailyTargets {
    /// Fill every missing field with the fixed fallback
    #[must_use]
    pub fn resolved(&self) -> ResolvedTargets {
        ResolvedTargets {
            calories: self.calorie_target.unwrap_or(targets::FALLBACK_CALORIES),
            protein_g: self.protein_target.unwrap_or(targets::FALLBACK_PROTEIN_G),
            carbs_g: self.carbs_target.unwrap_or(targets::FALLBACK_CARBS_G),
            fat_g: self.fat_target.unwrap_or(targets::FALLBACK_FAT_G),
        }
    }

    fn parse(value: Option<&Value>, path: &str, issues: &mut Vec<SchemaIssue>) -> Option<Self> {
        let object = schema::object(value, path, issues)?;
        let mut read = |key: &str| schema::number(schema::field(object, key), &child_path(path, key), issues);
        Some(Self {
            calorie_target: read("calorieTarget"),
            protein_target: read("proteinTarget"),
            carbs_target: read("carbsTarget"),
            fat_target: read("fatTarget"),
        })
    }
}

/// Daily targets with fallbacks applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedTargets {
    /// Calories
    pub calories: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fat_g: f64,
}

/// Macros of a single meal; absent fields stay `None`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Macros {
    /// Calories
    pub calories: Option<f64>,
    /// Protein grams
    pub protein: Option<f64>,
    /// Carbohydrate grams
    pub carbs: Option<f64>,
    /// Fat grams
    pub fat: Option<f64>,
}

impl Macros {
    fn parse(value: Option<&Value>, path: &str, issues: &mut Vec<SchemaIssue>) -> Self {
        let Some(object) = schema::object(value, path, issues) else {
            return Self::default();
        };
        let mut read = |key: &str| schema::number(schema::field(object, key), &child_path(path, key), issues);
        Self {
            calories: read("calories"),
            protein: read("protein"),
            carbs: read("carbs"),
            fat: read("fat"),
        }
    }
}

/// A meal as planned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Meal {
    /// Dish name
    pub name: String,
    /// Macros, possibly partial
    pub macros: Macros,
    /// Ingredient lines
    pub ingredients: Vec<String>,
    /// Full preparation text
    pub instructions: String,
    /// Free-form tags
    pub tags: Vec<String>,
}

impl Meal {
    fn parse(value: Option<&Value>, path: &str, issues: &mut Vec<SchemaIssue>) -> Self {
        let Some(object) = schema::object(value, path, issues) else {
            return Self::default();
        };
        Self {
            name: schema::text(schema::field(object, "name"), &child_path(path, "name"), issues)
                .unwrap_or_default(),
            macros: Macros::parse(schema::field(object, "macros"), &child_path(path, "macros"), issues),
            ingredients: schema::text_list(
                schema::field(object, "ingredients"),
                &child_path(path, "ingredients"),
                issues,
            ),
            instructions: schema::text(
                schema::field(object, "instructions"),
                &child_path(path, "instructions"),
                issues,
            )
            .unwrap_or_default(),
            tags: schema::text_list(schema::field(object, "tags"), &child_path(path, "tags"), issues),
        }
    }
}

/// One labelled slot of a day's meal plan ("Breakfast", "Lunch", ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealEntry {
    /// Slot label
    pub label: String,
    /// Planned meal
    pub meal: Meal,
}

impl MealEntry {
    fn parse(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) -> Self {
        let object = schema::object(Some(value), path, issues);
        let label = object
            .and_then(|o| schema::text(schema::field(o, "label"), &child_path(path, "label"), issues))
            .unwrap_or_else(|| display::DEFAULT_MEAL_LABEL.to_owned());
        let meal = Meal::parse(
            object.and_then(|o| schema::field(o, "meal")),
            &child_path(path, "meal"),
            issues,
        );
        Self { label, meal }
    }
}

/// One exercise prescription
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets, fractional values kept as sent
    pub sets: Option<f64>,
    /// Reps per set, free text ("12", "8-10", "max")
    pub reps: Option<String>,
    /// Duration, free text ("30s", "20 min")
    pub time: Option<String>,
}

impl Exercise {
    fn parse(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) -> Option<Self> {
        let object = schema::object(Some(value), path, issues)?;
        Some(Self {
            name: schema::text(schema::field(object, "name"), &child_path(path, "name"), issues)
                .unwrap_or_default(),
            sets: schema::number(schema::field(object, "sets"), &child_path(path, "sets"), issues),
            reps: schema::filled_text(schema::field(object, "reps"), &child_path(path, "reps"), issues),
            time: schema::filled_text(schema::field(object, "time"), &child_path(path, "time"), issues),
        })
    }
}

/// A day of the workout plan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkoutDay {
    /// Session focus
    pub focus: Option<String>,
    /// Exercises, empty on rest days
    pub details: Vec<Exercise>,
    /// Coach note
    pub coach_note: Option<String>,
}

impl WorkoutDay {
    /// A day with no exercises is a rest day
    #[must_use]
    pub fn is_rest(&self) -> bool {
        self.details.is_empty()
    }

    fn parse(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) -> Option<Self> {
        let object = schema::object(Some(value), path, issues)?;
        let details_path = child_path(path, "details");
        let details = schema::array(schema::field(object, "details"), &details_path, issues)
            .map_or_else(Vec::new, |items| {
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| Exercise::parse(item, &index_path(&details_path, i), issues))
                    .collect()
            });
        Some(Self {
            focus: schema::text(schema::field(object, "focus"), &child_path(path, "focus"), issues),
            details,
            coach_note: schema::text(
                schema::field(object, "coachNote"),
                &child_path(path, "coachNote"),
                issues,
            ),
        })
    }
}

/// Meals per weekday; days the backend left out are absent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekMeals {
    days: BTreeMap<Weekday, Vec<MealEntry>>,
}

impl WeekMeals {
    /// Meals for `day`, empty when the day is absent or was not a list
    #[must_use]
    pub fn day(&self, day: Weekday) -> &[MealEntry] {
        self.days.get(&day).map_or(&[], Vec::as_slice)
    }

    fn parse(object: &Map<String, Value>, path: &str, issues: &mut Vec<SchemaIssue>) -> Self {
        let days = Weekday::ALL
            .into_iter()
            .filter_map(|day| {
                let day_path = child_path(path, day.code());
                let items = schema::array(schema::field(object, day.code()), &day_path, issues)?;
                let meals = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| MealEntry::parse(item, &index_path(&day_path, i), issues))
                    .collect();
                Some((day, meals))
            })
            .collect();
        Self { days }
    }
}

/// Workouts per weekday; days the backend left out are absent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekWorkouts {
    days: BTreeMap<Weekday, WorkoutDay>,
}

impl WeekWorkouts {
    /// Workout for `day`
    #[must_use]
    pub fn day(&self, day: Weekday) -> Option<&WorkoutDay> {
        self.days.get(&day)
    }

    fn parse(object: &Map<String, Value>, path: &str, issues: &mut Vec<SchemaIssue>) -> Self {
        let days = Weekday::ALL
            .into_iter()
            .filter_map(|day| {
                let value = schema::field(object, day.code())?;
                WorkoutDay::parse(value, &child_path(path, day.code()), issues).map(|w| (day, w))
            })
            .collect();
        Self { days }
    }
}

/// Warm-up, cool-down and recovery blocks the backend attaches for today
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionBlocks {
    /// Title of today's session
    pub workout_title: Option<String>,
    /// Focus of today's session as named by the program template
    pub workout_focus: Option<String>,
    /// Whether the program marks today as a rest day
    pub is_rest_day: Option<bool>,
    /// Warm-up content
    pub warmup: Option<Value>,
    /// Cool-down content
    pub cooldown: Option<Value>,
    /// Rest-day recovery content
    pub rest_recovery: Option<Value>,
}

impl SessionBlocks {
    /// Whether the backend attached anything at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workout_title.is_none()
            && self.workout_focus.is_none()
            && self.is_rest_day.is_none()
            && self.warmup.is_none()
            && self.cooldown.is_none()
            && self.rest_recovery.is_none()
    }

    fn parse(object: &Map<String, Value>, issues: &mut Vec<SchemaIssue>) -> Self {
        Self {
            workout_title: schema::text(schema::field(object, "workout_title"), "$.workout_title", issues),
            workout_focus: schema::text(schema::field(object, "workout_focus"), "$.workout_focus", issues),
            is_rest_day: schema::flag(schema::field(object, "is_rest_day"), "$.is_rest_day", issues),
            warmup: schema::field(object, "warmup").cloned(),
            cooldown: schema::field(object, "cooldown").cloned(),
            rest_recovery: schema::field(object, "rest_recovery").cloned(),
        }
    }
}

/// The current weekly plan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Plan {
    /// Daily targets, `None` when the backend omitted them
    pub daily_targets: Option<DailyTargets>,
    /// Weekly meals, `None` when absent
    pub week_meals: Option<WeekMeals>,
    /// Weekly workouts, `None` when absent
    pub week_workouts: Option<WeekWorkouts>,
    /// Grocery items as display text
    pub grocery_list: Vec<String>,
    /// Monday of the plan's week
    pub week_start_date: Option<NaiveDate>,
    /// Today's session blocks
    pub session: SessionBlocks,
}

impl Plan {
    /// Parse a plan document, defaulting anything missing or mistyped
    #[must_use]
    pub fn from_json(body: &Value) -> Parsed<Self> {
        let mut issues = Vec::new();
        let Value::Object(root) = body else {
            issues.push(SchemaIssue::new("$", "expected an object"));
            return Parsed {
                value: Self::default(),
                issues,
            };
        };

        let daily_targets = DailyTargets::parse(schema::field(root, "daily_targets"), "$.daily_targets", &mut issues);
        let week_meals = week_section(root, "week_meals", &mut issues).map(|section| {
            section.map_or_else(WeekMeals::default, |o| WeekMeals::parse(o, "$.week_meals", &mut issues))
        });
        let week_workouts = week_section(root, "week_workouts", &mut issues).map(|section| {
            section.map_or_else(WeekWorkouts::default, |o| {
                WeekWorkouts::parse(o, "$.week_workouts", &mut issues)
            })
        });
        let grocery_list = schema::array(schema::field(root, "grocery_list"), "$.grocery_list", &mut issues)
            .map_or_else(Vec::new, |items| items.iter().map(schema::coerce_text).collect());
        let week_start_date = schema::text(schema::field(root, "week_start_date"), "$.week_start_date", &mut issues)
            .and_then(|raw| match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    issues.push(SchemaIssue::new("$.week_start_date", "expected a YYYY-MM-DD date"));
                    None
                }
            });
        let session = SessionBlocks::parse(root, &mut issues);

        Parsed {
            value: Self {
                daily_targets,
                week_meals,
                week_workouts,
                grocery_list,
                week_start_date,
                session,
            },
            issues,
        }
    }
}

/// A weekly section: `None` when absent or falsy, `Some(None)` when filled but
/// not an object, which still yields a week with every day empty
fn week_section<'v>(
    root: &'v Map<String, Value>,
    key: &str,
    issues: &mut Vec<SchemaIssue>,
) -> Option<Option<&'v Map<String, Value>>> {
    let value = schema::field(root, key)?;
    if let Value::Object(map) = value {
        return Some(Some(map));
    }
    issues.push(SchemaIssue::new(format!("$.{key}"), "expected an object"));
    schema::is_filled(value).then_some(None)
}
