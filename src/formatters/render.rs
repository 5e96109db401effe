// ABOUTME: Plain-text rendering of plan screens and command results
// ABOUTME: Today, weekly meals, weekly workouts, grocery list, static preview, health, and profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde_json::Value;

use super::text::{format_amount, format_optional_amount};
use super::RenderText;
use crate::constants::messages;
use crate::health::EnergySnapshot;
use crate::intake::SubmitReceipt;
use crate::intelligence::StaticPlan;
use crate::models::{ActivityLevel, Goal, Macros, SessionBlocks, Sex, StoredProfile};
use crate::view_models::{
    GroceryListView, IntakeTotals, ScreenState, TodayPlanView, WeekMealsView, WeekWorkoutsView,
};

impl<T: RenderText> RenderText for ScreenState<T> {
    fn render_text(&self) -> String {
        match self {
            Self::Ready(view) => view.render_text(),
            Self::Empty(message) | Self::Failed(message) => message.clone(),
        }
    }
}

fn macro_line(macros: &Macros) -> String {
    format!(
        "{} kcal • P {}g • C {}g • F {}g",
        format_optional_amount(macros.calories),
        format_optional_amount(macros.protein),
        format_optional_amount(macros.carbs),
        format_optional_amount(macros.fat),
    )
}

fn totals_line(calories: f64, protein: f64, carbs: f64, fat: f64) -> String {
    format!(
        "Calories {} | Protein {}g | Carbs {}g | Fat {}g",
        format_amount(calories),
        format_amount(protein),
        format_amount(carbs),
        format_amount(fat),
    )
}

/// Arrays of strings become "; "-joined text, anything else compact JSON
fn block_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

fn push_week_start(out: &mut String, week_start: Option<NaiveDate>) {
    if let Some(date) = week_start {
        let _ = write!(out, "\nWeek of {}", date.format("%a %-d %b %Y"));
    }
}

fn render_session(out: &mut String, session: &SessionBlocks) {
    if session.is_empty() {
        return;
    }
    out.push_str("\n\nSession");
    if let Some(title) = &session.workout_title {
        let _ = write!(out, "\n  Title: {title}");
    }
    if let Some(focus) = &session.workout_focus {
        let _ = write!(out, "\n  Program focus: {focus}");
    }
    if let Some(rest) = session.is_rest_day {
        let _ = write!(out, "\n  Rest day: {}", if rest { "yes" } else { "no" });
    }
    for (name, block) in [
        ("Warm-up", &session.warmup),
        ("Cool-down", &session.cooldown),
        ("Recovery", &session.rest_recovery),
    ] {
        if let Some(value) = block {
            let _ = write!(out, "\n  {name}: {}", block_text(value));
        }
    }
}

impl RenderText for TodayPlanView {
    fn render_text(&self) -> String {
        let t = &self.targets;
        let IntakeTotals {
            calories,
            protein,
            carbs,
            fat,
        } = self.actual;

        let mut out = format!("Today ({})\n\nDaily Targets\n  ", self.weekday);
        out.push_str(&totals_line(t.calories, t.protein_g, t.carbs_g, t.fat_g));
        out.push_str("\nActual Intake Today\n  ");
        out.push_str(&totals_line(calories, protein, carbs, fat));

        out.push_str("\n\nNutrition Today");
        for meal in &self.meals {
            let _ = write!(out, "\n  {}: {}", meal.label, meal.name);
            let _ = write!(out, "\n    {}", macro_line(&meal.macros));
            if !meal.ingredients.is_empty() {
                let _ = write!(out, "\n    {}", meal.ingredients.join(" • "));
            }
            if !meal.instructions.is_empty() {
                let _ = write!(out, "\n    {}", meal.instructions);
            }
        }

        let _ = write!(out, "\n\nWorkout Today\n  Focus: {}", self.workout_focus);
        if self.workout_details.is_empty() {
            let _ = write!(out, "\n  {}", messages::REST_DAY);
        } else {
            for line in &self.workout_details {
                let _ = write!(out, "\n  • {line}");
            }
        }
        if !self.coach_note.is_empty() {
            let _ = write!(out, "\n  Note: {}", self.coach_note);
        }

        render_session(&mut out, &self.session);
        out
    }
}

impl RenderText for WeekMealsView {
    fn render_text(&self) -> String {
        let mut out = String::from("7-Day Meal Plan");
        push_week_start(&mut out, self.week_start);
        for day in &self.days {
            let _ = write!(out, "\n\n{}", day.label);
            if day.meals.is_empty() {
                let _ = write!(out, "\n  {}", messages::NO_MEALS_FOR_DAY);
                continue;
            }
            for entry in &day.meals {
                let meal = &entry.meal;
                let _ = write!(out, "\n  {}: {}", entry.label, meal.name);
                let _ = write!(out, "\n    {}", macro_line(&meal.macros));
                for ingredient in &meal.ingredients {
                    let _ = write!(out, "\n    • {ingredient}");
                }
                if !meal.instructions.is_empty() {
                    let _ = write!(out, "\n    {}", meal.instructions);
                }
            }
        }
        out
    }
}

impl RenderText for WeekWorkoutsView {
    fn render_text(&self) -> String {
        let mut out = String::from("7-Day Workout Plan");
        push_week_start(&mut out, self.week_start);
        for day in &self.days {
            let _ = write!(out, "\n\n{}\n  Focus: {}", day.label, day.focus);
            if day.is_rest {
                let _ = write!(out, "\n  {}", messages::REST_AND_RECOVER);
            } else {
                for line in &day.lines {
                    let _ = write!(out, "\n  • {line}");
                }
            }
            if let Some(note) = &day.coach_note {
                let _ = write!(out, "\n  Note: {note}");
            }
        }
        out
    }
}

impl RenderText for GroceryListView {
    fn render_text(&self) -> String {
        self.share_text().trim_end().to_owned()
    }
}

impl RenderText for StaticPlan {
    fn render_text(&self) -> String {
        let t = &self.daily_targets;
        let mut out = format!(
            "Preview plan\n\nDaily Targets\n  Calories {} | Protein {}g | Carbs {}g | Fat {}g\n\nMeals",
            t.calorie_target, t.protein_target, t.carbs_target, t.fat_target
        );
        for meal in &self.today_meals {
            let _ = write!(out, "\n  {}: {}", meal.label, meal.text);
        }
        let _ = write!(out, "\n\nWorkout\n  Focus: {}", self.today_workout_focus);
        for line in &self.today_workout_details {
            let _ = write!(out, "\n  {line}");
        }
        let _ = write!(out, "\n\nCoach note\n  {}", self.today_coach_note);
        out
    }
}

impl RenderText for EnergySnapshot {
    fn render_text(&self) -> String {
        let reading = |value: Option<f64>| {
            value.map_or_else(
                || "unavailable".to_owned(),
                |kcal| format!("{} kcal", format_amount(kcal.round())),
            )
        };
        format!(
            "Energy today\n  Active: {}\n  Basal: {}\n  Total: {}",
            reading(self.active_kcal),
            reading(self.basal_kcal),
            reading(self.total_kcal())
        )
    }
}

impl RenderText for StoredProfile {
    fn render_text(&self) -> String {
        let text = |value: Option<&str>| value.unwrap_or("-").to_owned();
        format!(
            "Profile\n  Goal: {}\n  Activity: {}\n  Sex: {}\n  Height: {} cm\n  Weight: {} kg\n  Diet: {}\n  Favourite protein: {}\n  Experience: {}",
            text(self.goal.as_ref().map(Goal::as_code)),
            text(self.activity_level.as_ref().map(ActivityLevel::as_code)),
            text(self.sex.as_ref().map(Sex::as_code)),
            self.height_cm.map_or_else(|| "-".to_owned(), format_amount),
            self.weight_kg.map_or_else(|| "-".to_owned(), format_amount),
            text(self.diet_type.as_deref()),
            text(self.fav_protein.as_deref()),
            text(self.experience_level.as_deref()),
        )
    }
}

impl RenderText for SubmitReceipt {
    fn render_text(&self) -> String {
        format!(
            "Plan created for user {}{}\nHealth access: {}",
            self.user_id,
            if self.signed_up { " (new account)" } else { "" },
            if self.health_authorized { "granted" } else { "not available" },
        )
    }
}
