// ABOUTME: Static plan generator keyed by goal label
// ABOUTME: Fixed meal and workout tables with weight-scaled protein and activity calorie bump
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::constants::targets;
use crate::models::{MealEntry, WorkoutDay};

/// Protein target used when no weight is known
pub const DEFAULT_PROTEIN_TARGET: i64 = 140;

/// Extra calories for the "Intense" activity label
const INTENSE_BUMP: u32 = 200;

/// Extra calories for the "Moderate" activity label
const MODERATE_BUMP: u32 = 100;

/// Generator input, labels as shown on the intake form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticPlanInput {
    /// Goal label ("Lose Fat", "Build Muscle", anything else)
    pub goal: String,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Activity label ("Intense", "Moderate", anything else)
    pub activity: String,
}

/// Daily targets of a generated plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaticTargets {
    /// Calories
    pub calorie_target: u32,
    /// Protein grams
    pub protein_target: i64,
    /// Carbohydrate grams
    pub carbs_target: u32,
    /// Fat grams
    pub fat_target: u32,
}

/// A labelled meal suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaticMeal {
    /// Slot label
    pub label: &'static str,
    /// Suggestion text
    pub text: &'static str,
}

/// Canned plan for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticPlan {
    /// Targets
    pub daily_targets: StaticTargets,
    /// Meals for today
    pub today_meals: Vec<StaticMeal>,
    /// Workout focus for today
    pub today_workout_focus: &'static str,
    /// Workout lines for today
    pub today_workout_details: Vec<&'static str>,
    /// Coach note for today
    pub today_coach_note: &'static str,
    /// Always empty
    pub week_meals: Vec<MealEntry>,
    /// Always empty
    pub week_workouts: Vec<WorkoutDay>,
}

struct GoalBranch {
    base_calories: u32,
    protein_per_kg: f64,
    focus: &'static str,
    details: &'static [&'static str],
    coach_note: &'static str,
    meals: &'static [StaticMeal],
}

const fn meal(label: &'static str, text: &'static str) -> StaticMeal {
    StaticMeal { label, text }
}

const DEFAULT_BRANCH: GoalBranch = GoalBranch {
    base_calories: 2000,
    protein_per_kg: 1.8,
    focus: "Strength + Light Conditioning",
    details: &[
        "Full Body Circuit 3 rounds:",
        "  - Squat x12",
        "  - Push-up x12",
        "  - Row x12/side",
        "Then walk 20 min easy pace",
    ],
    coach_note: "Stay consistent. Hit protein, move daily, sleep well. We\u{2019}re aiming for long-term stability.",
    meals: &[
        meal("Breakfast", "Greek yogurt + granola + berries"),
        meal("Lunch", "Chicken wrap with veggies and avocado"),
        meal("Dinner", "Rice, veggies, lean protein"),
        meal("Snack", "Protein shake or cottage cheese + fruit"),
    ],
};

const LOSE_FAT_BRANCH: GoalBranch = GoalBranch {
    base_calories: 1800,
    protein_per_kg: 2.0,
    focus: "Full Body Strength + Walking",
    details: &[
        "Goblet Squat 3 x 12",
        "Push-ups 3 x max",
        "Row 3 x 15/side",
        "Plank 3 x 30 sec",
        "Walk 30+ min (easy pace)",
    ],
    coach_note: "Small deficit, high protein, daily walking. We care about streaks, not perfection.",
    meals: &[
        meal("Breakfast", "Egg whites + spinach + salsa + berries"),
        meal("Lunch", "Grilled chicken salad (light dressing)"),
        meal("Dinner", "Lean fish or chicken + veggies; carbs moderate"),
        meal("Snack", "Greek yogurt or protein shake"),
    ],
};

const BUILD_MUSCLE_BRANCH: GoalBranch = GoalBranch {
    base_calories: 2200,
    protein_per_kg: 2.2,
    focus: "Hypertrophy Push / Pull / Legs Style Work",
    details: &[
        "Dumbbell Bench Press 4 x 8-10",
        "One-arm Row 4 x 10/side",
        "Split Squat 3 x 10/side",
        "Cable/Band Fly 3 x 12-15",
        "10-15 min easy incline walk",
    ],
    coach_note: "Mild surplus. Lift controlled, close to failure, sleep enough. Protein across the day.",
    meals: &[
        meal("Breakfast", "Eggs + oats + peanut butter + banana"),
        meal("Lunch", "Chicken or turkey bowl with rice and veggies"),
        meal("Dinner", "Salmon or beef, potatoes/rice, veggies"),
        meal("Post-Workout", "Whey shake + fruit"),
    ],
};

/// Calorie bump for an activity label, exact match only
#[must_use]
pub fn activity_bump(activity: &str) -> u32 {
    match activity {
        "Intense" => INTENSE_BUMP,
        "Moderate" => MODERATE_BUMP,
        _ => 0,
    }
}

fn branch_for(goal: &str) -> &'static GoalBranch {
    match goal {
        "Lose Fat" => &LOSE_FAT_BRANCH,
        "Build Muscle" => &BUILD_MUSCLE_BRANCH,
        _ => &DEFAULT_BRANCH,
    }
}

/// Build the canned plan for `input`
///
/// Protein is `round(weight × per-kg coefficient)`; a missing, zero or NaN
/// weight gives [`DEFAULT_PROTEIN_TARGET`].
#[must_use]
pub fn generate_plan_for_goal(input: &StaticPlanInput) -> StaticPlan {
    let branch = branch_for(&input.goal);

    let protein_target = input
        .weight_kg
        .filter(|w| w.abs() > 0.0)
        .map_or(DEFAULT_PROTEIN_TARGET, |w| {
            (w * branch.protein_per_kg).round() as i64
        });

    StaticPlan {
        daily_targets: StaticTargets {
            calorie_target: branch.base_calories + activity_bump(&input.activity),
            protein_target,
            carbs_target: targets::FALLBACK_CARBS_G as u32,
            fat_target: targets::FALLBACK_FAT_G as u32,
        },
        today_meals: branch.meals.to_vec(),
        today_workout_focus: branch.focus,
        today_workout_details: branch.details.to_vec(),
        today_coach_note: branch.coach_note,
        week_meals: Vec::new(),
        week_workouts: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(goal: &str, weight_kg: Option<f64>, activity: &str) -> StaticPlanInput {
        StaticPlanInput {
            goal: goal.into(),
            weight_kg,
            activity: activity.into(),
        }
    }

    #[test]
    fn test_default_branch() {
        let plan = generate_plan_for_goal(&input("Maintain", Some(70.0), "Light"));
        assert_eq!(plan.daily_targets.calorie_target, 2000);
        assert_eq!(plan.daily_targets.protein_target, 126);
        assert_eq!(plan.today_workout_focus, "Strength + Light Conditioning");
        assert_eq!(plan.today_meals.len(), 4);
        assert!(plan.week_meals.is_empty());
    }

    #[test]
    fn test_moderate_bump_and_zero_weight() {
        let plan = generate_plan_for_goal(&input("Build Muscle", Some(0.0), "Moderate"));
        assert_eq!(plan.daily_targets.calorie_target, 2300);
        assert_eq!(plan.daily_targets.protein_target, 140);
        assert_eq!(plan.today_meals[3].label, "Post-Workout");
    }

    #[test]
    fn test_activity_match_is_exact() {
        assert_eq!(activity_bump("intense"), 0);
        assert_eq!(activity_bump("Intense"), 200);
    }
}
