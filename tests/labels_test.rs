// ABOUTME: Integration tests for intake label normalization and the form hand-off
// ABOUTME: Goal and activity tables, misspelling tolerance, pass-through of unknown labels, and parameter decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitcoach_client::intake::labels::{ACTIVITY_OPTIONS, GOAL_OPTIONS, SEX_OPTIONS};
use fitcoach_client::intake::{
    normalize_activity, normalize_goal, normalize_sex, DemographicsForm, FoodPreferences,
    IntakeHandoff,
};
use fitcoach_client::models::{ActivityLevel, DietType, Goal, Sex, UserId};

#[test]
fn test_offered_options_all_map_to_canonical_codes() {
    for label in GOAL_OPTIONS {
        assert!(normalize_goal(label).unwrap().is_canonical(), "{label}");
    }
    for label in ACTIVITY_OPTIONS {
        assert!(normalize_activity(label).unwrap().is_canonical(), "{label}");
    }
    for label in SEX_OPTIONS {
        assert!(!matches!(normalize_sex(label), None | Some(Sex::Other(_))), "{label}");
    }
}

#[test]
fn test_goal_labels_and_codes() {
    assert_eq!(normalize_goal("Lose Fat"), Some(Goal::FatLoss));
    assert_eq!(normalize_goal("Loose Felt"), Some(Goal::FatLoss));
    assert_eq!(normalize_goal("Build Muscle, fast"), Some(Goal::MuscleGain));
    assert_eq!(normalize_goal("recomp"), Some(Goal::Recomp));
    assert_eq!(normalize_goal("Get Strong"), Some(Goal::Other("Get Strong".into())));
    assert_eq!(normalize_goal("  "), None);
}

#[test]
fn test_activity_labels_are_case_sensitive() {
    assert_eq!(normalize_activity("Intense"), Some(ActivityLevel::Intense));
    assert_eq!(normalize_activity("Light, mostly"), Some(ActivityLevel::Light));
    assert_eq!(
        normalize_activity("INTENSE"),
        Some(ActivityLevel::Other("INTENSE".into()))
    );
    assert_eq!(normalize_activity(""), None);
}

#[test]
fn test_sex_any_case() {
    assert_eq!(normalize_sex("Female"), Some(Sex::Female));
    assert_eq!(normalize_sex("MALE"), Some(Sex::Male));
    assert_eq!(normalize_sex("Nonbinary"), Some(Sex::Other("Nonbinary".into())));
    assert_eq!(normalize_sex(""), None);
}

#[test]
fn test_handoff_round_trip_through_params() {
    let handoff = DemographicsForm {
        age: "29".into(),
        height_cm: "165".into(),
        weight_kg: "61.5".into(),
        sex: Some("Female".into()),
        activity: Some("Light".into()),
        goal: Some("Lose Fat".into()),
    }
    .handoff();
    assert_eq!(handoff.goal, "fat_loss");
    assert_eq!(handoff.activity, "Light");

    let params = handoff.to_params();
    let decoded = IntakeHandoff::from_params(params.iter().map(|(k, v)| (*k, v.as_str())));
    assert_eq!(decoded, handoff);
}

#[test]
fn test_repeated_params_keep_first_value() {
    let decoded = IntakeHandoff::from_params([
        ("goal", "muscle_gain"),
        ("goal", "fat_loss"),
        ("unknown", "x"),
        ("age", "40"),
    ]);
    assert_eq!(decoded.goal, "muscle_gain");
    assert_eq!(decoded.age, "40");
    assert_eq!(decoded.sex, "");
}

#[test]
fn test_profile_request_from_loose_input() {
    let handoff = IntakeHandoff {
        age: "31.5".into(),
        sex: "male".into(),
        height_cm: " 180 ".into(),
        weight_kg: "heavy".into(),
        activity: "Moderate".into(),
        goal: "muscle_gain".into(),
    };
    let user_id = UserId::parse("9").unwrap();
    let request = handoff.to_profile_request(&user_id, &FoodPreferences::for_diet(DietType::Veg));

    assert_eq!(request.age, None);
    assert_eq!(request.height_cm, Some(180.0));
    assert_eq!(request.weight_kg, None);
    assert_eq!(request.sex, Some(Sex::Male));
    assert_eq!(request.goal, Some(Goal::MuscleGain));
    assert_eq!(request.diet_type, DietType::Veg);
}

#[test]
fn test_diet_switch_resets_protein() {
    let mut preferences = FoodPreferences::default();
    assert_eq!(preferences.diet_type, DietType::NonVeg);
    assert_eq!(preferences.fav_protein, "chicken breast");
    assert!(preferences.select_protein("salmon"));

    preferences.set_diet(DietType::Veg);
    assert_eq!(preferences.fav_protein, FoodPreferences::default_protein(DietType::Veg));
    assert!(!preferences.select_protein("salmon"));
    assert_eq!(preferences.fav_protein, "salmon");
}
