// ABOUTME: Intake form state and the hand-off between the two intake steps
// ABOUTME: Demographics form, string navigation parameters, food preferences, and request building
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::labels::{self, goal_code_for_option};
use crate::constants::signup;
use crate::models::{DietType, ProfileSetupRequest, UserId};

/// Protein sources offered for a vegetarian diet
pub const VEG_PROTEINS: [&str; 4] = ["tofu", "paneer", "eggs", "greek yogurt"];

/// Protein sources offered for a non-vegetarian diet
pub const NONVEG_PROTEINS: [&str; 4] = ["chicken breast", "salmon", "turkey", "eggs"];

/// Demographics step: free text for the numbers, selected labels for the rest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemographicsForm {
    /// Age as typed
    pub age: String,
    /// Height in centimetres as typed
    pub height_cm: String,
    /// Weight in kilograms as typed
    pub weight_kg: String,
    /// Selected sex label
    pub sex: Option<String>,
    /// Selected activity label
    pub activity: Option<String>,
    /// Selected goal label
    pub goal: Option<String>,
}

impl DemographicsForm {
    /// Parameters passed to the food preferences step.
    ///
    /// The goal is already converted to its code here; the other selections
    /// are passed as labels.
    #[must_use]
    pub fn handoff(&self) -> IntakeHandoff {
        IntakeHandoff {
            age: self.age.clone(),
            sex: self.sex.clone().unwrap_or_default(),
            height_cm: self.height_cm.clone(),
            weight_kg: self.weight_kg.clone(),
            activity: self.activity.clone().unwrap_or_default(),
            goal: self
                .goal
                .as_deref()
                .map_or("", goal_code_for_option)
                .to_owned(),
        }
    }
}

/// String parameters handed from the demographics step to the food preferences step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeHandoff {
    /// `age`
    pub age: String,
    /// `sex`
    pub sex: String,
    /// `heightCm`
    pub height_cm: String,
    /// `weightKg`
    pub weight_kg: String,
    /// `activity`
    pub activity: String,
    /// `goal`
    pub goal: String,
}

impl IntakeHandoff {
    /// Parameter names in hand-off order
    pub const PARAM_NAMES: [&'static str; 6] =
        ["age", "sex", "heightCm", "weightKg", "activity", "goal"];

    /// Encode as name/value pairs
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("age", self.age.clone()),
            ("sex", self.sex.clone()),
            ("heightCm", self.height_cm.clone()),
            ("weightKg", self.weight_kg.clone()),
            ("activity", self.activity.clone()),
            ("goal", self.goal.clone()),
        ]
    }

    /// Decode name/value pairs; a repeated name keeps its first value and
    /// unknown names are ignored
    #[must_use]
    pub fn from_params<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut handoff = Self::default();
        let mut seen = [false; 6];
        for (name, value) in pairs {
            let Some(index) = Self::PARAM_NAMES.iter().position(|known| *known == name) else {
                continue;
            };
            if seen[index] {
                continue;
            }
            seen[index] = true;
            let slot = match index {
                0 => &mut handoff.age,
                1 => &mut handoff.sex,
                2 => &mut handoff.height_cm,
                3 => &mut handoff.weight_kg,
                4 => &mut handoff.activity,
                _ => &mut handoff.goal,
            };
            value.clone_into(slot);
        }
        handoff
    }

    /// Build the profile request for `user_id`
    #[must_use]
    pub fn to_profile_request(
        &self,
        user_id: &UserId,
        preferences: &FoodPreferences,
    ) -> ProfileSetupRequest {
        ProfileSetupRequest {
            user_id: user_id.clone(),
            age: parse_whole(&self.age),
            sex: labels::normalize_sex(&self.sex),
            height_cm: parse_number(&self.height_cm),
            weight_kg: parse_number(&self.weight_kg),
            activity_level: labels::normalize_activity(&self.activity),
            goal: labels::normalize_goal(&self.goal),
            diet_type: preferences.diet_type,
            fav_protein: preferences.fav_protein.clone(),
            experience_level: signup::EXPERIENCE_LEVEL.to_owned(),
        }
    }
}

/// Finite number from form text; blank or non-numeric is `None`
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Non-negative whole number from form text; fractions are `None`
fn parse_whole(raw: &str) -> Option<u32> {
    parse_number(raw)
        .filter(|n| n.fract().abs() < f64::EPSILON && (0.0..=f64::from(u32::MAX)).contains(n))
        .map(|n| n as u32)
}

/// Food preferences step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPreferences {
    /// Diet style
    pub diet_type: DietType,
    /// Favourite protein source
    pub fav_protein: String,
}

impl Default for FoodPreferences {
    fn default() -> Self {
        Self::for_diet(DietType::NonVeg)
    }
}

impl FoodPreferences {
    /// Preferences for `diet` with its default protein
    #[must_use]
    pub fn for_diet(diet_type: DietType) -> Self {
        Self {
            diet_type,
            fav_protein: Self::default_protein(diet_type).to_owned(),
        }
    }

    /// Protein preselected for `diet`
    #[must_use]
    pub const fn default_protein(diet_type: DietType) -> &'static str {
        match diet_type {
            DietType::Veg => VEG_PROTEINS[0],
            DietType::NonVeg => NONVEG_PROTEINS[0],
        }
    }

    /// Protein choices offered for `diet`
    #[must_use]
    pub const fn protein_choices(diet_type: DietType) -> &'static [&'static str] {
        match diet_type {
            DietType::Veg => &VEG_PROTEINS,
            DietType::NonVeg => &NONVEG_PROTEINS,
        }
    }

    /// Switch diet; the protein resets to the new diet's default
    pub fn set_diet(&mut self, diet_type: DietType) {
        *self = Self::for_diet(diet_type);
    }

    /// Pick a protein; returns whether it is one of the offered choices.
    /// Blank input leaves the current choice unchanged.
    pub fn select_protein(&mut self, protein: &str) -> bool {
        let protein = protein.trim();
        if protein.is_empty() {
            return false;
        }
        protein.clone_into(&mut self.fav_protein);
        Self::protein_choices(self.diet_type).contains(&protein)
    }
}
