// ABOUTME: Profile and account wire models for the coaching backend
// ABOUTME: UserId, canonical goal/activity/sex codes, signup and profile-setup payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::errors::{AppError, AppResult};
use crate::schema;

/// Opaque user identifier issued by the backend at signup
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a non-blank identifier
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Borrow the identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Training goal, canonical backend code or a passed-through unknown value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Goal {
    /// `fat_loss`
    FatLoss,
    /// `muscle_gain`
    MuscleGain,
    /// `recomp`
    Recomp,
    /// Unrecognized value, forwarded unchanged for server-side validation
    Other(String),
}

impl Goal {
    /// Wire code
    #[must_use]
    pub fn as_code(&self) -> &str {
        match self {
            Self::FatLoss => "fat_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Recomp => "recomp",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a wire code exactly
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "fat_loss" => Self::FatLoss,
            "muscle_gain" => Self::MuscleGain,
            "recomp" => Self::Recomp,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Whether this is one of the backend's canonical codes
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        match goal {
            Goal::Other(raw) => raw,
            known => known.as_code().to_owned(),
        }
    }
}

impl From<String> for Goal {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

/// Activity level, canonical backend code or a passed-through unknown value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ActivityLevel {
    /// `sedentary`
    Sedentary,
    /// `light`
    Light,
    /// `moderate`
    Moderate,
    /// `intense`
    Intense,
    /// Unrecognized value, forwarded unchanged
    Other(String),
}

impl ActivityLevel {
    /// Wire code
    #[must_use]
    pub fn as_code(&self) -> &str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Intense => "intense",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a wire code exactly
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "intense" => Self::Intense,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Whether this is one of the backend's canonical codes
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        match level {
            ActivityLevel::Other(raw) => raw,
            known => known.as_code().to_owned(),
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

/// Biological sex as sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Sex {
    /// `male`
    Male,
    /// `female`
    Female,
    /// Unrecognized value, forwarded unchanged
    Other(String),
}

impl Sex {
    /// Wire code
    #[must_use]
    pub fn as_code(&self) -> &str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other(raw) => raw,
        }
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Other(raw) => raw,
            known => known.as_code().to_owned(),
        }
    }
}

impl From<String> for Sex {
    fn from(code: String) -> Self {
        match code.as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other(code),
        }
    }
}

/// Diet style chosen on the food preferences form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    /// Vegetarian
    #[serde(rename = "veg")]
    Veg,
    /// Non-vegetarian
    #[default]
    #[serde(rename = "nonveg")]
    NonVeg,
}

impl DietType {
    /// Wire code
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "nonveg",
        }
    }

    /// Parse `veg`/`vegetarian` or `nonveg`/`non-veg`, case-insensitively
    #[must_use]
    pub fn from_str_lossy(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "veg" | "vegetarian" => Some(Self::Veg),
            "nonveg" | "non-veg" | "non_veg" => Some(Self::NonVeg),
            _ => None,
        }
    }
}

/// `POST /auth/signup` body
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email, unique per account
    pub email: String,
    /// Password
    pub password: String,
}

/// Extract the user identifier from a signup response body
///
/// # Errors
///
/// Returns `InvalidResponse` with field path `userId` when the body is not an
/// object or carries no usable identifier
pub fn parse_signup_response(body: &Value) -> AppResult<UserId> {
    let Value::Object(object) = body else {
        return Err(AppError::invalid_response("$", "expected an object"));
    };
    let mut issues = Vec::new();
    schema::text(schema::field(object, "userId"), "userId", &mut issues)
        .and_then(|raw| UserId::parse(&raw))
        .ok_or_else(|| AppError::invalid_response("userId", "expected a non-empty identifier"))
}

/// `POST /auth/profile/setup` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSetupRequest {
    /// Owner of the profile
    pub user_id: UserId,
    /// Age in years
    pub age: Option<u32>,
    /// Sex code
    pub sex: Option<Sex>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Activity level code
    pub activity_level: Option<ActivityLevel>,
    /// Goal code
    pub goal: Option<Goal>,
    /// Diet style
    pub diet_type: DietType,
    /// Favourite protein source
    pub fav_protein: String,
    /// Training experience
    pub experience_level: String,
}

/// Profile as stored by the backend, returned by `GET /auth/profile`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StoredProfile {
    /// Owner of the profile
    pub user_id: Option<String>,
    /// Goal code
    pub goal: Option<Goal>,
    /// Activity level code
    pub activity_level: Option<ActivityLevel>,
    /// Diet style as stored (free text server-side)
    pub diet_type: Option<String>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Sex code
    pub sex: Option<Sex>,
    /// Favourite protein source
    pub fav_protein: Option<String>,
    /// Training experience
    pub experience_level: Option<String>,
}
