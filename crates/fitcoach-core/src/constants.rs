// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Backend routes, storage keys, display limits, fallback targets, and screen messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Backend routes
pub mod routes {
    /// Account creation
    pub const SIGNUP: &str = "/auth/signup";
    /// Profile upsert
    pub const PROFILE_SETUP: &str = "/auth/profile/setup";
    /// Read-only profile lookup
    pub const PROFILE: &str = "/auth/profile";
    /// Server-side weekly plan generation
    pub const GENERATE_WEEK: &str = "/plan/generate-week";
    /// Current weekly plan
    pub const CURRENT_PLAN: &str = "/plan/current";
}

/// Network defaults
pub mod network {
    /// Backend port used by both platform host defaults
    pub const BACKEND_PORT: u16 = 8000;
    /// Android emulator alias for the host loopback interface
    pub const ANDROID_EMULATOR_HOST: &str = "10.0.2.2";
    /// LAN address of the development machine for physical devices
    pub const DEFAULT_DEVICE_HOST: &str = "10.0.0.171";
    /// Default request timeout in seconds
    pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default health service timeout in seconds
    pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 10;
}

/// Local storage
pub mod storage {
    /// Key under which the user identifier is persisted
    pub const USER_ID_KEY: &str = "userId";
    /// File name of the key-value store inside the data directory
    pub const STORE_FILE_NAME: &str = "store.json";
    /// Application directory name under the platform data dir
    pub const APP_DIR_NAME: &str = "fitcoach";
}

/// Fallback daily targets used when the backend omits them
pub mod targets {
    /// Calories
    pub const FALLBACK_CALORIES: f64 = 2000.0;
    /// Protein grams
    pub const FALLBACK_PROTEIN_G: f64 = 120.0;
    /// Carbohydrate grams
    pub const FALLBACK_CARBS_G: f64 = 160.0;
    /// Fat grams
    pub const FALLBACK_FAT_G: f64 = 60.0;
}

/// Display limits
pub mod display {
    /// Maximum characters of meal instructions shown before truncation
    pub const INSTRUCTION_MAX_CHARS: usize = 140;
    /// Appended to truncated text
    pub const ELLIPSIS: char = '…';
    /// Separator between exercise name and its prescription
    pub const EXERCISE_SEPARATOR: &str = " — ";
    /// Default meal label
    pub const DEFAULT_MEAL_LABEL: &str = "Meal";
    /// Default workout focus on the today screen
    pub const DEFAULT_WORKOUT_FOCUS: &str = "Rest";
    /// Focus shown on weekly rest days without one
    pub const REST_DAY_FOCUS: &str = "Rest Day";
}

/// Placeholder identity used for the automatic signup
pub mod signup {
    /// First name
    pub const FIRST_NAME: &str = "Test";
    /// Last name
    pub const LAST_NAME: &str = "User";
    /// Password
    pub const PASSWORD: &str = "secret";
    /// Email domain
    pub const EMAIL_DOMAIN: &str = "example.com";
    /// Experience level sent with every profile
    pub const EXPERIENCE_LEVEL: &str = "intermediate";
}

/// User-facing messages
pub mod messages {
    /// Missing identity precondition
    pub const MISSING_USER_ID: &str = "Missing userId";
    /// Today screen load failure
    pub const TODAY_LOAD_FAILED: &str = "Unable to load plan.";
    /// Weekly meals load failure
    pub const MEALS_LOAD_FAILED: &str = "Failed to load meal plan.";
    /// Weekly workouts load failure
    pub const WORKOUTS_LOAD_FAILED: &str = "Failed to load workouts";
    /// Grocery list load failure
    pub const GROCERY_LOAD_FAILED: &str = "Failed to load grocery list.";
    /// Submit failure
    pub const SUBMIT_FAILED: &str = "Failed to create your plan. Please try again.";
    /// Weekly meals absent
    pub const NO_MEAL_PLAN: &str = "No meal plan found for this week.";
    /// Weekly workouts absent
    pub const NO_WORKOUTS: &str = "No workouts available.";
    /// Grocery list empty
    pub const NO_GROCERIES: &str = "No grocery items yet. Generate a plan from Food Preferences first.";
    /// Day without meals
    pub const NO_MEALS_FOR_DAY: &str = "No meals added for this day.";
    /// Rest day body on the weekly screen
    pub const REST_AND_RECOVER: &str = "Rest — recover.";
    /// Rest day body on the today screen
    pub const REST_DAY: &str = "Rest day.";
    /// Export text for an empty grocery list
    pub const GROCERY_EXPORT_EMPTY: &str = "Grocery List is empty.";
    /// Export title
    pub const GROCERY_EXPORT_TITLE: &str = "Grocery List";
}
