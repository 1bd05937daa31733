// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy conversion factors, safety thresholds, intake form limits and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable coefficients (formula
//! weights, activity tables, goal multipliers) live in the configuration layer;
//! the values here are physical conversion factors and fixed limits.

/// Energy content of macronutrients and body tissue
pub mod energy {
    /// Atwater factor for protein (kcal/g)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Atwater factor for carbohydrate (kcal/g)
    pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
    /// Atwater factor for fat (kcal/g)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Approximate energy content of 1 kg of body fat (Wishnofsky's rule)
    pub const KCAL_PER_KG_BODY_FAT: f64 = 7700.0;
    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Safety guardian thresholds
pub mod safety {
    /// Maximum safe weekly weight change as a fraction of current body weight
    pub const MAX_WEEKLY_CHANGE_FRACTION: f64 = 0.01;
    /// Minimum daily calorie target (kcal)
    pub const MIN_DAILY_CALORIES: f64 = 1200.0;
}

/// Intake form ranges, enforced at the input boundary only
pub mod intake_limits {
    /// Minimum age (years)
    pub const AGE_MIN: f64 = 12.0;
    /// Maximum age (years)
    pub const AGE_MAX: f64 = 100.0;
    /// Minimum height (cm)
    pub const HEIGHT_MIN_CM: f64 = 100.0;
    /// Maximum height (cm)
    pub const HEIGHT_MAX_CM: f64 = 250.0;
    /// Minimum body weight (kg)
    pub const WEIGHT_MIN_KG: f64 = 30.0;
    /// Maximum body weight (kg)
    pub const WEIGHT_MAX_KG: f64 = 300.0;
    /// Minimum daily steps
    pub const STEPS_MIN: f64 = 0.0;
    /// Maximum daily steps
    pub const STEPS_MAX: f64 = 50_000.0;
    /// Minimum training sessions per week when exercising
    pub const SESSIONS_MIN: f64 = 1.0;
    /// Maximum training sessions per week
    pub const SESSIONS_MAX: f64 = 21.0;
    /// Minimum session duration (minutes)
    pub const SESSION_MINUTES_MIN: f64 = 10.0;
    /// Maximum session duration (minutes)
    pub const SESSION_MINUTES_MAX: f64 = 300.0;
    /// Minimum characters in the display name
    pub const NAME_MIN_CHARS: usize = 2;
}

/// Service identifiers for logging
pub mod service_names {
    /// Library / CLI service name
    pub const NUTRIPLAN: &str = "nutriplan";
    /// Command-line binary name
    pub const NUTRIPLAN_CLI: &str = "nutriplan-cli";
}

/// Local storage defaults
pub mod storage {
    /// Default onboarding state file name
    pub const ONBOARDING_STATE_FILE: &str = "onboarding-storage.json";
    /// Environment variable overriding the onboarding state path
    pub const ONBOARDING_STATE_ENV: &str = "NUTRIPLAN_STATE_PATH";
}
