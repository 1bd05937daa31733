// ABOUTME: Input value records for the nutrition pipeline
// ABOUTME: BiometricProfile, ActivityProfile, GoalProfile and their enum fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

/// Occupational activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    /// Desk work, minimal physical demand (office worker)
    Sedentary,
    /// Standing or walking occasionally (retail, lab work)
    Light,
    /// Regular physical effort (construction, waiter)
    Moderate,
    /// Sustained heavy labor (farming, mining)
    Heavy,
}

/// Structured exercise intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Walking, gentle yoga, stretching
    Low,
    /// Jogging, cycling, recreational sports
    #[serde(alias = "medium")]
    Moderate,
    /// HIIT, competitive sports, heavy resistance training
    High,
}

/// Direction of the body-weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    /// Caloric deficit
    Loss,
    /// Caloric balance
    #[serde(alias = "maintain")]
    Maintenance,
    /// Caloric surplus
    Gain,
}

macro_rules! impl_label_enum {
    (@first $first:literal $(, $rest:literal)*) => { $first };
    ($ty:ident, $field:literal, { $($variant:ident => [$($label:literal),+]),+ $(,)? }) => {
        impl $ty {
            /// Canonical lowercase label
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => impl_label_enum!(@first $($label),+),)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($($label)|+ => Ok(Self::$variant),)+
                    other => Err(AppError::invalid_format(format!(
                        concat!("Invalid ", $field, " '{}'. Must be: {}"),
                        other,
                        [$(impl_label_enum!(@first $($label),+)),+].join(", ")
                    ))
                    .with_field($field)),
                }
            }
        }
    };
}

impl_label_enum!(Sex, "sex", { Male => ["male"], Female => ["female"] });
impl_label_enum!(Occupation, "occupation", {
    Sedentary => ["sedentary"],
    Light => ["light"],
    Moderate => ["moderate"],
    Heavy => ["heavy"],
});
impl_label_enum!(Intensity, "intensity", {
    Low => ["low", "easy"],
    Moderate => ["moderate", "medium"],
    High => ["high", "hard"],
});
impl_label_enum!(GoalDirection, "direction", {
    Loss => ["loss", "weight_loss"],
    Maintenance => ["maintenance", "maintain"],
    Gain => ["gain", "muscle_gain"],
});

/// Biometric data consumed by the BMR estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
}

/// Lifestyle and exercise data consumed by the PAL estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityProfile {
    /// Occupational activity level
    pub occupation: Occupation,
    /// Average steps per day
    pub daily_steps: f64,
    /// Structured training sessions per week
    pub training_days_per_week: f64,
    /// Duration of each session in minutes
    pub session_duration_minutes: f64,
    /// Exercise intensity
    pub intensity: Intensity,
}

impl ActivityProfile {
    /// Profile with no structured training (only occupation and steps)
    #[must_use]
    pub const fn without_training(occupation: Occupation, daily_steps: f64) -> Self {
        Self {
            occupation,
            daily_steps,
            training_days_per_week: 0.0,
            session_duration_minutes: 0.0,
            intensity: Intensity::Low,
        }
    }
}

/// Weight goal consumed by the dynamic macro planner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    /// Loss, maintenance or gain
    pub direction: GoalDirection,
    /// Present body weight (kg); macros are derived from this
    pub current_weight_kg: f64,
    /// Desired body weight (kg)
    pub target_weight_kg: f64,
    /// Timeframe in weeks, must be > 0
    pub weeks_to_goal: f64,
}

impl GoalProfile {
    /// Absolute weight change requested (kg)
    #[must_use]
    pub fn weight_difference_kg(&self) -> f64 {
        (self.current_weight_kg - self.target_weight_kg).abs()
    }

    /// Requested weekly weight change (kg/week)
    #[must_use]
    pub fn weekly_change_kg(&self) -> f64 {
        self.weight_difference_kg() / self.weeks_to_goal
    }
}
