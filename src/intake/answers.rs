// ABOUTME: Raw intake answers as collected by the onboarding wizard or a batch file
// ABOUTME: Sections for basic data, activity and goal plus their validated conversion to profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{
    ActivityProfile, BiometricProfile, GoalDirection, GoalProfile, Intensity, Occupation, Sex,
};
use serde::{Deserialize, Serialize};

use super::validation::{validate_activity, validate_basic, validate_goal};

/// Personal data step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicAnswers {
    /// Display name, at least two characters
    pub name: String,
    /// Biological sex
    pub sex: Sex,
    /// Age (years)
    pub age: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Body weight (kg)
    pub weight_kg: f64,
}

/// Activity step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityAnswers {
    /// Job activity category
    pub occupation: Occupation,
    /// Average daily steps
    pub daily_steps: f64,
    /// Whether the person does structured training at all
    pub has_activity: bool,
    /// Training sessions per week; ignored without activity
    #[serde(default)]
    pub training_sessions_per_week: f64,
    /// Minutes per session; ignored without activity
    #[serde(default)]
    pub session_duration_minutes: f64,
    /// Training intensity; ignored without activity
    #[serde(default = "default_intensity")]
    pub intensity: Intensity,
}

const fn default_intensity() -> Intensity {
    Intensity::Moderate
}

/// Goal step
///
/// A target weight together with a timeframe selects the goal-driven planner;
/// a bare direction selects the fixed-ratio planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAnswers {
    /// Loss, maintenance or gain
    pub direction: GoalDirection,
    /// Desired body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// Timeframe (weeks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks_to_goal: Option<f64>,
}

/// Answers collected so far; every section is optional until the wizard finishes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeAnswers {
    /// Personal data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicAnswers>,
    /// Activity data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityAnswers>,
    /// Goal data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalAnswers>,
}

impl IntakeAnswers {
    /// True when every section has been answered
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.basic.is_some() && self.activity.is_some() && self.goal.is_some()
    }

    /// Validate all sections and convert them to calculation profiles
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an unanswered section and
    /// `ValueOutOfRange` / `MissingRequiredField` for the first invalid answer
    pub fn to_profiles(&self) -> AppResult<IntakeProfiles> {
        let basic = self
            .basic
            .as_ref()
            .ok_or_else(|| AppError::missing_field("basic"))?;
        let activity = self
            .activity
            .as_ref()
            .ok_or_else(|| AppError::missing_field("activity"))?;
        let goal = self
            .goal
            .as_ref()
            .ok_or_else(|| AppError::missing_field("goal"))?;

        validate_basic(basic)?;
        validate_activity(activity)?;
        validate_goal(goal)?;

        Ok(IntakeProfiles {
            name: basic.name.trim().to_owned(),
            biometrics: basic.to_biometrics(),
            activity: activity.to_profile(),
            goal: goal.to_spec(basic.weight_kg),
        })
    }
}

impl BasicAnswers {
    /// Biometric profile for the BMR stage
    #[must_use]
    pub const fn to_biometrics(&self) -> BiometricProfile {
        BiometricProfile {
            sex: self.sex,
            age_years: self.age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
        }
    }
}

impl ActivityAnswers {
    /// Activity profile for the PAL stage; no training contributes nothing
    #[must_use]
    pub const fn to_profile(&self) -> ActivityProfile {
        if self.has_activity {
            ActivityProfile {
                occupation: self.occupation,
                daily_steps: self.daily_steps,
                training_days_per_week: self.training_sessions_per_week,
                session_duration_minutes: self.session_duration_minutes,
                intensity: self.intensity,
            }
        } else {
            ActivityProfile::without_training(self.occupation, self.daily_steps)
        }
    }
}

impl GoalAnswers {
    /// Goal description; validated answers carry both or neither of target and weeks
    #[must_use]
    pub const fn to_spec(&self, current_weight_kg: f64) -> GoalSpec {
        match (self.target_weight_kg, self.weeks_to_goal) {
            (Some(target_weight_kg), Some(weeks_to_goal)) => GoalSpec::Dynamic(GoalProfile {
                direction: self.direction,
                current_weight_kg,
                target_weight_kg,
                weeks_to_goal,
            }),
            _ => GoalSpec::Fixed {
                direction: self.direction,
                current_weight_kg,
            },
        }
    }
}

/// Which macro planner a goal selects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GoalSpec {
    /// Target weight and timeframe known
    Dynamic(GoalProfile),
    /// Direction only
    Fixed {
        /// Loss, maintenance or gain
        direction: GoalDirection,
        /// Present body weight (kg)
        current_weight_kg: f64,
    },
}

/// Validated inputs for one run of the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeProfiles {
    /// Display name
    pub name: String,
    /// BMR inputs
    pub biometrics: BiometricProfile,
    /// PAL inputs
    pub activity: ActivityProfile,
    /// Planner selection and goal
    pub goal: GoalSpec,
}
