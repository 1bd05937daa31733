// ABOUTME: Boundary validation of intake answers against the form ranges
// ABOUTME: Range and presence checks producing field-tagged AppError values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intake validation
//!
//! The calculation core trusts its inputs; this module is the only place the
//! form ranges are enforced. Every check returns on the first violation with
//! the offending field recorded in the error context.

use nutriplan_core::constants::intake_limits::{
    AGE_MAX, AGE_MIN, HEIGHT_MAX_CM, HEIGHT_MIN_CM, NAME_MIN_CHARS, SESSIONS_MAX, SESSIONS_MIN,
    SESSION_MINUTES_MAX, SESSION_MINUTES_MIN, STEPS_MAX, STEPS_MIN, WEIGHT_MAX_KG, WEIGHT_MIN_KG,
};
use nutriplan_core::errors::{AppError, AppResult};

use super::answers::{ActivityAnswers, BasicAnswers, GoalAnswers};
use crate::logging::AppLogger;

/// Check an inclusive range; NaN is always out of range
///
/// # Errors
///
/// Returns `ValueOutOfRange` naming `field`
pub fn check_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        AppLogger::log_validation_failure(field, &format!("{value} outside {min}..={max}"));
        Err(AppError::out_of_range(field, value, min, max))
    }
}

/// Validate the personal data step
///
/// # Errors
///
/// Returns the first invalid field
pub fn validate_basic(basic: &BasicAnswers) -> AppResult<()> {
    let name_chars = basic.name.trim().chars().count();
    if name_chars == 0 {
        AppLogger::log_validation_failure("name", "missing");
        return Err(AppError::missing_field("name"));
    }
    if name_chars < NAME_MIN_CHARS {
        AppLogger::log_validation_failure("name", "too short");
        return Err(AppError::invalid_input(format!(
            "name must have at least {NAME_MIN_CHARS} characters"
        ))
        .with_field("name"));
    }

    check_range("age", basic.age, AGE_MIN, AGE_MAX)?;
    check_range("height_cm", basic.height_cm, HEIGHT_MIN_CM, HEIGHT_MAX_CM)?;
    check_range("weight_kg", basic.weight_kg, WEIGHT_MIN_KG, WEIGHT_MAX_KG)
}

/// Validate the activity step; training fields are only checked when the person exercises
///
/// # Errors
///
/// Returns the first invalid field
pub fn validate_activity(activity: &ActivityAnswers) -> AppResult<()> {
    check_range("daily_steps", activity.daily_steps, STEPS_MIN, STEPS_MAX)?;

    if activity.has_activity {
        check_range(
            "training_sessions_per_week",
            activity.training_sessions_per_week,
            SESSIONS_MIN,
            SESSIONS_MAX,
        )?;
        check_range(
            "session_duration_minutes",
            activity.session_duration_minutes,
            SESSION_MINUTES_MIN,
            SESSION_MINUTES_MAX,
        )?;
    }
    Ok(())
}

/// Validate the goal step
///
/// Target weight and timeframe go together: one without the other is a
/// missing field.
///
/// # Errors
///
/// Returns the first invalid or missing field
pub fn validate_goal(goal: &GoalAnswers) -> AppResult<()> {
    match (goal.target_weight_kg, goal.weeks_to_goal) {
        (None, None) => Ok(()),
        (Some(_), None) => {
            AppLogger::log_validation_failure("weeks_to_goal", "missing");
            Err(AppError::missing_field("weeks_to_goal"))
        }
        (None, Some(_)) => {
            AppLogger::log_validation_failure("target_weight_kg", "missing");
            Err(AppError::missing_field("target_weight_kg"))
        }
        (Some(target), Some(weeks)) => {
            check_range("target_weight_kg", target, WEIGHT_MIN_KG, WEIGHT_MAX_KG)?;
            if weeks.is_finite() && weeks > 0.0 {
                Ok(())
            } else {
                AppLogger::log_validation_failure("weeks_to_goal", "not positive");
                Err(AppError::invalid_input(format!(
                    "weeks_to_goal must be greater than zero, got {weeks}"
                ))
                .with_field("weeks_to_goal"))
            }
        }
    }
}
