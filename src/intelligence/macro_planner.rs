// ABOUTME: Macronutrient planning from TDEE, body weight and goal
// ABOUTME: Fixed-ratio planner for direction-only goals and a goal-driven planner with safety guardians
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Planner Module
//!
//! Protein and fat are set per kilogram of current body weight; carbohydrates
//! fill the remaining calories. Carbs are derived from the unrounded protein
//! and fat grams and every output is rounded last, so the macros reproduce the
//! calorie target within rounding slack.
//!
//! # References
//!
//! - Jäger, R., et al. (2017). ISSN Position Stand: Protein and exercise.
//!   <https://doi.org/10.1186/s12970-017-0177-8>
//! - Hall, K.D. (2008). What is the required energy deficit per unit weight loss?
//!   <https://doi.org/10.1038/ijo.2007.201>

use nutriplan_core::constants::energy::{
    KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{GoalDirection, GoalProfile, MacroDistribution, MacroPlan};
use tracing::debug;

use crate::config::MacroConfig;
use crate::intelligence::safety_guardians::{run_guardians, PlanDraft, DEFAULT_GUARDIANS};

/// Unrounded gram targets for a calorie budget
#[derive(Debug, Clone, Copy)]
struct MacroGrams {
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
}

impl MacroGrams {
    fn split(calories: f64, weight_kg: f64, config: &MacroConfig) -> Self {
        let protein_g = weight_kg * config.protein_g_per_kg;
        let fat_g = weight_kg * config.fat_g_per_kg;
        let carbs_g = (calories - protein_g * KCAL_PER_GRAM_PROTEIN - fat_g * KCAL_PER_GRAM_FAT)
            / KCAL_PER_GRAM_CARB;
        Self {
            protein_g,
            fat_g,
            carbs_g,
        }
    }

    fn rounded(self, calories: f64) -> MacroDistribution {
        MacroDistribution {
            calories: round_whole(calories),
            protein_g: round_whole(self.protein_g),
            fat_g: round_whole(self.fat_g),
            carbs_g: round_whole(self.carbs_g),
        }
    }
}

/// Fixed-ratio plan for a goal given only as a direction
///
/// `calories = TDEE × multiplier(direction)` with multipliers loss 0.8,
/// maintenance 1.0, gain 1.1. Negative carbs are reported as computed.
#[must_use]
pub fn plan_macros_fixed(
    tdee: f64,
    current_weight_kg: f64,
    direction: GoalDirection,
    config: &MacroConfig,
) -> MacroDistribution {
    let calories = tdee * config.goal_multipliers.for_direction(direction);
    MacroGrams::split(calories, current_weight_kg, config).rounded(calories)
}

/// Goal-driven plan with safety guardians
///
/// The daily adjustment is `|current − target| × 7700 / (weeks × 7)`, capped
/// by the pace guardian and applied in the goal's direction (maintenance
/// applies none). The result is then floored at the minimum daily calories.
/// `daily_calorie_delta` reports the adjustment after pace limiting and is
/// unaffected by the calorie floor.
///
/// # Errors
///
/// Returns [`AppError::invalid_input`] when `weeks_to_goal` is not a positive
/// finite number or `tdee`, `current_weight_kg` or `target_weight_kg` is not
/// positive and finite.
pub fn plan_macros_dynamic(
    tdee: f64,
    goal: &GoalProfile,
    config: &MacroConfig,
) -> AppResult<MacroPlan> {
    if !tdee.is_finite() || tdee <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "TDEE must be a positive number, got {tdee}"
        ))
        .with_field("tdee"));
    }
    if !goal.weeks_to_goal.is_finite() || goal.weeks_to_goal <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Weeks to goal must be greater than zero, got {}",
            goal.weeks_to_goal
        ))
        .with_field("weeks_to_goal"));
    }
    if !goal.current_weight_kg.is_finite() || goal.current_weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Current weight must be a positive number, got {}",
            goal.current_weight_kg
        ))
        .with_field("current_weight_kg"));
    }
    if !goal.target_weight_kg.is_finite() || goal.target_weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "Target weight must be a positive number, got {}",
            goal.target_weight_kg
        ))
        .with_field("target_weight_kg"));
    }

    let mut draft = PlanDraft::new(tdee, goal, config);
    let report = run_guardians(&mut draft, DEFAULT_GUARDIANS, config);

    let calories = draft.target_calories();
    let macros = MacroGrams::split(calories, goal.current_weight_kg, config).rounded(calories);

    debug!(
        direction = %goal.direction,
        requested_weekly_change_kg = draft.requested_weekly_change_kg(),
        daily_adjustment = draft.daily_adjustment(),
        calories,
        safe = report.is_safe(),
        "Dynamic macro plan computed"
    );

    Ok(MacroPlan {
        macros,
        daily_calorie_delta: round_whole(draft.daily_adjustment()),
        is_safe: report.is_safe(),
        advisory_message: report.advisory_message,
        triggered_guardians: report.triggered,
    })
}

/// Round half away from zero to a whole number
fn round_whole(value: f64) -> i64 {
    value.round() as i64
}
