// ABOUTME: End-to-end nutrition plan orchestration from validated intake profiles
// ABOUTME: Chains BMR, PAL, TDEE and the selected macro planner, singly or as a parallel batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::errors::{AppResult, ErrorResponse, ErrorResponseDetails};
use nutriplan_core::models::{NutritionPlan, PlannedMacros};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::NutritionConfig;
use crate::intake::{GoalSpec, IntakeAnswers, IntakeProfiles};
use crate::intelligence::macro_planner::{plan_macros_dynamic, plan_macros_fixed};
use crate::intelligence::nutrition_calculator::{combine_tdee, estimate_bmr, estimate_pal};
use crate::logging::AppLogger;

/// Run the full pipeline for one person
///
/// A goal with target weight and timeframe goes through the goal-driven
/// planner and its safety guardians; a direction-only goal uses the
/// fixed-ratio planner.
///
/// # Errors
///
/// Propagates `InvalidInput` from the goal-driven planner
#[instrument(skip_all, fields(name = %profiles.name))]
pub fn calculate_nutrition_plan(
    profiles: &IntakeProfiles,
    config: &NutritionConfig,
) -> AppResult<NutritionPlan> {
    let bmr = estimate_bmr(&profiles.biometrics, &config.bmr);
    let pal = estimate_pal(&profiles.activity, &config.activity_level);
    let tdee = combine_tdee(bmr, pal);

    let (macros, planner) = match profiles.goal {
        GoalSpec::Dynamic(ref goal) => {
            let plan = plan_macros_dynamic(tdee, goal, &config.macros)?;
            for guardian in &plan.triggered_guardians {
                AppLogger::log_guardian_triggered(*guardian, tdee, plan.macros.calories);
            }
            (PlannedMacros::Dynamic(plan), "dynamic")
        }
        GoalSpec::Fixed {
            direction,
            current_weight_kg,
        } => (
            PlannedMacros::Fixed(plan_macros_fixed(
                tdee,
                current_weight_kg,
                direction,
                &config.macros,
            )),
            "fixed",
        ),
    };

    let plan = NutritionPlan {
        bmr,
        pal,
        tdee,
        macros,
    };
    AppLogger::log_plan_computed(&plan, planner);
    Ok(plan)
}

/// Run the pipeline for many people in parallel; results keep input order
#[must_use]
pub fn calculate_nutrition_plans(
    profiles: &[IntakeProfiles],
    config: &NutritionConfig,
) -> Vec<AppResult<NutritionPlan>> {
    profiles
        .par_iter()
        .map(|p| calculate_nutrition_plan(p, config))
        .collect()
}

/// Outcome for one answer set in a batch, serialized as `{"ok": plan}` or `{"error": details}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchEntry {
    /// Computed plan
    Ok(NutritionPlan),
    /// Validation or calculation failure
    Error(ErrorResponseDetails),
}

impl BatchEntry {
    /// True for a computed plan
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

impl From<AppResult<NutritionPlan>> for BatchEntry {
    fn from(result: AppResult<NutritionPlan>) -> Self {
        match result {
            Ok(plan) => Self::Ok(plan),
            Err(e) => Self::Error(ErrorResponse::from(&e).error),
        }
    }
}

/// Validate and plan many raw answer sets in parallel
///
/// Produces exactly one entry per answer set, in input order. An invalid set
/// yields an error entry without affecting the others.
#[must_use]
pub fn plan_answer_batch(answers: &[IntakeAnswers], config: &NutritionConfig) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = answers
        .par_iter()
        .map(|set| {
            BatchEntry::from(
                set.to_profiles()
                    .and_then(|profiles| calculate_nutrition_plan(&profiles, config)),
            )
        })
        .collect();

    info!(
        total = entries.len(),
        planned = entries.iter().filter(|entry| entry.is_ok()).count(),
        "Batch planning complete"
    );
    entries
}
