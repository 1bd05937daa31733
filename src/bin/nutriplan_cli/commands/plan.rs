// ABOUTME: One-shot plan command for nutriplan-cli
// ABOUTME: Validates flag answers, runs the pipeline and prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::config::NutritionConfig;
use nutriplan::errors::AppResult;
use nutriplan::intake::IntakeAnswers;
use nutriplan::intelligence::calculate_nutrition_plan;

use super::{ActivityArgs, BasicArgs, GoalArgs};
use crate::helpers::display::{display_plan, print_json};

/// Compute and print a plan from command-line answers
pub fn run(
    basic: BasicArgs,
    activity: ActivityArgs,
    goal: GoalArgs,
    config: &NutritionConfig,
    json: bool,
) -> AppResult<()> {
    let answers = IntakeAnswers {
        basic: Some(basic.into()),
        activity: Some(activity.into()),
        goal: Some(goal.into()),
    };
    let profiles = answers.to_profiles()?;
    let plan = calculate_nutrition_plan(&profiles, config)?;

    if json {
        print_json(&plan)
    } else {
        display_plan(&profiles.name, &plan);
        Ok(())
    }
}
