// ABOUTME: Step-wise onboarding commands for nutriplan-cli
// ABOUTME: Each step validates its section, merges it into the stored state and advances the wizard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::config::NutritionConfig;
use nutriplan::errors::AppResult;
use nutriplan::intake::{
    validate_activity, validate_basic, validate_goal, ActivityAnswers, BasicAnswers, GoalAnswers,
    IntakeAnswers, OnboardingStep, OnboardingStore,
};
use nutriplan::intelligence::calculate_nutrition_plan;
use tracing::info;

use super::{ActivityArgs, BasicArgs, GoalArgs};
use crate::helpers::display::{display_plan, display_state, print_json};

/// Show the stored wizard state
pub fn show(store: &OnboardingStore, json: bool) -> AppResult<()> {
    let state = store.load_or_default()?;
    if json {
        print_json(&state)
    } else {
        display_state(&state);
        Ok(())
    }
}

/// Answer the personal data step
pub fn basic(store: &OnboardingStore, args: BasicArgs) -> AppResult<()> {
    let answers = BasicAnswers::from(args);
    validate_basic(&answers)?;
    record(
        store,
        IntakeAnswers {
            basic: Some(answers),
            ..IntakeAnswers::default()
        },
        OnboardingStep::Activity,
    )
}

/// Answer the activity step
pub fn activity(store: &OnboardingStore, args: ActivityArgs) -> AppResult<()> {
    let answers = ActivityAnswers::from(args);
    validate_activity(&answers)?;
    record(
        store,
        IntakeAnswers {
            activity: Some(answers),
            ..IntakeAnswers::default()
        },
        OnboardingStep::Goal,
    )
}

/// Answer the goal step
pub fn goal(store: &OnboardingStore, args: GoalArgs) -> AppResult<()> {
    let answers = GoalAnswers::from(args);
    validate_goal(&answers)?;
    record(
        store,
        IntakeAnswers {
            goal: Some(answers),
            ..IntakeAnswers::default()
        },
        OnboardingStep::Summary,
    )
}

/// Go back one step
pub fn back(store: &OnboardingStore) -> AppResult<()> {
    let mut state = store.load_or_default()?;
    state.back();
    store.save(&state)?;
    display_state(&state);
    Ok(())
}

/// Compute the plan from the stored answers
pub fn finish(store: &OnboardingStore, config: &NutritionConfig, json: bool) -> AppResult<()> {
    let mut state = store.load_or_default()?;
    let profiles = state.to_profiles()?;
    let plan = calculate_nutrition_plan(&profiles, config)?;

    state.set_step(OnboardingStep::Summary);
    store.save(&state)?;

    if json {
        print_json(&plan)
    } else {
        display_plan(&profiles.name, &plan);
        Ok(())
    }
}

/// Discard the stored answers
pub fn reset(store: &OnboardingStore) -> AppResult<()> {
    store.reset()?;
    info!(state = %store.path().display(), "Onboarding state reset");
    println!("Onboarding state cleared.");
    Ok(())
}

fn record(store: &OnboardingStore, update: IntakeAnswers, next: OnboardingStep) -> AppResult<()> {
    let mut state = store.load_or_default()?;
    state.merge_answers(update);
    state.set_step(next);
    store.save(&state)?;
    display_state(&state);
    Ok(())
}
