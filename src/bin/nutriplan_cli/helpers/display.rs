// ABOUTME: Output formatting helpers for nutriplan-cli
// ABOUTME: Human-readable plan and wizard summaries plus JSON output on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::errors::AppResult;
use nutriplan::intake::{IntakeAnswers, OnboardingState};
use nutriplan::models::{NutritionPlan, PlannedMacros};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a computed plan
pub fn display_plan(name: &str, plan: &NutritionPlan) {
    let macros = plan.macros.distribution();

    println!("\nNutrition plan for {name}");
    println!("{}", "=".repeat(50));
    println!("   BMR:  {:.0} kcal/day", plan.bmr);
    println!("   PAL:  {:.3}", plan.pal);
    println!("   TDEE: {:.0} kcal/day", plan.tdee);

    println!("\nDAILY TARGETS:");
    println!("{}", "=".repeat(50));
    println!("   Calories: {} kcal", macros.calories);
    println!("   Protein:  {} g", macros.protein_g);
    println!("   Fat:      {} g", macros.fat_g);
    println!("   Carbs:    {} g", macros.carbs_g);

    match &plan.macros {
        PlannedMacros::Dynamic(dynamic) => {
            println!("   Daily adjustment: {} kcal", dynamic.daily_calorie_delta);
            if let Some(message) = &dynamic.advisory_message {
                println!("\nWARNING:");
                println!("{message}");
            }
        }
        PlannedMacros::Fixed(_) => {
            println!("   Planner: fixed ratio (no target weight)");
        }
    }

    if macros.carbs_g < 0 {
        println!("\nNOTE: protein and fat alone exceed the calorie target.");
    }
}

/// Display the wizard step and the answers collected so far
pub fn display_state(state: &OnboardingState) {
    println!("\nOnboarding {}", state.session_id);
    println!("{}", "=".repeat(50));
    println!("   Step: {} ({}/4)", state.step, state.step.number());
    println!(
        "   Updated: {}",
        state.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
    display_answers(&state.answers);

    if state.is_complete() {
        println!("\nAll steps answered. Run `nutriplan-cli intake finish` for your plan.");
    }
}

fn display_answers(answers: &IntakeAnswers) {
    match &answers.basic {
        Some(basic) => println!(
            "   Basic: {}, {}, {} years, {} cm, {} kg",
            basic.name, basic.sex, basic.age, basic.height_cm, basic.weight_kg
        ),
        None => println!("   Basic: (not answered)"),
    }
    match &answers.activity {
        Some(activity) if activity.has_activity => println!(
            "   Activity: {} job, {} steps/day, {} x {} min {} training/week",
            activity.occupation,
            activity.daily_steps,
            activity.training_sessions_per_week,
            activity.session_duration_minutes,
            activity.intensity
        ),
        Some(activity) => println!(
            "   Activity: {} job, {} steps/day, no training",
            activity.occupation, activity.daily_steps
        ),
        None => println!("   Activity: (not answered)"),
    }
    match &answers.goal {
        Some(goal) => match (goal.target_weight_kg, goal.weeks_to_goal) {
            (Some(target), Some(weeks)) => {
                println!("   Goal: {} to {target} kg in {weeks} weeks", goal.direction);
            }
            _ => println!("   Goal: {}", goal.direction),
        },
        None => println!("   Goal: (not answered)"),
    }
}
