// ABOUTME: Nutrition intelligence: energy expenditure, macro planning and safety guardians
// ABOUTME: Pure calculation stages plus the orchestrator that chains them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The calculation pipeline `BMR → PAL → TDEE → macro plan`.
//!
//! - `nutrition_calculator` - BMR, PAL and TDEE stages
//! - `macro_planner` - fixed-ratio and goal-driven macro planners
//! - `safety_guardians` - ordered pace and calorie-floor checks
//! - `nutrition_plan` - single and batch orchestration

pub mod macro_planner;
pub mod nutrition_calculator;
pub mod nutrition_plan;
pub mod safety_guardians;

pub use macro_planner::{plan_macros_dynamic, plan_macros_fixed};
pub use nutrition_calculator::{
    combine_tdee, estimate_bmr, estimate_pal, steps_contribution, training_contribution,
};
pub use nutrition_plan::{
    calculate_nutrition_plan, calculate_nutrition_plans, plan_answer_batch, BatchEntry,
};
pub use safety_guardians::{
    run_guardians, Advisory, CalorieFloorGuardian, GuardianReport, PaceLimitGuardian, PlanDraft,
    SafetyGuardian, DEFAULT_GUARDIANS,
};
