// ABOUTME: Comprehensive algorithm tests for the energy expenditure stages and the orchestrator
// ABOUTME: Tests BMR, PAL, TDEE and end-to-end plan selection against hand-computed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Comprehensive algorithm tests for the nutrition pipeline
//!
//! - Mifflin-St Jeor BMR (male/female, sex constants, monotonicity)
//! - PAL from occupation, steps, and weekly training
//! - TDEE as a plain product
//! - Orchestration: planner selection, batch ordering

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::{
    config::{IntelligenceConfig, NutritionConfig},
    errors::ErrorCode,
    intake::{GoalSpec, IntakeAnswers, IntakeProfiles},
    intelligence::{
        calculate_nutrition_plan, calculate_nutrition_plans, combine_tdee, estimate_bmr,
        estimate_pal, plan_answer_batch, steps_contribution, BatchEntry,
    },
    models::{
        ActivityProfile, BiometricProfile, GoalDirection, Intensity, Occupation, PlannedMacros,
        Sex,
    },
};

mod common;

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_bmr_reference_man() {
    common::init_test_logging();
    let config = &IntelligenceConfig::global().nutrition;

    // 10 * 70 + 6.25 * 175 - 5 * 30 + 5 = 700 + 1093.75 - 150 + 5
    let bmr = estimate_bmr(&common::reference_man(), &config.bmr);
    assert!((bmr - 1648.75).abs() < 1e-9, "BMR should be 1648.75, got {bmr}");
}

#[test]
fn test_bmr_female_typical() {
    let config = NutritionConfig::default();
    let profile = BiometricProfile {
        sex: Sex::Female,
        age_years: 25.0,
        weight_kg: 60.0,
        height_cm: 165.0,
    };

    // 600 + 1031.25 - 125 - 161
    let bmr = estimate_bmr(&profile, &config.bmr);
    assert!((bmr - 1345.25).abs() < 1e-9);
}

#[test]
fn test_bmr_monotonic_in_weight_and_height_decreasing_in_age() {
    let config = NutritionConfig::default();
    let base = common::reference_man();
    let bmr = estimate_bmr(&base, &config.bmr);

    let heavier = BiometricProfile {
        weight_kg: 71.0,
        ..base
    };
    let taller = BiometricProfile {
        height_cm: 176.0,
        ..base
    };
    let older = BiometricProfile {
        age_years: 31.0,
        ..base
    };

    assert!((estimate_bmr(&heavier, &config.bmr) - bmr - 10.0).abs() < 1e-9);
    assert!((estimate_bmr(&taller, &config.bmr) - bmr - 6.25).abs() < 1e-9);
    assert!((bmr - estimate_bmr(&older, &config.bmr) - 5.0).abs() < 1e-9);
}

#[test]
fn test_bmr_extreme_inputs_not_clamped() {
    let config = NutritionConfig::default();
    let profile = BiometricProfile {
        sex: Sex::Female,
        age_years: 100.0,
        weight_kg: 30.0,
        height_cm: 100.0,
    };

    // 300 + 625 - 500 - 161
    assert!((estimate_bmr(&profile, &config.bmr) - 264.0).abs() < 1e-9);
}

// ============================================================================
// PAL CALCULATION TESTS
// ============================================================================

#[test]
fn test_pal_reference_profile() {
    let config = NutritionConfig::default();

    // 1.1 + 0.1 + 0.16 + 3 * 1 * 0.03 / 7 = 1.372857 -> 1.373
    let pal = estimate_pal(&common::reference_activity(), &config.activity_level);
    assert!((pal - 1.373).abs() < 1e-9, "PAL should be 1.373, got {pal}");
}

#[test]
fn test_pal_minimum_is_sedentary_without_steps_or_training() {
    let config = NutritionConfig::default();
    let activity = ActivityProfile::without_training(Occupation::Sedentary, 0.0);

    assert!((estimate_pal(&activity, &config.activity_level) - 1.2).abs() < 1e-9);
}

#[test]
fn test_pal_steps_cap() {
    let config = NutritionConfig::default();

    assert!((steps_contribution(17_500.0, &config.activity_level) - 0.35).abs() < 1e-9);
    assert!((steps_contribution(1_000_000.0, &config.activity_level) - 0.35).abs() < 1e-9);

    let activity = ActivityProfile::without_training(Occupation::Sedentary, 1_000_000.0);
    assert!((estimate_pal(&activity, &config.activity_level) - 1.55).abs() < 1e-9);
}

#[test]
fn test_pal_heavy_worker_with_daily_intense_training() {
    let config = NutritionConfig::default();
    let activity = ActivityProfile {
        occupation: Occupation::Heavy,
        daily_steps: 20_000.0,
        training_days_per_week: 7.0,
        session_duration_minutes: 90.0,
        intensity: Intensity::High,
    };

    // 1.1 + 0.5 + 0.35 + 7 * 1.5 * 0.05 / 7
    assert!((estimate_pal(&activity, &config.activity_level) - 2.025).abs() < 1e-9);
}

#[test]
fn test_pal_occupation_ordering() {
    let config = NutritionConfig::default();
    let pals: Vec<f64> = [
        Occupation::Sedentary,
        Occupation::Light,
        Occupation::Moderate,
        Occupation::Heavy,
    ]
    .into_iter()
    .map(|occupation| {
        estimate_pal(
            &ActivityProfile::without_training(occupation, 5000.0),
            &config.activity_level,
        )
    })
    .collect();

    assert!(pals.windows(2).all(|pair| pair[0] < pair[1]));
}

// ============================================================================
// TDEE TESTS
// ============================================================================

#[test]
fn test_tdee_is_plain_product() {
    let tdee = combine_tdee(1724.0, 1.55);
    assert!((tdee - 2672.2).abs() < 1e-6);
}

#[test]
fn test_tdee_not_rounded() {
    let tdee = combine_tdee(1648.75, 1.373);
    assert!((tdee - 2_263.733_75).abs() < 1e-9);
}

// ============================================================================
// ORCHESTRATION TESTS
// ============================================================================

fn reference_profiles(goal: GoalSpec) -> IntakeProfiles {
    IntakeProfiles {
        name: "Reference".into(),
        biometrics: common::reference_man(),
        activity: common::reference_activity(),
        goal,
    }
}

#[test]
fn test_end_to_end_maintenance_fixed_plan() {
    common::init_test_logging();
    let plan = calculate_nutrition_plan(
        &reference_profiles(GoalSpec::Fixed {
            direction: GoalDirection::Maintenance,
            current_weight_kg: 70.0,
        }),
        &NutritionConfig::default(),
    )
    .unwrap();

    assert!((plan.bmr - 1648.75).abs() < 1e-9);
    assert!((plan.pal - 1.373).abs() < 1e-9);

    let PlannedMacros::Fixed(macros) = plan.macros else {
        panic!("direction-only goal should use the fixed planner");
    };
    // 2263.73 kcal, 140 g protein, 56 g fat, (2263.73 - 560 - 504) / 4 = 299.93 g carbs
    assert_eq!(macros.calories, 2264);
    assert_eq!(macros.protein_g, 140);
    assert_eq!(macros.fat_g, 56);
    assert_eq!(macros.carbs_g, 300);
}

#[test]
fn test_end_to_end_dynamic_plan_is_safe_for_moderate_goal() {
    common::init_test_logging();
    let plan = calculate_nutrition_plan(
        &reference_profiles(GoalSpec::Dynamic(common::loss_goal(70.0, 66.0, 10.0))),
        &NutritionConfig::default(),
    )
    .unwrap();

    let PlannedMacros::Dynamic(macros) = &plan.macros else {
        panic!("target goal should use the dynamic planner");
    };
    // 4 kg * 7700 / 70 days = 440 kcal/day
    assert_eq!(macros.daily_calorie_delta, 440);
    assert_eq!(macros.macros.calories, (plan.tdee - 440.0).round() as i64);
    assert!(macros.is_safe);
    assert!(macros.advisory_message.is_none());
}

#[test]
fn test_batch_matches_single_runs() {
    let config = NutritionConfig::default();
    let batch: Vec<IntakeProfiles> = (0..32)
        .map(|i| {
            let mut profiles = reference_profiles(GoalSpec::Fixed {
                direction: GoalDirection::Gain,
                current_weight_kg: 70.0,
            });
            profiles.biometrics.weight_kg = 50.0 + f64::from(i);
            profiles
        })
        .collect();

    let results = calculate_nutrition_plans(&batch, &config);

    assert_eq!(results.len(), batch.len());
    for (profiles, result) in batch.iter().zip(&results) {
        let single = calculate_nutrition_plan(profiles, &config).unwrap();
        assert_eq!(result.as_ref().unwrap(), &single);
    }
}

fn answers_with_weight(weight_kg: f64) -> IntakeAnswers {
    let mut answers = common::complete_answers();
    if let Some(basic) = answers.basic.as_mut() {
        basic.weight_kg = weight_kg;
    }
    answers
}

#[test]
fn test_answer_batch_keeps_input_order_around_failures() {
    common::init_test_logging();
    let config = NutritionConfig::default();
    let answers = vec![
        answers_with_weight(60.0),
        IntakeAnswers {
            activity: None,
            ..common::complete_answers()
        },
        answers_with_weight(75.0),
        answers_with_weight(301.0),
        answers_with_weight(90.0),
    ];

    let entries = plan_answer_batch(&answers, &config);

    assert_eq!(entries.len(), answers.len());
    for index in [0, 2, 4] {
        let expected =
            calculate_nutrition_plan(&answers[index].to_profiles().unwrap(), &config).unwrap();
        match &entries[index] {
            BatchEntry::Ok(plan) => assert_eq!(plan, &expected, "entry {index}"),
            BatchEntry::Error(details) => panic!("entry {index} failed: {}", details.message),
        }
    }

    let BatchEntry::Error(missing) = &entries[1] else {
        panic!("entry 1 should report the missing activity section");
    };
    assert_eq!(missing.code, ErrorCode::MissingRequiredField);
    assert_eq!(missing.field.as_deref(), Some("activity"));

    let BatchEntry::Error(out_of_range) = &entries[3] else {
        panic!("entry 3 should report the out-of-range weight");
    };
    assert_eq!(out_of_range.code, ErrorCode::ValueOutOfRange);
    assert_eq!(out_of_range.field.as_deref(), Some("weight_kg"));
}

#[test]
fn test_answer_batch_json_shape() {
    let answers = vec![
        common::complete_answers(),
        IntakeAnswers {
            goal: None,
            ..common::complete_answers()
        },
    ];

    let json = serde_json::to_value(plan_answer_batch(&answers, &NutritionConfig::default()))
        .unwrap();

    assert!(json[0]["ok"]["tdee"].is_number());
    assert_eq!(json[1]["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(json[1]["error"]["field"], "goal");
}

#[test]
fn test_empty_answer_batch() {
    assert!(plan_answer_batch(&[], &NutritionConfig::default()).is_empty());
}
