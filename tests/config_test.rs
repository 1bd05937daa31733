// ABOUTME: Integration tests for coefficient configuration loading and environment overrides
// ABOUTME: Runs serially because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use nutriplan::{
    config::{ConfigError, IntelligenceConfig, NutritionConfig},
    errors::{AppError, ErrorCode},
    intelligence::plan_macros_fixed,
    models::GoalDirection,
};
use serial_test::serial;

mod common;

const OVERRIDE_VARS: [&str; 10] = [
    "NUTRIPLAN_PAL_BASE",
    "NUTRIPLAN_PAL_STEPS_PER_THOUSAND",
    "NUTRIPLAN_PAL_MAX_STEPS_FACTOR",
    "NUTRIPLAN_PROTEIN_G_PER_KG",
    "NUTRIPLAN_FAT_G_PER_KG",
    "NUTRIPLAN_GOAL_LOSS_MULTIPLIER",
    "NUTRIPLAN_GOAL_GAIN_MULTIPLIER",
    "NUTRIPLAN_KCAL_PER_KG",
    "NUTRIPLAN_MAX_WEEKLY_CHANGE_FRACTION",
    "NUTRIPLAN_MIN_DAILY_CALORIES",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    common::init_test_logging();
    clear_overrides();

    let config = IntelligenceConfig::load().unwrap();
    let defaults = NutritionConfig::default();

    assert!((config.nutrition.macros.protein_g_per_kg - 2.0).abs() < f64::EPSILON);
    assert!(
        (config.nutrition.activity_level.base_pal - defaults.activity_level.base_pal).abs()
            < f64::EPSILON
    );
}

#[test]
#[serial]
fn test_env_overrides_applied() {
    clear_overrides();
    env::set_var("NUTRIPLAN_PROTEIN_G_PER_KG", " 1.6 ");
    env::set_var("NUTRIPLAN_MIN_DAILY_CALORIES", "1500");

    let config = IntelligenceConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert!((config.nutrition.macros.protein_g_per_kg - 1.6).abs() < f64::EPSILON);
    assert!((config.nutrition.macros.min_daily_calories - 1500.0).abs() < f64::EPSILON);

    let plan = plan_macros_fixed(
        2000.0,
        50.0,
        GoalDirection::Maintenance,
        &config.nutrition.macros,
    );
    assert_eq!(plan.protein_g, 80);
}

#[test]
#[serial]
fn test_unparseable_override_rejected() {
    clear_overrides();
    env::set_var("NUTRIPLAN_PAL_BASE", "one point one");

    let result = IntelligenceConfig::load();
    clear_overrides();

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::Parse(ref message) if message.contains("NUTRIPLAN_PAL_BASE")));
    assert_eq!(AppError::from(err).code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_overrides();
    env::set_var("NUTRIPLAN_MAX_WEEKLY_CHANGE_FRACTION", "1.5");

    let result = IntelligenceConfig::load();
    clear_overrides();

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    assert_eq!(AppError::from(err).code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_nan_override_rejected() {
    clear_overrides();
    env::set_var("NUTRIPLAN_MIN_DAILY_CALORIES", "NaN");

    let result = IntelligenceConfig::load();
    clear_overrides();

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValueOutOfRange("Minimum daily calories must be a finite number")
    ));
    assert_eq!(AppError::from(err).code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_infinite_overrides_rejected() {
    for (var, value) in [
        ("NUTRIPLAN_MIN_DAILY_CALORIES", "inf"),
        ("NUTRIPLAN_PAL_MAX_STEPS_FACTOR", "NaN"),
        ("NUTRIPLAN_KCAL_PER_KG", "infinity"),
        ("NUTRIPLAN_MAX_WEEKLY_CHANGE_FRACTION", "-inf"),
    ] {
        clear_overrides();
        env::set_var(var, value);

        let result = IntelligenceConfig::load();
        clear_overrides();

        assert!(
            matches!(result, Err(ConfigError::ValueOutOfRange(_))),
            "{var}={value} should be rejected"
        );
    }
}

#[test]
#[serial]
fn test_inverted_goal_multipliers_rejected() {
    clear_overrides();
    env::set_var("NUTRIPLAN_GOAL_LOSS_MULTIPLIER", "1.2");

    let result = IntelligenceConfig::load();
    clear_overrides();

    assert!(matches!(result.unwrap_err(), ConfigError::InvalidRange(_)));
}

#[test]
fn test_config_serializes_for_inspection() {
    let json = serde_json::to_value(IntelligenceConfig::default()).unwrap();

    assert_eq!(json["nutrition"]["macros"]["fat_g_per_kg"], 0.8);
    assert_eq!(json["nutrition"]["activity_level"]["rounding_decimals"], 3);
}
