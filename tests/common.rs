// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and reference intake answers and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutriplan`

use std::sync::Once;

use nutriplan::intake::{ActivityAnswers, BasicAnswers, GoalAnswers, IntakeAnswers};
use nutriplan::models::{
    ActivityProfile, BiometricProfile, GoalDirection, GoalProfile, Intensity, Occupation, Sex,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 30-year-old man, 70 kg, 175 cm
pub const fn reference_man() -> BiometricProfile {
    BiometricProfile {
        sex: Sex::Male,
        age_years: 30.0,
        weight_kg: 70.0,
        height_cm: 175.0,
    }
}

/// Desk job, 8000 steps, three one-hour moderate sessions a week
pub const fn reference_activity() -> ActivityProfile {
    ActivityProfile {
        occupation: Occupation::Sedentary,
        daily_steps: 8000.0,
        training_days_per_week: 3.0,
        session_duration_minutes: 60.0,
        intensity: Intensity::Moderate,
    }
}

/// Loss goal helper
pub const fn loss_goal(current: f64, target: f64, weeks: f64) -> GoalProfile {
    GoalProfile {
        direction: GoalDirection::Loss,
        current_weight_kg: current,
        target_weight_kg: target,
        weeks_to_goal: weeks,
    }
}

/// Complete, valid answers with a moderate loss target
pub fn complete_answers() -> IntakeAnswers {
    IntakeAnswers {
        basic: Some(BasicAnswers {
            name: "Ana".into(),
            sex: Sex::Female,
            age: 30.0,
            height_cm: 165.0,
            weight_kg: 68.0,
        }),
        activity: Some(ActivityAnswers {
            occupation: Occupation::Light,
            daily_steps: 8000.0,
            has_activity: true,
            training_sessions_per_week: 3.0,
            session_duration_minutes: 45.0,
            intensity: Intensity::Moderate,
        }),
        goal: Some(GoalAnswers {
            direction: GoalDirection::Loss,
            target_weight_kg: Some(62.0),
            weeks_to_goal: Some(12.0),
        }),
    }
}
