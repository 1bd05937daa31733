// ABOUTME: Intake layer turning user answers into validated calculation profiles
// ABOUTME: Answer sections, boundary validation and the persisted onboarding wizard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intake
//!
//! - `answers` - raw answer sections and their conversion to profiles
//! - `validation` - form range checks, the only place inputs are range-checked
//! - `onboarding` - wizard step state and its JSON file store

pub mod answers;
pub mod onboarding;
pub mod validation;

pub use answers::{
    ActivityAnswers, BasicAnswers, GoalAnswers, GoalSpec, IntakeAnswers, IntakeProfiles,
};
pub use onboarding::{OnboardingState, OnboardingStep, OnboardingStore};
pub use validation::{check_range, validate_activity, validate_basic, validate_goal};
