// ABOUTME: Core data models for the nutrition pipeline
// ABOUTME: Re-exports input profiles and output plan records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Biometric, activity and goal inputs
pub mod profile;

/// Macro distributions and plans
pub mod plan;

pub use plan::{GuardianKind, MacroDistribution, MacroPlan, NutritionPlan, PlannedMacros};
pub use profile::{
    ActivityProfile, BiometricProfile, GoalDirection, GoalProfile, Intensity, Occupation, Sex,
};
