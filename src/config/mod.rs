// ABOUTME: Configuration management module for the nutrition pipeline and its front ends
// ABOUTME: Exposes coefficient tables, environment overrides and the validated global config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for nutriplan
//!
//! - **Intelligence**: coefficient tables for BMR, PAL and macro planning,
//!   overridable from the environment and validated once per process
//!
//! Logging configuration lives in [`crate::logging`].

/// Intelligence module configuration
pub mod intelligence;

pub use intelligence::{
    ActivityLevelConfig, BmrConfig, ConfigError, GoalMultipliers, IntelligenceConfig,
    IntensityRates, MacroConfig, NutritionConfig, OccupationIncrements,
};
