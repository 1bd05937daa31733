// ABOUTME: Main library entry point for the nutriplan nutrition calculator
// ABOUTME: Computes BMR, PAL, TDEE and safety-checked macronutrient targets from intake answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # nutriplan
//!
//! Daily energy and macronutrient planning from a short intake questionnaire.
//!
//! ## Pipeline
//!
//! 1. **BMR** - Mifflin-St Jeor from sex, age, weight and height
//! 2. **PAL** - base + occupation + capped steps + weekly training
//! 3. **TDEE** - BMR × PAL
//! 4. **Macros** - fixed-ratio for direction-only goals, or goal-driven with
//!    pace and calorie-floor safety guardians
//!
//! ## Architecture
//!
//! - **Intake**: answer sections, boundary validation, onboarding wizard store
//! - **Intelligence**: the pure calculation stages and the orchestrator
//! - **Config**: coefficient tables with environment overrides
//! - **Logging**: `tracing` subscriber setup and domain log events
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::config::IntelligenceConfig;
//! use nutriplan::errors::AppResult;
//! use nutriplan::intake::IntakeAnswers;
//! use nutriplan::intelligence::calculate_nutrition_plan;
//!
//! fn plan(answers: &IntakeAnswers) -> AppResult<i64> {
//!     let profiles = answers.to_profiles()?;
//!     let plan = calculate_nutrition_plan(&profiles, &IntelligenceConfig::global().nutrition)?;
//!     Ok(plan.macros.distribution().calories)
//! }
//! ```

/// Configuration management
pub mod config;

/// Intake answers, validation and onboarding state
pub mod intake;

/// Calculation pipeline
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use nutriplan_core::{constants, errors, models};
