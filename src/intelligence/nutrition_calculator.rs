// ABOUTME: Energy expenditure algorithms using peer-reviewed formulas
// ABOUTME: BMR (Mifflin-St Jeor), precise PAL from occupation/steps/training, and TDEE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! The first three stages of the pipeline. Each is a pure function of its
//! profile and coefficient table: no I/O, no shared state, no failure modes.
//! Inputs are trusted to be range-checked by the intake layer
//! (see [`crate::intake::validation`]); the formulas are not re-validated here.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - FAO/WHO/UNU (2004). Human energy requirements.
//!   <https://www.fao.org/3/y5686e/y5686e.pdf>

use nutriplan_core::constants::energy::{DAYS_PER_WEEK, MINUTES_PER_HOUR};
use nutriplan_core::models::{ActivityProfile, BiometricProfile};

use crate::config::{ActivityLevelConfig, BmrConfig};

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// The result keeps full floating precision; rounding is left to presentation.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn estimate_bmr(profile: &BiometricProfile, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * profile.age_years;

    weight_component + height_component + age_component + config.sex_constant(profile.sex)
}

/// Steps contribution to PAL, linear in steps and capped
#[must_use]
pub fn steps_contribution(daily_steps: f64, config: &ActivityLevelConfig) -> f64 {
    (daily_steps / 1000.0 * config.steps_factor_per_thousand).min(config.max_steps_factor)
}

/// Structured training contribution to PAL, averaged over the week
#[must_use]
pub fn training_contribution(activity: &ActivityProfile, config: &ActivityLevelConfig) -> f64 {
    let weekly = activity.training_days_per_week
        * (activity.session_duration_minutes / MINUTES_PER_HOUR)
        * config.intensity.for_intensity(activity.intensity);
    weekly / DAYS_PER_WEEK
}

/// Calculate a precise Physical Activity Level (PAL)
///
/// ```text
/// PAL = base (1.1, thermic effect of food)
///     + occupation increment
///     + min(steps/1000 × 0.02, 0.35)
///     + (sessions × hours × intensity_rate) / 7
/// ```
///
/// Rounded to `rounding_decimals` (3) places, half away from zero. Only the
/// steps term is capped; the aggregate is not clamped. Typical output is
/// 1.2 (sedentary) to 2.4 (physical job plus daily intense training).
#[must_use]
pub fn estimate_pal(activity: &ActivityProfile, config: &ActivityLevelConfig) -> f64 {
    let pal = config.base_pal
        + config.occupation.for_occupation(activity.occupation)
        + steps_contribution(activity.daily_steps, config)
        + training_contribution(activity, config);

    round_to_decimals(pal, config.rounding_decimals)
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x PAL, unrounded.
///
/// | Category       | PAL range   |
/// |----------------|-------------|
/// | Sedentary      | 1.2 – 1.39  |
/// | Lightly active | 1.4 – 1.59  |
/// | Moderately     | 1.6 – 1.79  |
/// | Very active    | 1.8 – 1.99  |
/// | Extra active   | 2.0 – 2.4   |
#[must_use]
pub fn combine_tdee(bmr: f64, pal: f64) -> f64 {
    bmr * pal
}

fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
