// ABOUTME: Intelligence configuration for the nutrition calculation pipeline
// ABOUTME: Loads coefficient tables, applies environment overrides and validates them once per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Provides type-safe, validated configuration for the nutrition pipeline.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, PAL tables, macro ratios and safety limits
//! - `error` - Validation and override parsing errors
//!
//! # Environment overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `NUTRIPLAN_PAL_BASE` | `activity_level.base_pal` |
//! | `NUTRIPLAN_PAL_STEPS_PER_THOUSAND` | `activity_level.steps_factor_per_thousand` |
//! | `NUTRIPLAN_PAL_MAX_STEPS_FACTOR` | `activity_level.max_steps_factor` |
//! | `NUTRIPLAN_PROTEIN_G_PER_KG` | `macros.protein_g_per_kg` |
//! | `NUTRIPLAN_FAT_G_PER_KG` | `macros.fat_g_per_kg` |
//! | `NUTRIPLAN_GOAL_LOSS_MULTIPLIER` | `macros.goal_multipliers.loss` |
//! | `NUTRIPLAN_GOAL_GAIN_MULTIPLIER` | `macros.goal_multipliers.gain` |
//! | `NUTRIPLAN_KCAL_PER_KG` | `macros.kcal_per_kg_body_weight` |
//! | `NUTRIPLAN_MAX_WEEKLY_CHANGE_FRACTION` | `macros.max_weekly_change_fraction` |
//! | `NUTRIPLAN_MIN_DAILY_CALORIES` | `macros.min_daily_calories` |

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityLevelConfig, BmrConfig, GoalMultipliers, IntensityRates, MacroConfig,
    NutritionConfig, OccupationIncrements,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for energy expenditure and macro planning
    pub nutrition: NutritionConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    ///
    /// Loaded on first access. An invalid environment falls back to the
    /// published defaults with a warning rather than aborting.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(config = ?config.nutrition, "Intelligence configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated table constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let pal = &mut self.nutrition.activity_level;
        Self::apply_env_var("NUTRIPLAN_PAL_BASE", &mut pal.base_pal)?;
        Self::apply_env_var(
            "NUTRIPLAN_PAL_STEPS_PER_THOUSAND",
            &mut pal.steps_factor_per_thousand,
        )?;
        Self::apply_env_var("NUTRIPLAN_PAL_MAX_STEPS_FACTOR", &mut pal.max_steps_factor)?;

        let macros = &mut self.nutrition.macros;
        Self::apply_env_var("NUTRIPLAN_PROTEIN_G_PER_KG", &mut macros.protein_g_per_kg)?;
        Self::apply_env_var("NUTRIPLAN_FAT_G_PER_KG", &mut macros.fat_g_per_kg)?;
        Self::apply_env_var(
            "NUTRIPLAN_GOAL_LOSS_MULTIPLIER",
            &mut macros.goal_multipliers.loss,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_GOAL_GAIN_MULTIPLIER",
            &mut macros.goal_multipliers.gain,
        )?;
        Self::apply_env_var("NUTRIPLAN_KCAL_PER_KG", &mut macros.kcal_per_kg_body_weight)?;
        Self::apply_env_var(
            "NUTRIPLAN_MAX_WEEKLY_CHANGE_FRACTION",
            &mut macros.max_weekly_change_fraction,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_MIN_DAILY_CALORIES",
            &mut macros.min_daily_calories,
        )?;

        Ok(self)
    }
}
