// ABOUTME: Nutrition configuration for energy expenditure and macro planning
// ABOUTME: Configures BMR coefficients, PAL activity tables, macro ratios, goal multipliers and safety limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Every coefficient used by the calculation pipeline is held here as a table
//! keyed by the domain enum it applies to. Defaults are the published values;
//! deployments may override individual entries through environment variables
//! (see [`super::IntelligenceConfig::load`]).
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - PAL: FAO/WHO/UNU Human Energy Requirements (2004)
//! - Protein: Jäger et al. (2017) ISSN Position Stand: protein and exercise
//! - Energy density of weight change: Wishnofsky (1958)

use nutriplan_core::constants::{energy, safety};
use nutriplan_core::models::{GoalDirection, Intensity, Occupation, Sex};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Nutrition configuration root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Physical Activity Level (PAL) tables
    pub activity_level: ActivityLevelConfig,
    /// Macro planner ratios, goal multipliers and safety limits
    pub macros: MacroConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant added to the base equation
    #[must_use]
    pub const fn sex_constant(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.msj_male_constant,
            Sex::Female => self.msj_female_constant,
        }
    }
}

/// PAL increments per occupation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupationIncrements {
    /// Desk work: +0.1
    pub sedentary: f64,
    /// Occasional standing/walking: +0.2
    pub light: f64,
    /// Regular physical effort: +0.3
    pub moderate: f64,
    /// Sustained heavy labor: +0.5
    pub heavy: f64,
}

impl OccupationIncrements {
    /// Increment for an occupation
    #[must_use]
    pub const fn for_occupation(&self, occupation: Occupation) -> f64 {
        match occupation {
            Occupation::Sedentary => self.sedentary,
            Occupation::Light => self.light,
            Occupation::Moderate => self.moderate,
            Occupation::Heavy => self.heavy,
        }
    }

    /// Smallest increment in the table
    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.sedentary
            .min(self.light)
            .min(self.moderate)
            .min(self.heavy)
    }
}

/// PAL contribution per training hour by intensity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityRates {
    /// Walking, gentle yoga: 0.015
    pub low: f64,
    /// Jogging, cycling: 0.03
    pub moderate: f64,
    /// HIIT, competitive sport: 0.05
    pub high: f64,
}

impl IntensityRates {
    /// Rate for an intensity level
    #[must_use]
    pub const fn for_intensity(&self, intensity: Intensity) -> f64 {
        match intensity {
            Intensity::Low => self.low,
            Intensity::Moderate => self.moderate,
            Intensity::High => self.high,
        }
    }
}

/// Physical Activity Level configuration
///
/// `PAL = base + occupation + min(steps/1000 × per_thousand, cap) + weekly_training/7`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLevelConfig {
    /// Base PAL, includes ~10% thermic effect of food (1.1)
    pub base_pal: f64,
    /// Occupation increments
    pub occupation: OccupationIncrements,
    /// PAL added per 1000 daily steps (0.02)
    pub steps_factor_per_thousand: f64,
    /// Upper bound on the steps contribution (0.35)
    pub max_steps_factor: f64,
    /// Training contribution per hour by intensity
    pub intensity: IntensityRates,
    /// Decimal places kept in the reported PAL (3)
    pub rounding_decimals: i32,
}

/// Caloric multipliers for the fixed-ratio planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalMultipliers {
    /// 20% deficit (0.8)
    pub loss: f64,
    /// No adjustment (1.0)
    pub maintenance: f64,
    /// 10% surplus (1.1)
    pub gain: f64,
}

impl GoalMultipliers {
    /// Multiplier applied to TDEE for a goal direction
    #[must_use]
    pub const fn for_direction(&self, direction: GoalDirection) -> f64 {
        match direction {
            GoalDirection::Loss => self.loss,
            GoalDirection::Maintenance => self.maintenance,
            GoalDirection::Gain => self.gain,
        }
    }
}

/// Macro planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroConfig {
    /// Protein per kg of current body weight (2.0 g/kg)
    pub protein_g_per_kg: f64,
    /// Fat per kg of current body weight (0.8 g/kg)
    pub fat_g_per_kg: f64,
    /// Fixed-ratio planner multipliers
    pub goal_multipliers: GoalMultipliers,
    /// Energy per kg of body-weight change (7700 kcal)
    pub kcal_per_kg_body_weight: f64,
    /// Weekly change ceiling as a fraction of current weight (0.01)
    pub max_weekly_change_fraction: f64,
    /// Daily calorie floor (1200 kcal)
    pub min_daily_calories: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for OccupationIncrements {
    fn default() -> Self {
        Self {
            sedentary: 0.1,
            light: 0.2,
            moderate: 0.3,
            heavy: 0.5,
        }
    }
}

impl Default for IntensityRates {
    fn default() -> Self {
        Self {
            low: 0.015,
            moderate: 0.03,
            high: 0.05,
        }
    }
}

impl Default for ActivityLevelConfig {
    fn default() -> Self {
        Self {
            base_pal: 1.1,
            occupation: OccupationIncrements::default(),
            steps_factor_per_thousand: 0.02,
            max_steps_factor: 0.35,
            intensity: IntensityRates::default(),
            rounding_decimals: 3,
        }
    }
}

impl Default for GoalMultipliers {
    fn default() -> Self {
        Self {
            loss: 0.8,
            maintenance: 1.0,
            gain: 1.1,
        }
    }
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 2.0,
            fat_g_per_kg: 0.8,
            goal_multipliers: GoalMultipliers::default(),
            kcal_per_kg_body_weight: energy::KCAL_PER_KG_BODY_FAT,
            max_weekly_change_fraction: safety::MAX_WEEKLY_CHANGE_FRACTION,
            min_daily_calories: safety::MIN_DAILY_CALORIES,
        }
    }
}

impl NutritionConfig {
    /// Validate coefficient tables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a coefficient is NaN or infinite, non-positive,
    /// a table is not ascending, or a fraction falls outside its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;
        self.validate_bmr()?;
        self.validate_activity_level()?;
        self.validate_macros()
    }

    /// Every coefficient must be finite before the range checks run
    fn validate_finite(&self) -> Result<(), ConfigError> {
        macro_rules! coefficient {
            ($value:expr, $name:literal) => {
                ($value, concat!($name, " must be a finite number"))
            };
        }

        let (bmr, pal, macros) = (&self.bmr, &self.activity_level, &self.macros);
        let coefficients = [
            coefficient!(bmr.msj_weight_coef, "BMR weight coefficient"),
            coefficient!(bmr.msj_height_coef, "BMR height coefficient"),
            coefficient!(bmr.msj_age_coef, "BMR age coefficient"),
            coefficient!(bmr.msj_male_constant, "BMR male constant"),
            coefficient!(bmr.msj_female_constant, "BMR female constant"),
            coefficient!(pal.base_pal, "Base PAL"),
            coefficient!(pal.occupation.sedentary, "Sedentary occupation increment"),
            coefficient!(pal.occupation.light, "Light occupation increment"),
            coefficient!(pal.occupation.moderate, "Moderate occupation increment"),
            coefficient!(pal.occupation.heavy, "Heavy occupation increment"),
            coefficient!(pal.steps_factor_per_thousand, "Steps factor"),
            coefficient!(pal.max_steps_factor, "Steps factor cap"),
            coefficient!(pal.intensity.low, "Low intensity rate"),
            coefficient!(pal.intensity.moderate, "Moderate intensity rate"),
            coefficient!(pal.intensity.high, "High intensity rate"),
            coefficient!(macros.protein_g_per_kg, "Protein ratio"),
            coefficient!(macros.fat_g_per_kg, "Fat ratio"),
            coefficient!(macros.goal_multipliers.loss, "Loss multiplier"),
            coefficient!(macros.goal_multipliers.maintenance, "Maintenance multiplier"),
            coefficient!(macros.goal_multipliers.gain, "Gain multiplier"),
            coefficient!(macros.kcal_per_kg_body_weight, "Energy per kg of body weight"),
            coefficient!(macros.max_weekly_change_fraction, "Weekly change fraction"),
            coefficient!(macros.min_daily_calories, "Minimum daily calories"),
        ];

        coefficients
            .into_iter()
            .find(|(value, _)| !value.is_finite())
            .map_or(Ok(()), |(_, message)| {
                Err(ConfigError::ValueOutOfRange(message))
            })
    }

    fn validate_bmr(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        if bmr.msj_weight_coef <= 0.0 || bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }
        if bmr.msj_female_constant >= bmr.msj_male_constant {
            return Err(ConfigError::InvalidRange(
                "BMR female constant must be < male constant",
            ));
        }
        Ok(())
    }

    fn validate_activity_level(&self) -> Result<(), ConfigError> {
        let pal = &self.activity_level;
        if !(1.0..=2.0).contains(&pal.base_pal) {
            return Err(ConfigError::ValueOutOfRange(
                "Base PAL must be between 1.0 and 2.0",
            ));
        }

        let occupation = &pal.occupation;
        if occupation.sedentary < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Occupation increments must not be negative",
            ));
        }
        if occupation.sedentary >= occupation.light
            || occupation.light >= occupation.moderate
            || occupation.moderate >= occupation.heavy
        {
            return Err(ConfigError::InvalidRange(
                "Occupation increments must be in ascending order",
            ));
        }

        if pal.steps_factor_per_thousand < 0.0 || pal.max_steps_factor < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Steps factor and cap must not be negative",
            ));
        }

        let intensity = &pal.intensity;
        if intensity.low < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Intensity rates must not be negative",
            ));
        }
        if intensity.low >= intensity.moderate || intensity.moderate >= intensity.high {
            return Err(ConfigError::InvalidRange(
                "Intensity rates must be in ascending order",
            ));
        }

        if !(0..=6).contains(&pal.rounding_decimals) {
            return Err(ConfigError::ValueOutOfRange(
                "PAL rounding decimals must be between 0 and 6",
            ));
        }
        Ok(())
    }

    fn validate_macros(&self) -> Result<(), ConfigError> {
        let macros = &self.macros;
        if !(0.5..=3.5).contains(&macros.protein_g_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein ratio must be between 0.5 and 3.5 g/kg",
            ));
        }
        if !(0.3..=2.0).contains(&macros.fat_g_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat ratio must be between 0.3 and 2.0 g/kg",
            ));
        }

        let goals = &macros.goal_multipliers;
        if goals.loss <= 0.0 || goals.loss >= goals.maintenance || goals.maintenance >= goals.gain
        {
            return Err(ConfigError::InvalidRange(
                "Goal multipliers must satisfy 0 < loss < maintenance < gain",
            ));
        }

        if macros.kcal_per_kg_body_weight <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Energy per kg of body weight must be positive",
            ));
        }
        if macros.max_weekly_change_fraction <= 0.0 || macros.max_weekly_change_fraction >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weekly change fraction must be between 0 and 1 (exclusive)",
            ));
        }
        if macros.min_daily_calories <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum daily calories must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nutrition_config_is_valid() {
        NutritionConfig::default().validate().unwrap();
    }

    #[test]
    fn test_tables_keyed_by_enum() {
        let config = NutritionConfig::default();
        let pal = &config.activity_level;

        assert!((pal.occupation.for_occupation(Occupation::Heavy) - 0.5).abs() < f64::EPSILON);
        assert!((pal.intensity.for_intensity(Intensity::Moderate) - 0.03).abs() < f64::EPSILON);
        assert!((pal.occupation.minimum() - 0.1).abs() < f64::EPSILON);
        assert!(
            (config.macros.goal_multipliers.for_direction(GoalDirection::Gain) - 1.1).abs()
                < f64::EPSILON
        );
        assert!((config.bmr.sex_constant(Sex::Female) + 161.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_coefficients_rejected() {
        let mut config = NutritionConfig::default();
        config.activity_level.max_steps_factor = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange("Steps factor cap must be a finite number"))
        ));

        let mut config = NutritionConfig::default();
        config.macros.min_daily_calories = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange("Minimum daily calories must be a finite number"))
        ));

        let mut config = NutritionConfig::default();
        config.bmr.msj_age_coef = f64::NEG_INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_descending_occupation_table_rejected() {
        let mut config = NutritionConfig::default();
        config.activity_level.occupation.light = 0.05;

        let error = config.validate().unwrap_err();
        assert!(matches!(error, ConfigError::InvalidRange(_)));
    }

    #[test]
    fn test_weekly_fraction_bounds() {
        let mut config = NutritionConfig::default();
        config.macros.max_weekly_change_fraction = 0.0;

        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::ValueOutOfRange(_)
        ));
    }
}
