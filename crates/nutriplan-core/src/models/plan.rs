// ABOUTME: Output records of the nutrition pipeline
// ABOUTME: MacroDistribution, MacroPlan with safety advisory, GuardianKind and NutritionPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::energy::{KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};

/// Daily calorie and macronutrient targets, rounded to whole kcal / grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Daily calorie target (kcal)
    pub calories: i64,
    /// Protein (g)
    pub protein_g: i64,
    /// Fat (g)
    pub fat_g: i64,
    /// Carbohydrate (g); may be negative when protein and fat alone exceed the target
    pub carbs_g: i64,
}

impl MacroDistribution {
    /// Energy implied by the gram targets using Atwater factors (kcal)
    #[must_use]
    pub fn atwater_energy_kcal(&self) -> f64 {
        let carbs_kcal = self.carbs_g as f64 * KCAL_PER_GRAM_CARB;
        (self.fat_g as f64).mul_add(
            KCAL_PER_GRAM_FAT,
            (self.protein_g as f64).mul_add(KCAL_PER_GRAM_PROTEIN, carbs_kcal),
        )
    }
}

/// Safety guardian identifiers, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardianKind {
    /// Weekly weight change capped at a fraction of body weight
    PaceLimit,
    /// Daily calorie target floored at the minimum
    CalorieFloor,
}

/// Goal-driven macro plan with safety status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPlan {
    /// Calories and macronutrient grams
    #[serde(flatten)]
    pub macros: MacroDistribution,
    /// Applied daily deficit or surplus magnitude (kcal), after pace limiting
    pub daily_calorie_delta: i64,
    /// False when any guardian adjusted the plan
    pub is_safe: bool,
    /// Message from the last guardian that fired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory_message: Option<String>,
    /// Every guardian that fired, in evaluation order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggered_guardians: Vec<GuardianKind>,
}

/// Macro output of whichever planner handled the goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PlannedMacros {
    /// Goal-driven plan with safety guardians
    Dynamic(MacroPlan),
    /// Fixed-ratio plan for direction-only goals
    Fixed(MacroDistribution),
}

impl PlannedMacros {
    /// Calorie and gram targets regardless of planner
    #[must_use]
    pub const fn distribution(&self) -> &MacroDistribution {
        match self {
            Self::Dynamic(plan) => &plan.macros,
            Self::Fixed(distribution) => distribution,
        }
    }

    /// Safety status; fixed-ratio plans carry no guardians and are always safe
    #[must_use]
    pub const fn is_safe(&self) -> bool {
        match self {
            Self::Dynamic(plan) => plan.is_safe,
            Self::Fixed(_) => true,
        }
    }
}

/// Full pipeline result with intermediate values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Physical activity level multiplier
    pub pal: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Recommended targets
    pub macros: PlannedMacros,
}
