// ABOUTME: Safety guardians that clamp or flag unsafe caloric targets before they reach the user
// ABOUTME: Ordered pace-limit and calorie-floor checks folded over a mutable plan draft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Safety Guardians
//!
//! A guardian inspects a [`PlanDraft`], may adjust it, and may emit an
//! [`Advisory`]. Guardians run in a fixed order and the precedence contract is:
//!
//! 1. [`PaceLimitGuardian`] runs first and may lower the daily adjustment.
//! 2. [`CalorieFloorGuardian`] runs second, sees the pace-limited target, and
//!    may raise the calorie target to the floor.
//! 3. When several guardians fire, the reported message is the one from the
//!    guardian evaluated last. Every guardian that fired is still listed.
//!
//! Guardian outcomes are successful computations with an advisory, never errors.

use nutriplan_core::constants::energy::DAYS_PER_WEEK;
use nutriplan_core::models::{GoalDirection, GoalProfile, GuardianKind};

use crate::config::MacroConfig;

/// Guardians in evaluation order
pub static DEFAULT_GUARDIANS: &[&dyn SafetyGuardian] = &[&PaceLimitGuardian, &CalorieFloorGuardian];

/// Message emitted by a guardian that fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Guardian that produced the advisory
    pub guardian: GuardianKind,
    /// Text shown verbatim to the user
    pub message: String,
}

/// Working state of a dynamic plan while guardians run
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDraft {
    tdee: f64,
    direction: GoalDirection,
    current_weight_kg: f64,
    requested_weekly_change_kg: f64,
    daily_adjustment: f64,
    calorie_override: Option<f64>,
}

impl PlanDraft {
    /// Start a draft from the requested pace
    ///
    /// `adjustment = |current − target| × kcal_per_kg / (weeks × 7)`. A
    /// maintenance goal requests no change regardless of the target weight.
    #[must_use]
    pub fn new(tdee: f64, goal: &GoalProfile, config: &MacroConfig) -> Self {
        let (requested_weekly_change_kg, daily_adjustment) = match goal.direction {
            GoalDirection::Maintenance => (0.0, 0.0),
            GoalDirection::Loss | GoalDirection::Gain => (
                goal.weekly_change_kg(),
                goal.weight_difference_kg() * config.kcal_per_kg_body_weight
                    / (goal.weeks_to_goal * DAYS_PER_WEEK),
            ),
        };

        Self {
            tdee,
            direction: goal.direction,
            current_weight_kg: goal.current_weight_kg,
            requested_weekly_change_kg,
            daily_adjustment,
            calorie_override: None,
        }
    }

    /// Daily deficit or surplus magnitude currently applied (kcal)
    #[must_use]
    pub const fn daily_adjustment(&self) -> f64 {
        self.daily_adjustment
    }

    /// Requested weekly weight change (kg/week)
    #[must_use]
    pub const fn requested_weekly_change_kg(&self) -> f64 {
        self.requested_weekly_change_kg
    }

    /// Calorie target: TDEE moved by the adjustment in the goal's direction,
    /// unless a guardian pinned it
    #[must_use]
    pub fn target_calories(&self) -> f64 {
        self.calorie_override.unwrap_or(match self.direction {
            GoalDirection::Loss => self.tdee - self.daily_adjustment,
            GoalDirection::Maintenance => self.tdee,
            GoalDirection::Gain => self.tdee + self.daily_adjustment,
        })
    }

    /// Body weight the plan is computed for (kg)
    #[must_use]
    pub const fn current_weight_kg(&self) -> f64 {
        self.current_weight_kg
    }
}

/// A single safety check over a plan draft
pub trait SafetyGuardian: Send + Sync {
    /// Identifier reported on the plan when this guardian fires
    fn kind(&self) -> GuardianKind;

    /// Inspect and possibly adjust the draft; `Some` when the guardian fired
    fn check(&self, draft: &mut PlanDraft, config: &MacroConfig) -> Option<Advisory>;
}

/// Caps the weekly weight change at a fraction of current body weight
///
/// When the requested pace exceeds `current_weight × max_weekly_change_fraction`
/// the daily adjustment is re-derived from that ceiling instead of the
/// requested pace.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaceLimitGuardian;

impl PaceLimitGuardian {
    /// Safe weekly change ceiling (kg/week)
    #[must_use]
    pub fn max_weekly_change_kg(current_weight_kg: f64, config: &MacroConfig) -> f64 {
        current_weight_kg * config.max_weekly_change_fraction
    }

    /// Advisory text naming the configured weekly ceiling
    #[must_use]
    pub fn advisory(config: &MacroConfig) -> String {
        let percent = (config.max_weekly_change_fraction * 100.0 * 100.0).round() / 100.0;
        format!(
            "Your goal pace is too aggressive. The plan was adjusted to a safe rate of {percent}% of your body weight per week."
        )
    }
}

impl SafetyGuardian for PaceLimitGuardian {
    fn kind(&self) -> GuardianKind {
        GuardianKind::PaceLimit
    }

    fn check(&self, draft: &mut PlanDraft, config: &MacroConfig) -> Option<Advisory> {
        let ceiling = Self::max_weekly_change_kg(draft.current_weight_kg, config);
        if draft.requested_weekly_change_kg <= ceiling {
            return None;
        }

        draft.daily_adjustment = ceiling * config.kcal_per_kg_body_weight / DAYS_PER_WEEK;
        Some(Advisory {
            guardian: self.kind(),
            message: Self::advisory(config),
        })
    }
}

/// Raises any calorie target below the daily minimum to exactly the minimum
#[derive(Debug, Clone, Copy, Default)]
pub struct CalorieFloorGuardian;

impl CalorieFloorGuardian {
    /// Advisory text naming the configured floor
    #[must_use]
    pub fn advisory(config: &MacroConfig) -> String {
        format!(
            "The calorie target was raised to the {:.0} kcal/day minimum for safety. Consider a longer timeframe for your goal.",
            config.min_daily_calories
        )
    }
}

impl SafetyGuardian for CalorieFloorGuardian {
    fn kind(&self) -> GuardianKind {
        GuardianKind::CalorieFloor
    }

    fn check(&self, draft: &mut PlanDraft, config: &MacroConfig) -> Option<Advisory> {
        if draft.target_calories() >= config.min_daily_calories {
            return None;
        }

        draft.calorie_override = Some(config.min_daily_calories);
        Some(Advisory {
            guardian: self.kind(),
            message: Self::advisory(config),
        })
    }
}

/// Combined result of running a guardian sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardianReport {
    /// Message of the last guardian that fired
    pub advisory_message: Option<String>,
    /// Every guardian that fired, in evaluation order
    pub triggered: Vec<GuardianKind>,
}

impl GuardianReport {
    /// True when no guardian fired
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.triggered.is_empty()
    }
}

/// Run guardians in order; later advisories overwrite earlier ones
pub fn run_guardians(
    draft: &mut PlanDraft,
    guardians: &[&dyn SafetyGuardian],
    config: &MacroConfig,
) -> GuardianReport {
    guardians
        .iter()
        .fold(GuardianReport::default(), |mut report, guardian| {
            if let Some(advisory) = guardian.check(draft, config) {
                report.triggered.push(advisory.guardian);
                report.advisory_message = Some(advisory.message);
            }
            report
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(direction: GoalDirection, current: f64, target: f64, weeks: f64) -> GoalProfile {
        GoalProfile {
            direction,
            current_weight_kg: current,
            target_weight_kg: target,
            weeks_to_goal: weeks,
        }
    }

    #[test]
    fn test_pace_guardian_rederives_adjustment_from_ceiling() {
        let config = MacroConfig::default();
        let mut draft = PlanDraft::new(2600.0, &goal(GoalDirection::Loss, 80.0, 60.0, 4.0), &config);

        let advisory = PaceLimitGuardian.check(&mut draft, &config).unwrap();

        assert_eq!(advisory.guardian, GuardianKind::PaceLimit);
        // 0.8 kg/week × 7700 / 7
        assert!((draft.daily_adjustment() - 880.0).abs() < 1e-9);
        assert!((draft.target_calories() - 1720.0).abs() < 1e-9);
    }

    #[test]
    fn test_pace_below_ceiling_is_safe() {
        let config = MacroConfig::default();
        // 0.75 kg/week against a 0.8 kg/week ceiling
        let mut draft = PlanDraft::new(2600.0, &goal(GoalDirection::Loss, 80.0, 77.0, 4.0), &config);

        assert!(PaceLimitGuardian.check(&mut draft, &config).is_none());
    }

    #[test]
    fn test_floor_pins_target() {
        let config = MacroConfig::default();
        let mut draft = PlanDraft::new(1400.0, &goal(GoalDirection::Loss, 70.0, 68.0, 4.0), &config);

        let advisory = CalorieFloorGuardian.check(&mut draft, &config).unwrap();

        assert_eq!(advisory.message, CalorieFloorGuardian::advisory(&config));
        assert!((draft.target_calories() - 1200.0).abs() < f64::EPSILON);
        // the floor leaves the reported adjustment untouched
        assert!((draft.daily_adjustment() - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_later_guardian_message_wins() {
        let config = MacroConfig::default();
        let mut draft = PlanDraft::new(1500.0, &goal(GoalDirection::Loss, 80.0, 60.0, 4.0), &config);

        let report = run_guardians(&mut draft, DEFAULT_GUARDIANS, &config);

        assert_eq!(
            report.triggered,
            vec![GuardianKind::PaceLimit, GuardianKind::CalorieFloor]
        );
        assert_eq!(
            report.advisory_message,
            Some(CalorieFloorGuardian::advisory(&config))
        );
        assert!(!report.is_safe());
    }

    #[test]
    fn test_reversed_order_changes_reported_message() {
        let config = MacroConfig::default();
        let mut draft = PlanDraft::new(1500.0, &goal(GoalDirection::Loss, 80.0, 60.0, 4.0), &config);
        let reversed: [&dyn SafetyGuardian; 2] = [&CalorieFloorGuardian, &PaceLimitGuardian];

        let report = run_guardians(&mut draft, &reversed, &config);

        assert_eq!(report.advisory_message, Some(PaceLimitGuardian::advisory(&config)));
    }

    #[test]
    fn test_default_advisories_name_published_limits() {
        let config = MacroConfig::default();

        assert_eq!(
            PaceLimitGuardian::advisory(&config),
            "Your goal pace is too aggressive. The plan was adjusted to a safe rate of 1% of your body weight per week."
        );
        assert_eq!(
            CalorieFloorGuardian::advisory(&config),
            "The calorie target was raised to the 1200 kcal/day minimum for safety. Consider a longer timeframe for your goal."
        );
    }

    #[test]
    fn test_advisories_follow_configured_limits() {
        let config = MacroConfig {
            min_daily_calories: 1500.0,
            max_weekly_change_fraction: 0.0075,
            ..MacroConfig::default()
        };

        assert!(PaceLimitGuardian::advisory(&config).contains("0.75% of your body weight"));
        assert!(CalorieFloorGuardian::advisory(&config).contains("1500 kcal/day minimum"));
    }

    #[test]
    fn test_maintenance_requests_no_change() {
        let config = MacroConfig::default();
        let mut draft = PlanDraft::new(2400.0, &goal(GoalDirection::Maintenance, 80.0, 60.0, 1.0), &config);

        let report = run_guardians(&mut draft, DEFAULT_GUARDIANS, &config);

        assert!(report.is_safe());
        assert!(draft.daily_adjustment().abs() < f64::EPSILON);
        assert!((draft.target_calories() - 2400.0).abs() < f64::EPSILON);
    }
}
