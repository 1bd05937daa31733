// ABOUTME: Step-wise onboarding wizard state and its JSON file persistence
// ABOUTME: Tracks the current step, merges partial answers and survives between CLI invocations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use nutriplan_core::constants::{service_names, storage};
use nutriplan_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::answers::{IntakeAnswers, IntakeProfiles};
use crate::logging::AppLogger;

/// Wizard steps in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Name, sex, age, height and weight
    Basic,
    /// Occupation, steps and training
    Activity,
    /// Direction, target and timeframe
    Goal,
    /// Review and plan
    Summary,
}

impl OnboardingStep {
    /// Following step; the summary is terminal
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Basic => Self::Activity,
            Self::Activity => Self::Goal,
            Self::Goal | Self::Summary => Self::Summary,
        }
    }

    /// Preceding step; the first step is terminal
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Basic | Self::Activity => Self::Basic,
            Self::Goal => Self::Activity,
            Self::Summary => Self::Goal,
        }
    }

    /// One-based position shown in the step indicator
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Activity => 2,
            Self::Goal => 3,
            Self::Summary => 4,
        }
    }

    /// Stable label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Activity => "activity",
            Self::Goal => "goal",
            Self::Summary => "summary",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted wizard progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingState {
    /// Identifier of this onboarding run, regenerated on reset
    pub session_id: Uuid,
    /// Current step
    pub step: OnboardingStep,
    /// Answers collected so far
    pub answers: IntakeAnswers,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingState {
    /// Fresh state on the first step
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            step: OnboardingStep::Basic,
            answers: IntakeAnswers::default(),
            updated_at: Utc::now(),
        }
    }

    /// Jump to a step
    pub fn set_step(&mut self, step: OnboardingStep) {
        self.step = step;
        self.touch();
    }

    /// Move forward one step
    pub fn advance(&mut self) {
        self.set_step(self.step.next());
    }

    /// Move back one step
    pub fn back(&mut self) {
        self.set_step(self.step.previous());
    }

    /// Shallow merge: sections present in `update` replace stored ones,
    /// absent sections are kept
    pub fn merge_answers(&mut self, update: IntakeAnswers) {
        if let Some(basic) = update.basic {
            self.answers.basic = Some(basic);
        }
        if let Some(activity) = update.activity {
            self.answers.activity = Some(activity);
        }
        if let Some(goal) = update.goal {
            self.answers.goal = Some(goal);
        }
        self.touch();
    }

    /// True when every section has been answered
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.answers.is_complete()
    }

    /// Validated profiles for the pipeline
    ///
    /// # Errors
    ///
    /// Returns the first missing section or invalid answer
    pub fn to_profiles(&self) -> AppResult<IntakeProfiles> {
        self.answers.to_profiles()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// JSON file holding a single [`OnboardingState`]
#[derive(Debug, Clone)]
pub struct OnboardingStore {
    path: PathBuf,
}

impl OnboardingStore {
    /// Store backed by an explicit file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `NUTRIPLAN_STATE_PATH`, or the platform data directory
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Self::default_path())
    }

    /// Resolve the default state file location
    #[must_use]
    pub fn default_path() -> PathBuf {
        env::var(storage::ONBOARDING_STATE_ENV).map_or_else(
            |_| {
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(service_names::NUTRIPLAN)
                    .join(storage::ONBOARDING_STATE_FILE)
            },
            PathBuf::from,
        )
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored state, or a fresh one when nothing is stored yet
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be read and
    /// `SerializationError` when it is not a valid state document
    pub fn load_or_default(&self) -> AppResult<OnboardingState> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let state = serde_json::from_str(&contents)?;
                debug!(path = %self.path.display(), "Onboarding state loaded");
                Ok(state)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(OnboardingState::new()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read onboarding state from {}",
                self.path.display()
            ))
            .with_source(e)),
        }
    }

    /// Write the state, creating parent directories as needed
    ///
    /// The document is written to a sibling temporary file and renamed over
    /// the target, so an interrupted save leaves the previous state intact.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be written
    pub fn save(&self, state: &OnboardingState) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(state)?;
        let staging = self.staging_path();
        fs::write(&staging, contents)
            .and_then(|()| fs::rename(&staging, &self.path))
            .map_err(|e| {
                // the write error is reported, not the cleanup
                let _ = fs::remove_file(&staging);
                AppError::storage(format!(
                    "Failed to write onboarding state to {}",
                    self.path.display()
                ))
                .with_source(e)
            })?;

        AppLogger::log_state_saved(&self.path, state.step);
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map_or_else(
            || OsString::from(storage::ONBOARDING_STATE_FILE),
            OsString::from,
        );
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Remove the stored state; a missing file is not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file exists but cannot be removed
    pub fn reset(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::answers::{BasicAnswers, GoalAnswers};
    use nutriplan_core::models::{GoalDirection, Sex};

    #[test]
    fn test_step_navigation_saturates() {
        let mut state = OnboardingState::new();
        state.back();
        assert_eq!(state.step, OnboardingStep::Basic);

        for _ in 0..10 {
            state.advance();
        }
        assert_eq!(state.step, OnboardingStep::Summary);
        assert_eq!(state.step.number(), 4);
    }

    #[test]
    fn test_merge_keeps_absent_sections() {
        let mut state = OnboardingState::new();
        state.merge_answers(IntakeAnswers {
            basic: Some(BasicAnswers {
                name: "Luis".into(),
                sex: Sex::Male,
                age: 35.0,
                height_cm: 180.0,
                weight_kg: 85.0,
            }),
            ..IntakeAnswers::default()
        });
        state.merge_answers(IntakeAnswers {
            goal: Some(GoalAnswers {
                direction: GoalDirection::Maintenance,
                target_weight_kg: None,
                weeks_to_goal: None,
            }),
            ..IntakeAnswers::default()
        });

        assert!(state.answers.basic.is_some());
        assert!(state.answers.goal.is_some());
        assert!(!state.is_complete());
    }
}
