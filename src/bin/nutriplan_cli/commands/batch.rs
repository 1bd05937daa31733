// ABOUTME: Batch planning command for nutriplan-cli
// ABOUTME: Reads a JSON array of answer sets and prints one ok/error entry per set, in input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use nutriplan::config::NutritionConfig;
use nutriplan::errors::{AppError, AppResult};
use nutriplan::intake::IntakeAnswers;
use nutriplan::intelligence::plan_answer_batch;

use crate::helpers::display::print_json;

/// Read a JSON array of answer sets and print one entry per set
pub fn run(input: &Path, config: &NutritionConfig) -> AppResult<()> {
    let contents = fs::read_to_string(input).map_err(|e| {
        AppError::storage(format!("Failed to read {}", input.display())).with_source(e)
    })?;
    let answers: Vec<IntakeAnswers> = serde_json::from_str(&contents)?;

    print_json(&plan_answer_batch(&answers, config))
}
