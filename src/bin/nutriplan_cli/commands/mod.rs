// ABOUTME: Command implementations and shared answer arguments for nutriplan-cli
// ABOUTME: Clap argument groups for each intake section and their conversion to answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod batch;
pub mod intake;
pub mod plan;

use clap::Args;
use nutriplan::intake::{ActivityAnswers, BasicAnswers, GoalAnswers};
use nutriplan::models::{GoalDirection, Intensity, Occupation, Sex};

/// Personal data
#[derive(Args, Debug, Clone)]
pub struct BasicArgs {
    /// Display name
    #[arg(long, default_value = "Guest")]
    pub name: String,

    /// Biological sex (male, female)
    #[arg(long)]
    pub sex: Sex,

    /// Age in years
    #[arg(long)]
    pub age: f64,

    /// Height in centimetres
    #[arg(long)]
    pub height: f64,

    /// Body weight in kilograms
    #[arg(long)]
    pub weight: f64,
}

impl From<BasicArgs> for BasicAnswers {
    fn from(args: BasicArgs) -> Self {
        Self {
            name: args.name,
            sex: args.sex,
            age: args.age,
            height_cm: args.height,
            weight_kg: args.weight,
        }
    }
}

/// Occupation, steps and training
#[derive(Args, Debug, Clone)]
pub struct ActivityArgs {
    /// Job activity (sedentary, light, moderate, heavy)
    #[arg(long, default_value = "sedentary")]
    pub occupation: Occupation,

    /// Average daily steps
    #[arg(long, default_value_t = 0.0)]
    pub steps: f64,

    /// Training sessions per week; 0 means no structured training
    #[arg(long, default_value_t = 0.0)]
    pub sessions: f64,

    /// Minutes per training session
    #[arg(long, default_value_t = 0.0)]
    pub duration: f64,

    /// Training intensity (low, moderate, high)
    #[arg(long, default_value = "moderate")]
    pub intensity: Intensity,
}

impl From<ActivityArgs> for ActivityAnswers {
    fn from(args: ActivityArgs) -> Self {
        Self {
            occupation: args.occupation,
            daily_steps: args.steps,
            has_activity: args.sessions > 0.0,
            training_sessions_per_week: args.sessions,
            session_duration_minutes: args.duration,
            intensity: args.intensity,
        }
    }
}

/// Weight goal; target and weeks together select goal-driven planning
#[derive(Args, Debug, Clone)]
pub struct GoalArgs {
    /// Goal direction (loss, maintenance, gain)
    #[arg(long, default_value = "maintenance")]
    pub direction: GoalDirection,

    /// Target body weight in kilograms
    #[arg(long, requires = "weeks")]
    pub target_weight: Option<f64>,

    /// Weeks to reach the target weight
    #[arg(long, requires = "target_weight")]
    pub weeks: Option<f64>,
}

impl From<GoalArgs> for GoalAnswers {
    fn from(args: GoalArgs) -> Self {
        Self {
            direction: args.direction,
            target_weight_kg: args.target_weight,
            weeks_to_goal: args.weeks,
        }
    }
}
