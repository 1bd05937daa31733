// ABOUTME: nutriplan CLI - command-line front end for the nutrition calculator
// ABOUTME: One-shot planning from flags, a persisted step-wise intake wizard and batch planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # One-shot plan with a weight-loss target
//! nutriplan-cli plan --sex female --age 30 --height 165 --weight 68 \
//!     --occupation light --steps 8000 --sessions 3 --duration 45 --intensity moderate \
//!     --direction loss --target-weight 62 --weeks 12
//!
//! # Step-wise intake, persisted between invocations
//! nutriplan-cli intake basic --name Ana --sex female --age 30 --height 165 --weight 68
//! nutriplan-cli intake activity --occupation light --steps 8000
//! nutriplan-cli intake goal --direction maintenance
//! nutriplan-cli intake finish --json
//!
//! # Many answer sets at once
//! nutriplan-cli batch --input answers.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use nutriplan::config::IntelligenceConfig;
use nutriplan::constants::service_names;
use nutriplan::errors::AppResult;
use nutriplan::intake::OnboardingStore;
use nutriplan::logging::LoggingConfig;
use tracing::{debug, error};

use commands::{ActivityArgs, BasicArgs, GoalArgs};

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    version,
    about = "Daily calorie and macronutrient planner",
    long_about = "Estimates BMR, activity level and daily energy expenditure, then plans calories and macronutrients for a weight goal with safety limits."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Onboarding state file (defaults to NUTRIPLAN_STATE_PATH or the user data directory)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a plan from command-line answers
    Plan {
        #[command(flatten)]
        basic: BasicArgs,

        #[command(flatten)]
        activity: ActivityArgs,

        #[command(flatten)]
        goal: GoalArgs,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Step-wise onboarding wizard
    Intake {
        #[command(subcommand)]
        action: IntakeCommand,
    },

    /// Compute plans for a JSON array of answer sets
    Batch {
        /// File containing a JSON array of intake answers
        #[arg(long, short = 'i')]
        input: PathBuf,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum IntakeCommand {
    /// Show the current step and answers
    Show {
        /// Print the state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer the personal data step
    Basic(BasicArgs),

    /// Answer the activity step
    Activity(ActivityArgs),

    /// Answer the goal step
    Goal(GoalArgs),

    /// Go back one step
    Back,

    /// Compute the plan from the stored answers
    Finish {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Discard the stored answers
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    logging.service_name = service_names::NUTRIPLAN_CLI.into();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{}", e);
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = &IntelligenceConfig::global().nutrition;
    let store = cli
        .state
        .map_or_else(OnboardingStore::from_env, OnboardingStore::new);
    debug!(state = %store.path().display(), "nutriplan-cli starting");

    match cli.command {
        Command::Plan {
            basic,
            activity,
            goal,
            json,
        } => commands::plan::run(basic, activity, goal, config, json),
        Command::Intake { action } => match action {
            IntakeCommand::Show { json } => commands::intake::show(&store, json),
            IntakeCommand::Basic(args) => commands::intake::basic(&store, args),
            IntakeCommand::Activity(args) => commands::intake::activity(&store, args),
            IntakeCommand::Goal(args) => commands::intake::goal(&store, args),
            IntakeCommand::Back => commands::intake::back(&store),
            IntakeCommand::Finish { json } => commands::intake::finish(&store, config, json),
            IntakeCommand::Reset => commands::intake::reset(&store),
        },
        Command::Batch { input } => commands::batch::run(&input, config),
    }
}
