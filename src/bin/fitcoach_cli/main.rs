// ABOUTME: FitCoach CLI - command-line front end for the coaching client
// ABOUTME: Runs the intake flow, shows plan screens, reads health data, and manages the stored identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Submit a profile and generate this week's plan
//! fitcoach-cli intake --age 31 --height-cm 178 --weight-kg 80 \
//!     --sex Male --activity Moderate --goal "Build Muscle" \
//!     --diet nonveg --protein salmon
//!
//! # Plan screens
//! fitcoach-cli today
//! fitcoach-cli today --day fri
//! fitcoach-cli meals
//! fitcoach-cli workouts
//! fitcoach-cli grocery --export groceries.txt
//!
//! # JSON instead of text
//! fitcoach-cli --format json today
//!
//! # Client-side preview plan, no backend involved
//! fitcoach-cli preview --goal "Lose Fat" --weight 72 --activity Intense
//!
//! # Stored identity
//! fitcoach-cli identity show
//! fitcoach-cli identity clear
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitcoach_client::formatters::OutputFormat;
use fitcoach_client::logging::LoggingConfig;
use fitcoach_client::models::Weekday;
use tracing::debug;

use helpers::context::CliContext;

#[derive(Parser)]
#[command(
    name = "fitcoach-cli",
    about = "FitCoach client CLI",
    long_about = "Command-line front end for the FitCoach client: profile intake, plan screens, health data, and identity."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override (defaults to the platform address)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory holding the local key-value store
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, global = true, default_value = "text", value_parser = parse_format)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Submit demographics and food preferences, then show today's plan
    Intake(commands::intake::IntakeArgs),

    /// Today's plan
    Today {
        /// Day to show instead of the local weekday (mon..sun)
        #[arg(long, value_parser = parse_weekday)]
        day: Option<Weekday>,
    },

    /// Seven-day meal plan
    Meals,

    /// Seven-day workout plan
    Workouts,

    /// Grocery list
    Grocery {
        /// Write the shareable list to this file instead of stdout
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Profile stored on the backend
    Profile,

    /// Request health permissions and read today's energy
    Health {
        /// Active kilocalories reported by the simulated health service
        #[arg(long)]
        active_kcal: Option<f64>,

        /// Basal kilocalories reported by the simulated health service
        #[arg(long)]
        basal_kcal: Option<f64>,
    },

    /// Client-side preview plan computed without the backend
    Preview {
        /// Goal label or code
        #[arg(long)]
        goal: String,

        /// Body weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Activity label or code
        #[arg(long, default_value = "")]
        activity: String,
    },

    /// Stored identity management
    Identity {
        #[command(subcommand)]
        action: IdentityCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum IdentityCommand {
    /// Print the stored user id
    Show,
    /// Forget the stored user id
    Clear,
}

fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    match raw.to_ascii_lowercase().as_str() {
        "text" | "json" => Ok(OutputFormat::from_str_param(raw)),
        other => Err(format!("unknown format '{other}', expected text or json")),
    }
}

fn parse_weekday(raw: &str) -> Result<Weekday, String> {
    Weekday::from_code(&raw.trim().to_ascii_lowercase())
        .ok_or_else(|| format!("unknown day '{raw}', expected one of mon..sun"))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let ctx = CliContext::build(cli.base_url.as_deref(), cli.data_dir.as_deref(), cli.format)?;
    debug!(config = %ctx.config.summary(), "CLI context ready");

    match cli.command {
        Command::Intake(args) => commands::intake::run(&ctx, &args).await,
        Command::Today { day } => {
            commands::plan::today(&ctx, day.unwrap_or_else(Weekday::today_local)).await
        }
        Command::Meals => commands::plan::meals(&ctx).await,
        Command::Workouts => commands::plan::workouts(&ctx).await,
        Command::Grocery { export } => commands::plan::grocery(&ctx, export).await,
        Command::Profile => commands::plan::profile(&ctx).await,
        Command::Health {
            active_kcal,
            basal_kcal,
        } => commands::health::run(&ctx, active_kcal, basal_kcal).await,
        Command::Preview {
            goal,
            weight,
            activity,
        } => commands::plan::preview(&ctx, goal, weight, activity),
        Command::Identity { action } => match action {
            IdentityCommand::Show => commands::identity::show(&ctx).await,
            IdentityCommand::Clear => commands::identity::clear(&ctx).await,
        },
    }
}
