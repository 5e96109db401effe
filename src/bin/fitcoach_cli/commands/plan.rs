// ABOUTME: Plan screen commands for fitcoach-cli
// ABOUTME: Today, weekly meals, weekly workouts, grocery export, backend profile, and static preview
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use fitcoach_client::formatters::OutputFormat;
use fitcoach_client::intelligence::{generate_plan_for_goal, StaticPlanInput};
use fitcoach_client::models::Weekday;
use fitcoach_client::view_models::ScreenState;
use tracing::info;

use crate::helpers::context::CliContext;
use crate::helpers::display::{print_output, print_screen, FileShare, StdoutShare};

pub async fn today(ctx: &CliContext, weekday: Weekday) -> Result<ExitCode> {
    print_screen(&ctx.screens().today(weekday).await, ctx.format)
}

pub async fn meals(ctx: &CliContext) -> Result<ExitCode> {
    print_screen(&ctx.screens().week_meals().await, ctx.format)
}

pub async fn workouts(ctx: &CliContext) -> Result<ExitCode> {
    print_screen(&ctx.screens().week_workouts().await, ctx.format)
}

/// Show the grocery list; with `--export` (or text output) the share text is delivered too
pub async fn grocery(ctx: &CliContext, export: Option<PathBuf>) -> Result<ExitCode> {
    let screen = ctx.screens().grocery_list().await;
    let ScreenState::Ready(view) = &screen else {
        return print_screen(&screen, ctx.format);
    };

    match (export, ctx.format) {
        (Some(path), _) => {
            view.share(&FileShare(path.clone())).await?;
            info!(path = %path.display(), "Grocery list exported");
            println!("Grocery list written to {}", path.display());
        }
        (None, OutputFormat::Text) => view.share(&StdoutShare).await?,
        (None, OutputFormat::Json) => print_output(&screen, ctx.format)?,
    }
    Ok(ExitCode::SUCCESS)
}

pub async fn profile(ctx: &CliContext) -> Result<ExitCode> {
    let user_id = ctx.identity.require().await?;
    let profile = ctx.gateway.fetch_profile(&user_id).await?;
    print_output(&profile, ctx.format)?;
    Ok(ExitCode::SUCCESS)
}

pub fn preview(
    ctx: &CliContext,
    goal: String,
    weight_kg: Option<f64>,
    activity: String,
) -> Result<ExitCode> {
    let plan = generate_plan_for_goal(&StaticPlanInput {
        goal,
        weight_kg,
        activity,
    });
    print_output(&plan, ctx.format)?;
    Ok(ExitCode::SUCCESS)
}
