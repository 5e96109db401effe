// ABOUTME: Identity commands for fitcoach-cli
// ABOUTME: Shows or clears the locally stored user id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::process::ExitCode;

use anyhow::Result;
use fitcoach_client::formatters::OutputFormat;
use serde_json::json;

use crate::helpers::context::CliContext;

pub async fn show(ctx: &CliContext) -> Result<ExitCode> {
    let user_id = ctx.identity.load().await?;
    match ctx.format {
        OutputFormat::Json => println!("{}", json!({ "userId": user_id })),
        OutputFormat::Text => match &user_id {
            Some(id) => println!("{id}"),
            None => println!("No stored user id"),
        },
    }
    Ok(if user_id.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

pub async fn clear(ctx: &CliContext) -> Result<ExitCode> {
    ctx.identity.clear().await?;
    println!("Stored user id cleared");
    Ok(ExitCode::SUCCESS)
}
