// ABOUTME: Health command for fitcoach-cli
// ABOUTME: Requests permissions and reads today's active and basal energy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use fitcoach_client::health::{
    HealthDataSource, HealthOutcome, StaticHealthSource, UnavailableHealthSource,
};

use crate::helpers::context::CliContext;
use crate::helpers::display::print_output;

/// Without readings on the command line the host has no health service
pub async fn run(
    ctx: &CliContext,
    active_kcal: Option<f64>,
    basal_kcal: Option<f64>,
) -> Result<ExitCode> {
    let source: Arc<dyn HealthDataSource> = if active_kcal.is_some() || basal_kcal.is_some() {
        Arc::new(StaticHealthSource {
            active_kcal,
            basal_kcal,
        })
    } else {
        Arc::new(UnavailableHealthSource)
    };
    let bridge = ctx.health(source);

    if let HealthOutcome::Unavailable { reason, .. } = bridge.request_permissions().await {
        eprintln!("Health access unavailable: {reason}");
    }
    print_output(&bridge.today_energy().await, ctx.format)?;
    Ok(ExitCode::SUCCESS)
}
