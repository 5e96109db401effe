// ABOUTME: Output helpers for fitcoach-cli
// ABOUTME: Prints views in the selected format and implements the stdout and file share targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use async_trait::async_trait;
use fitcoach_client::errors::AppResult;
use fitcoach_client::formatters::{format_output, OutputFormat, RenderText};
use fitcoach_client::view_models::{ScreenState, ShareTarget};
use serde::Serialize;
use tokio::io::AsyncWriteExt;

/// Print `data` to stdout
pub fn print_output<T: Serialize + RenderText>(data: &T, format: OutputFormat) -> Result<()> {
    println!("{}", format_output(data, format)?);
    Ok(())
}

/// Print a screen; a failed load exits non-zero
pub fn print_screen<T: Serialize + RenderText>(
    screen: &ScreenState<T>,
    format: OutputFormat,
) -> Result<ExitCode> {
    print_output(screen, format)?;
    Ok(if screen.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Shares text by writing it to stdout
pub struct StdoutShare;

#[async_trait]
impl ShareTarget for StdoutShare {
    async fn share(&self, text: &str) -> AppResult<()> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(text.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

/// Shares text by writing it to a file
pub struct FileShare(pub PathBuf);

#[async_trait]
impl ShareTarget for FileShare {
    async fn share(&self, text: &str) -> AppResult<()> {
        tokio::fs::write(&self.0, text).await?;
        Ok(())
    }
}
