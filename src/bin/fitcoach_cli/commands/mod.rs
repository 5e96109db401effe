// ABOUTME: Re-exports command modules for fitcoach-cli
// ABOUTME: Intake, plan screens, health, and identity commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod health;
pub mod identity;
pub mod intake;
pub mod plan;
