// ABOUTME: Re-exports helper modules for fitcoach-cli
// ABOUTME: Shared command context and output helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod context;
pub mod display;
