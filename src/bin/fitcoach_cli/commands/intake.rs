// ABOUTME: Intake command for fitcoach-cli
// ABOUTME: Builds the demographics and food preference steps from flags, submits, then shows today's plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::builder::PossibleValuesParser;
use clap::Args;
use fitcoach_client::constants::messages;
use fitcoach_client::health::UnavailableHealthSource;
use fitcoach_client::intake::labels::{ACTIVITY_OPTIONS, GOAL_OPTIONS, SEX_OPTIONS};
use fitcoach_client::intake::{DemographicsForm, FoodPreferences, PlanSubmitter};
use fitcoach_client::models::{DietType, Weekday};
use tracing::{info, warn};

use crate::helpers::context::CliContext;
use crate::helpers::display::{print_output, print_screen};

#[derive(Args)]
pub struct IntakeArgs {
    /// Age in years
    #[arg(long, default_value = "")]
    age: String,

    /// Height in centimetres
    #[arg(long, default_value = "")]
    height_cm: String,

    /// Weight in kilograms
    #[arg(long, default_value = "")]
    weight_kg: String,

    /// Sex label
    #[arg(long, value_parser = PossibleValuesParser::new(SEX_OPTIONS))]
    sex: Option<String>,

    /// Activity label
    #[arg(long, value_parser = PossibleValuesParser::new(ACTIVITY_OPTIONS))]
    activity: Option<String>,

    /// Goal option
    #[arg(long, value_parser = PossibleValuesParser::new(GOAL_OPTIONS))]
    goal: Option<String>,

    /// Diet type: veg or nonveg
    #[arg(long, default_value = "nonveg")]
    diet: String,

    /// Favourite protein; defaults to the diet's first choice
    #[arg(long)]
    protein: Option<String>,
}

impl IntakeArgs {
    fn preferences(&self) -> Result<FoodPreferences> {
        let diet = DietType::from_str_lossy(&self.diet)
            .ok_or_else(|| anyhow!("Unknown diet '{}', expected veg or nonveg", self.diet))?;
        let mut preferences = FoodPreferences::for_diet(diet);
        if let Some(protein) = &self.protein {
            if !preferences.select_protein(protein) {
                warn!(
                    protein = %protein,
                    choices = ?FoodPreferences::protein_choices(diet),
                    "Protein is not one of the offered choices"
                );
            }
        }
        Ok(preferences)
    }

    fn demographics(&self) -> DemographicsForm {
        DemographicsForm {
            age: self.age.clone(),
            height_cm: self.height_cm.clone(),
            weight_kg: self.weight_kg.clone(),
            sex: self.sex.clone(),
            activity: self.activity.clone(),
            goal: self.goal.clone(),
        }
    }
}

/// Submit the intake and render today's plan
pub async fn run(ctx: &CliContext, args: &IntakeArgs) -> Result<ExitCode> {
    let handoff = args.demographics().handoff();
    let preferences = args.preferences()?;
    info!(goal = %handoff.goal, diet = preferences.diet_type.as_code(), "Submitting intake");

    let submitter = PlanSubmitter::new(
        Arc::clone(&ctx.gateway),
        ctx.identity.clone(),
        ctx.health(Arc::new(UnavailableHealthSource)),
    );
    let receipt = match submitter.submit(&handoff, &preferences).await {
        Ok(receipt) => receipt,
        Err(error) => {
            eprintln!("{}", error.user_message(messages::SUBMIT_FAILED));
            return Ok(ExitCode::FAILURE);
        }
    };
    print_output(&receipt, ctx.format)?;

    let today = ctx.screens().today(Weekday::today_local()).await;
    print_screen(&today, ctx.format)
}
