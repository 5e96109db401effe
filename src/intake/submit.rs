// ABOUTME: Plan submission flow from completed intake to a generated weekly plan
// ABOUTME: Health permissions, identity resolution, profile setup, and plan generation with a re-entry guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Submit orchestration
//!
//! Steps, in order:
//! 1. request health permissions (never fatal)
//! 2. reuse the persisted user id, or sign up with a placeholder identity and persist it
//! 3. send the normalized profile
//! 4. ask the backend to generate the week
//!
//! A failure in steps 2-4 aborts the run. An id persisted in step 2 stays
//! persisted, so the next attempt skips signup.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::forms::{FoodPreferences, IntakeHandoff};
use crate::constants::signup;
use crate::errors::{AppError, AppResult};
use crate::external::BackendGateway;
use crate::health::HealthBridge;
use crate::models::{SignupRequest, UserId};
use crate::storage::IdentityStore;

/// Outcome of a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReceipt {
    /// User the plan was generated for
    pub user_id: UserId,
    /// Whether this run created the account
    pub signed_up: bool,
    /// Whether health permissions were granted
    pub health_authorized: bool,
}

/// Runs the submit flow; at most one run at a time per submitter
pub struct PlanSubmitter {
    gateway: Arc<dyn BackendGateway>,
    identity: IdentityStore,
    health: HealthBridge,
    submitting: AtomicBool,
}

/// Clears the submitting flag when dropped
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> AppResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::submission_in_progress())?;
        Ok(Self(flag))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl PlanSubmitter {
    /// Create a submitter
    #[must_use]
    pub fn new(
        gateway: Arc<dyn BackendGateway>,
        identity: IdentityStore,
        health: HealthBridge,
    ) -> Self {
        Self {
            gateway,
            identity,
            health,
            submitting: AtomicBool::new(false),
        }
    }

    /// Whether a submission is running
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Run the full flow
    ///
    /// # Errors
    ///
    /// Returns `SubmissionInProgress` if another run is active, otherwise the
    /// first storage or backend error encountered
    pub async fn submit(
        &self,
        handoff: &IntakeHandoff,
        preferences: &FoodPreferences,
    ) -> AppResult<SubmitReceipt> {
        let _guard = SubmittingGuard::acquire(&self.submitting)?;
        info!("Plan submission started");

        let health_authorized = self.health.request_permissions().await.is_available();

        let result = self.run(handoff, preferences).await;
        match &result {
            Ok((user_id, _)) => info!(user_id = %user_id, "Plan submission finished"),
            Err(e) => warn!(code = ?e.code, error = %e.message, "Plan submission failed"),
        }
        let (user_id, signed_up) = result?;

        Ok(SubmitReceipt {
            user_id,
            signed_up,
            health_authorized,
        })
    }

    async fn run(
        &self,
        handoff: &IntakeHandoff,
        preferences: &FoodPreferences,
    ) -> AppResult<(UserId, bool)> {
        let (user_id, signed_up) = self.resolve_identity().await?;

        let request = handoff.to_profile_request(&user_id, preferences);
        self.gateway.setup_profile(&request).await?;
        info!(user_id = %user_id, "Profile stored");

        self.gateway.generate_week(&user_id).await?;
        info!(user_id = %user_id, "Weekly plan generated");

        Ok((user_id, signed_up))
    }

    async fn resolve_identity(&self) -> AppResult<(UserId, bool)> {
        if let Some(existing) = self.identity.load().await? {
            info!(user_id = %existing, "Reusing stored identity");
            return Ok((existing, false));
        }

        let user_id = self.gateway.signup(&placeholder_signup()).await?;
        self.identity.save(&user_id).await?;
        info!(user_id = %user_id, "Signed up new account");
        Ok((user_id, true))
    }
}

impl std::fmt::Debug for PlanSubmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlanSubmitter")
            .field("submitting", &self.is_submitting())
            .finish_non_exhaustive()
    }
}

/// Signup payload used until the app has a real account form
#[must_use]
pub fn placeholder_signup() -> SignupRequest {
    SignupRequest {
        first_name: signup::FIRST_NAME.to_owned(),
        last_name: signup::LAST_NAME.to_owned(),
        email: format!(
            "user{}@{}",
            Utc::now().timestamp_millis(),
            signup::EMAIL_DOMAIN
        ),
        password: signup::PASSWORD.to_owned(),
    }
}
