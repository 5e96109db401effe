// ABOUTME: Shared test fixtures for FitCoach client integration tests
// ABOUTME: Recording in-memory backend gateway and identity/plan helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use fitcoach_client::errors::{AppError, AppResult};
use fitcoach_client::external::BackendGateway;
use fitcoach_client::health::{HealthBridge, StaticHealthSource, UnavailableHealthSource};
use fitcoach_client::models::{
    Plan, ProfileSetupRequest, SignupRequest, StoredProfile, UserId,
};
use fitcoach_client::storage::{IdentityStore, MemoryKeyValueStore};
use serde_json::Value;

/// Gateway call, in order of arrival
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Signup(String),
    SetupProfile(ProfileSetupRequest),
    GenerateWeek(String),
    CurrentPlan(String),
    FetchProfile(String),
}

/// In-memory gateway that records calls and answers from fixed settings
#[derive(Default)]
pub struct RecordingGateway {
    pub calls: Mutex<Vec<Call>>,
    pub signup_id: Option<String>,
    pub plan: Option<Value>,
    pub fail_setup: Option<AppError>,
    pub fail_generate: Option<AppError>,
    pub fail_plan: Option<AppError>,
    pub delay: Option<Duration>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            signup_id: Some("42".into()),
            ..Self::default()
        }
    }

    pub fn with_plan(plan: Value) -> Self {
        Self {
            plan: Some(plan),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn signup_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Signup(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn take_error(slot: Option<&AppError>) -> AppResult<()> {
        match slot {
            Some(error) => Err(AppError::new(error.code, error.message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BackendGateway for RecordingGateway {
    async fn signup(&self, request: &SignupRequest) -> AppResult<UserId> {
        self.record(Call::Signup(request.email.clone()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.signup_id
            .as_deref()
            .and_then(UserId::parse)
            .ok_or_else(|| AppError::invalid_response("userId", "expected a non-empty identifier"))
    }

    async fn setup_profile(&self, request: &ProfileSetupRequest) -> AppResult<()> {
        self.record(Call::SetupProfile(request.clone()));
        Self::take_error(self.fail_setup.as_ref())
    }

    async fn generate_week(&self, user_id: &UserId) -> AppResult<()> {
        self.record(Call::GenerateWeek(user_id.to_string()));
        Self::take_error(self.fail_generate.as_ref())
    }

    async fn current_plan(&self, user_id: &UserId) -> AppResult<Plan> {
        self.record(Call::CurrentPlan(user_id.to_string()));
        Self::take_error(self.fail_plan.as_ref())?;
        Ok(self
            .plan
            .as_ref()
            .map(|body| Plan::from_json(body).into_value())
            .unwrap_or_default())
    }

    async fn fetch_profile(&self, user_id: &UserId) -> AppResult<StoredProfile> {
        self.record(Call::FetchProfile(user_id.to_string()));
        Ok(StoredProfile {
            user_id: Some(user_id.to_string()),
            ..StoredProfile::default()
        })
    }
}

/// Identity store over memory, optionally pre-seeded
pub fn identity_with(user_id: Option<&str>) -> IdentityStore {
    let store = user_id.map_or_else(MemoryKeyValueStore::new, |id| {
        MemoryKeyValueStore::with_values([("userId", id)])
    });
    IdentityStore::new(Arc::new(store))
}

/// Health bridge that grants permissions
pub fn granted_health() -> HealthBridge {
    HealthBridge::new(
        Arc::new(StaticHealthSource {
            active_kcal: Some(300.0),
            basal_kcal: Some(1500.0),
        }),
        Duration::from_secs(1),
    )
}

/// Health bridge without a platform service
pub fn unavailable_health() -> HealthBridge {
    HealthBridge::new(Arc::new(UnavailableHealthSource), Duration::from_secs(1))
}
