// ABOUTME: Platform health-data bridge for energy expenditure metrics
// ABOUTME: Timeout-bounded permission requests and reads with an explicit non-fatal result type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Data Bridge
//!
//! Health data is an optional enhancement: nothing in the plan depends on it.
//! The platform service is abstracted as a [`HealthDataSource`]; the
//! [`HealthBridge`] bounds every call with a timeout and turns failures into
//! [`HealthOutcome::Unavailable`] values that are logged and never propagated.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult, ErrorCode};

/// Health data types the client can ask access to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HealthPermission {
    /// Active energy burned
    ActiveEnergyBurned,
    /// Basal energy burned
    BasalEnergyBurned,
    /// Step count
    Steps,
    /// Heart rate samples
    HeartRate,
    /// Workout sessions
    Workout,
}

impl HealthPermission {
    /// Platform identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActiveEnergyBurned => "ActiveEnergyBurned",
            Self::BasalEnergyBurned => "BasalEnergyBurned",
            Self::Steps => "Steps",
            Self::HeartRate => "HeartRate",
            Self::Workout => "Workout",
        }
    }
}

impl fmt::Display for HealthPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative capability list passed to the platform service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HealthPermissions {
    /// Types to read
    pub read: Vec<HealthPermission>,
    /// Types to write
    pub write: Vec<HealthPermission>,
}

impl HealthPermissions {
    /// Read energy, steps, heart rate and workouts; write nothing
    #[must_use]
    pub fn default_read_set() -> Self {
        Self {
            read: EnergyMetric::ALL
                .map(EnergyMetric::permission)
                .into_iter()
                .chain([
                    HealthPermission::Steps,
                    HealthPermission::HeartRate,
                    HealthPermission::Workout,
                ])
                .collect(),
            write: Vec::new(),
        }
    }
}

/// Energy metrics the client reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnergyMetric {
    /// Energy burned through activity
    Active,
    /// Resting energy expenditure
    Basal,
}

impl EnergyMetric {
    /// Every metric, in read order
    pub const ALL: [Self; 2] = [Self::Active, Self::Basal];

    /// Permission needed to read this metric
    #[must_use]
    pub const fn permission(self) -> HealthPermission {
        match self {
            Self::Active => HealthPermission::ActiveEnergyBurned,
            Self::Basal => HealthPermission::BasalEnergyBurned,
        }
    }
}

impl fmt::Display for EnergyMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active energy"),
            Self::Basal => f.write_str("basal energy"),
        }
    }
}

/// Closed time range for a health query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive start
    pub start: DateTime<Local>,
    /// End, usually "now"
    pub end: DateTime<Local>,
}

impl TimeWindow {
    /// Local midnight today until now
    #[must_use]
    pub fn today() -> Self {
        Self::day_until(Local::now())
    }

    /// Local midnight of `end`'s day until `end`
    #[must_use]
    pub fn day_until(end: DateTime<Local>) -> Self {
        let start = end
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
            .unwrap_or(end);
        Self { start, end }
    }
}

/// Platform health service
#[async_trait]
pub trait HealthDataSource: Send + Sync {
    /// Ask the user for access to `permissions`
    async fn request_authorization(&self, permissions: &HealthPermissions) -> AppResult<()>;

    /// Total kilocalories of `metric` within `window`
    async fn read_energy(&self, metric: EnergyMetric, window: TimeWindow) -> AppResult<f64>;
}

/// Result of a non-fatal health call
#[derive(Debug, Clone, PartialEq)]
pub enum HealthOutcome<T> {
    /// The call succeeded
    Available(T),
    /// The call failed; the reason has already been logged
    Unavailable {
        /// Failure category
        code: ErrorCode,
        /// Failure message
        reason: String,
    },
}

impl<T> HealthOutcome<T> {
    /// Whether the call succeeded
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Success value, dropping the failure
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Available(value) => Some(value),
            Self::Unavailable { .. } => None,
        }
    }

    fn from_result(result: AppResult<T>) -> Self {
        match result {
            Ok(value) => Self::Available(value),
            Err(error) => Self::Unavailable {
                code: error.code,
                reason: error.message,
            },
        }
    }
}

/// Today's energy readings; each `None` when unavailable
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EnergySnapshot {
    /// Active kilocalories
    pub active_kcal: Option<f64>,
    /// Basal kilocalories
    pub basal_kcal: Option<f64>,
}

impl EnergySnapshot {
    /// Sum of the available readings, `None` when neither is available
    #[must_use]
    pub fn total_kcal(&self) -> Option<f64> {
        match (self.active_kcal, self.basal_kcal) {
            (None, None) => None,
            (active, basal) => Some(active.unwrap_or(0.0) + basal.unwrap_or(0.0)),
        }
    }
}

/// Timeout-bounded, non-fatal access to a [`HealthDataSource`]
#[derive(Clone)]
pub struct HealthBridge {
    source: Arc<dyn HealthDataSource>,
    timeout: Duration,
}

impl HealthBridge {
    /// Wrap `source`, bounding each call by `timeout`
    #[must_use]
    pub fn new(source: Arc<dyn HealthDataSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    async fn bounded<T>(
        &self,
        operation: &str,
        call: impl std::future::Future<Output = AppResult<T>> + Send,
    ) -> AppResult<T> {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| AppError::health_timeout(operation, self.timeout))?
    }

    /// Request the default read permissions
    pub async fn request_permissions(&self) -> HealthOutcome<()> {
        let permissions = HealthPermissions::default_read_set();
        let result = self
            .bounded(
                "Health authorization",
                self.source.request_authorization(&permissions),
            )
            .await;
        match &result {
            Ok(()) => debug!(read = permissions.read.len(), "Health authorization granted"),
            Err(e) => warn!(code = ?e.code, error = %e.message, "Health authorization failed"),
        }
        HealthOutcome::from_result(result)
    }

    /// Read one metric for today
    pub async fn read_today(&self, metric: EnergyMetric) -> HealthOutcome<f64> {
        let result = self
            .bounded(
                "Health energy read",
                self.source.read_energy(metric, TimeWindow::today()),
            )
            .await;
        match &result {
            Ok(kcal) => debug!(metric = %metric, kcal, "Health energy read"),
            Err(e) => warn!(metric = %metric, code = ?e.code, error = %e.message, "Health energy read failed"),
        }
        HealthOutcome::from_result(result)
    }

    /// Active and basal energy for today
    pub async fn today_energy(&self) -> EnergySnapshot {
        EnergySnapshot {
            active_kcal: self.read_today(EnergyMetric::Active).await.ok(),
            basal_kcal: self.read_today(EnergyMetric::Basal).await.ok(),
        }
    }
}

impl fmt::Debug for HealthBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthBridge")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Source for hosts without a platform health service
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableHealthSource;

#[async_trait]
impl HealthDataSource for UnavailableHealthSource {
    async fn request_authorization(&self, _permissions: &HealthPermissions) -> AppResult<()> {
        Err(AppError::health_unavailable(
            "No health service on this platform",
        ))
    }

    async fn read_energy(&self, metric: EnergyMetric, _window: TimeWindow) -> AppResult<f64> {
        Err(AppError::health_unavailable(format!(
            "Cannot read {metric}: no health service on this platform"
        )))
    }
}

/// Source returning fixed readings
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticHealthSource {
    /// Active kilocalories, `None` reads as unavailable
    pub active_kcal: Option<f64>,
    /// Basal kilocalories, `None` reads as unavailable
    pub basal_kcal: Option<f64>,
}

#[async_trait]
impl HealthDataSource for StaticHealthSource {
    async fn request_authorization(&self, _permissions: &HealthPermissions) -> AppResult<()> {
        Ok(())
    }

    async fn read_energy(&self, metric: EnergyMetric, _window: TimeWindow) -> AppResult<f64> {
        let value = match metric {
            EnergyMetric::Active => self.active_kcal,
            EnergyMetric::Basal => self.basal_kcal,
        };
        value.ok_or_else(|| AppError::health_unavailable(format!("No {metric} reading")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    struct HangingSource;

    #[async_trait]
    impl HealthDataSource for HangingSource {
        async fn request_authorization(&self, _permissions: &HealthPermissions) -> AppResult<()> {
            std::future::pending().await
        }

        async fn read_energy(&self, _metric: EnergyMetric, _window: TimeWindow) -> AppResult<f64> {
            std::future::pending().await
        }
    }

    #[test]
    fn test_default_read_set() {
        let permissions = HealthPermissions::default_read_set();
        assert_eq!(permissions.read.len(), 5);
        assert!(permissions.write.is_empty());
        assert_eq!(permissions.read[0].as_str(), "ActiveEnergyBurned");
        assert_eq!(permissions.read[1], EnergyMetric::Basal.permission());
    }

    #[test]
    fn test_window_starts_at_midnight() {
        let window = TimeWindow::today();
        assert_eq!(window.start.hour(), 0);
        assert_eq!(window.start.minute(), 0);
        assert_eq!(window.start.date_naive(), window.end.date_naive());
        assert!(window.start <= window.end);
    }

    #[tokio::test]
    async fn test_hanging_source_times_out() {
        let bridge = HealthBridge::new(Arc::new(HangingSource), Duration::from_millis(20));
        let outcome = bridge.request_permissions().await;
        assert!(matches!(
            &outcome,
            HealthOutcome::Unavailable { code: ErrorCode::HealthTimeout, reason } if reason.ends_with("within 20ms")
        ));
        assert_eq!(bridge.today_energy().await, EnergySnapshot::default());
    }

    #[tokio::test]
    async fn test_partial_snapshot() {
        let bridge = HealthBridge::new(
            Arc::new(StaticHealthSource {
                active_kcal: Some(320.0),
                basal_kcal: None,
            }),
            Duration::from_secs(1),
        );
        let snapshot = bridge.today_energy().await;
        assert_eq!(snapshot.active_kcal, Some(320.0));
        assert_eq!(snapshot.basal_kcal, None);
        assert_eq!(snapshot.total_kcal(), Some(320.0));
    }

    #[tokio::test]
    async fn test_unavailable_source() {
        let bridge = HealthBridge::new(Arc::new(UnavailableHealthSource), Duration::from_secs(1));
        assert!(!bridge.request_permissions().await.is_available());
    }
}
