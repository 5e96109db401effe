// ABOUTME: Coaching backend client for account, profile, and weekly plan operations
// ABOUTME: Reads every response as text, parses JSON when possible, and maps non-2xx to typed errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coaching backend gateway
//!
//! The backend owns all plan logic; this client only moves payloads. Every
//! response body is read as text first. A non-2xx status becomes a
//! `BackendRejected` error whose message is the body verbatim (or
//! `HTTP <status>` when empty). A 2xx body is parsed as JSON when possible
//! and otherwise kept as a JSON string, then handed to the typed parsers in
//! `fitcoach_core::models`.
//!
//! # Example
//! ```rust,no_run
//! use fitcoach_client::external::{BackendGateway, HttpBackendClient};
//! use fitcoach_client::models::UserId;
//!
//! # async fn example() -> fitcoach_client::errors::AppResult<()> {
//! let client = HttpBackendClient::with_base_url("http://10.0.0.171:8000")?;
//! if let Some(user_id) = UserId::parse("42") {
//!     let plan = client.current_plan(&user_id).await?;
//!     println!("{} grocery items", plan.grocery_list.len());
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::environment::ClientConfig;
use crate::constants::{network, routes};
use crate::errors::{AppError, AppResult};
use crate::models::{
    parse_signup_response, Plan, ProfileSetupRequest, SignupRequest, StoredProfile, UserId,
};
use crate::utils::http_client;

/// Header carrying a per-request correlation id
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Remote operations the client needs from the coaching backend
#[async_trait]
pub trait BackendGateway: Send + Sync {
    /// Create an account and return its identifier
    async fn signup(&self, request: &SignupRequest) -> AppResult<UserId>;

    /// Store the user's profile
    async fn setup_profile(&self, request: &ProfileSetupRequest) -> AppResult<()>;

    /// Ask the backend to generate this week's plan
    async fn generate_week(&self, user_id: &UserId) -> AppResult<()>;

    /// Fetch the current weekly plan
    async fn current_plan(&self, user_id: &UserId) -> AppResult<Plan>;

    /// Fetch the profile the backend has stored
    async fn fetch_profile(&self, user_id: &UserId) -> AppResult<StoredProfile>;
}

/// `reqwest`-backed gateway
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    base_url: String,
    http_client: Client,
}

impl HttpBackendClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration does not validate
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            base_url: config.base_url.clone(),
            http_client: http_client::create_client_with_timeout(
                config.http_timeout,
                network::CONNECT_TIMEOUT_SECS,
            ),
        })
    }

    /// Create a client for an explicit base URL with default timeouts
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the URL is not http(s)
    pub fn with_base_url(base_url: &str) -> AppResult<Self> {
        let parsed = url::Url::parse(base_url)
            .map_err(|e| AppError::config(format!("Invalid backend URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "Backend URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: http_client::api_client(),
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base_url)
    }

    /// Send a request and return the body as JSON, or as a JSON string when it
    /// is not JSON
    async fn execute(&self, request: RequestBuilder, method: &str, route: &str) -> AppResult<Value> {
        let request_id = Uuid::new_v4().to_string();
        debug!(method, route, request_id = %request_id, "Calling coaching backend");

        let response = request
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| {
                warn!(method, route, error = %e, "Coaching backend unreachable");
                AppError::network(format!("{method} {route} failed: {e}")).with_source(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::network(format!("Failed to read {route} response: {e}")).with_source(e)
        })?;

        if !status.is_success() {
            warn!(
                method,
                route,
                status = status.as_u16(),
                request_id = %request_id,
                "Coaching backend rejected request"
            );
            return Err(AppError::backend_rejected(status.as_u16(), &text));
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

#[async_trait]
impl BackendGateway for HttpBackendClient {
    async fn signup(&self, request: &SignupRequest) -> AppResult<UserId> {
        let body = self
            .execute(
                self.http_client.post(self.url(routes::SIGNUP)).json(request),
                "POST",
                routes::SIGNUP,
            )
            .await?;
        parse_signup_response(&body)
    }

    async fn setup_profile(&self, request: &ProfileSetupRequest) -> AppResult<()> {
        self.execute(
            self.http_client
                .post(self.url(routes::PROFILE_SETUP))
                .json(request),
            "POST",
            routes::PROFILE_SETUP,
        )
        .await?;
        Ok(())
    }

    async fn generate_week(&self, user_id: &UserId) -> AppResult<()> {
        self.execute(
            self.http_client
                .post(self.url(routes::GENERATE_WEEK))
                .query(&[("userId", user_id.as_str())]),
            "POST",
            routes::GENERATE_WEEK,
        )
        .await?;
        Ok(())
    }

    async fn current_plan(&self, user_id: &UserId) -> AppResult<Plan> {
        let body = self
            .execute(
                self.http_client
                    .get(self.url(routes::CURRENT_PLAN))
                    .query(&[("userId", user_id.as_str())]),
                "GET",
                routes::CURRENT_PLAN,
            )
            .await?;

        let parsed = Plan::from_json(&body);
        if !parsed.is_clean() {
            warn!(
                user_id = %user_id,
                defaulted = parsed.issues.len(),
                "Plan response had mistyped fields"
            );
            for issue in &parsed.issues {
                debug!(path = %issue.path, reason = %issue.reason, "Defaulted plan field");
            }
        }
        Ok(parsed.into_value())
    }

    async fn fetch_profile(&self, user_id: &UserId) -> AppResult<StoredProfile> {
        let body = self
            .execute(
                self.http_client
                    .get(self.url(routes::PROFILE))
                    .query(&[("user_id", user_id.as_str())]),
                "GET",
                routes::PROFILE,
            )
            .await?;
        if !body.is_object() {
            return Err(AppError::invalid_response("$", "expected an object"));
        }
        serde_json::from_value(body)
            .map_err(|e| AppError::invalid_response("$", e.to_string()).with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_trims_and_validates() {
        let client = HttpBackendClient::with_base_url("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url(routes::CURRENT_PLAN), "http://localhost:8000/plan/current");

        assert!(HttpBackendClient::with_base_url("not a url").is_err());
        assert!(HttpBackendClient::with_base_url("file:///tmp").is_err());
    }
}
