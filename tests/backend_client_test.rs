// ABOUTME: Integration tests for the HTTP backend gateway against a mock coaching backend
// ABOUTME: Routes, query parameters, signup parsing, error mapping, and lenient plan parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitcoach_client::errors::ErrorCode;
use fitcoach_client::external::{BackendGateway, HttpBackendClient};
use fitcoach_client::intake::submit::placeholder_signup;
use fitcoach_client::models::{Goal, UserId, Weekday};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user(id: &str) -> UserId {
    UserId::parse(id).unwrap()
}

async fn client_for(server: &MockServer) -> HttpBackendClient {
    HttpBackendClient::with_base_url(&server.uri()).unwrap()
}

#[tokio::test]
async fn test_signup_returns_numeric_user_id_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(header_exists("x-request-id"))
        .and(body_partial_json(json!({ "first_name": "Test", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "userId": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    let user_id = client_for(&server)
        .await
        .signup(&placeholder_signup())
        .await
        .unwrap();
    assert_eq!(user_id.as_str(), "42");
}

#[tokio::test]
async fn test_signup_without_user_id_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .signup(&placeholder_signup())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidResponse);
    assert_eq!(err.field_path.as_deref(), Some("userId"));
}

#[tokio::test]
async fn test_non_success_carries_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plan/generate-week"))
        .and(query_param("userId", "42"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Profile incomplete"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .generate_week(&user("42"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::BackendRejected);
    assert_eq!(err.status, Some(400));
    assert_eq!(err.message, "Profile incomplete");
}

#[tokio::test]
async fn test_empty_error_body_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plan/current"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .current_plan(&user("42"))
        .await
        .unwrap_err();
    assert_eq!(err.message, "HTTP 503");
}

#[tokio::test]
async fn test_generate_week_accepts_non_json_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plan/generate-week"))
        .respond_with(ResponseTemplate::new(200).set_body_string("queued"))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .await
        .generate_week(&user("42"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_current_plan_is_parsed_leniently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plan/current"))
        .and(query_param("userId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "daily_targets": { "calorieTarget": "lots", "proteinTarget": 150 },
            "week_meals": { "mon": [ { "label": "Lunch", "meal": { "name": "Bowl" } } ], "tue": "bad" },
            "grocery_list": [ "Oats", 2, true ],
            "week_start_date": "2025-03-03"
        })))
        .mount(&server)
        .await;

    let plan = client_for(&server)
        .await
        .current_plan(&user("42"))
        .await
        .unwrap();

    let targets = plan.daily_targets.unwrap().resolved();
    assert_eq!(targets.calories, 2000.0);
    assert_eq!(targets.protein_g, 150.0);
    let meals = plan.week_meals.unwrap();
    assert_eq!(meals.day(Weekday::Mon)[0].meal.name, "Bowl");
    assert!(meals.day(Weekday::Tue).is_empty());
    assert_eq!(plan.grocery_list, vec!["Oats", "2", "true"]);
    assert!(plan.week_workouts.is_none());
    assert!(plan.week_start_date.is_some());
}

#[tokio::test]
async fn test_fetch_profile_uses_snake_case_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(query_param("user_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "42",
            "goal": "fat_loss",
            "weight_kg": 72.5,
            "diet_type": "veg"
        })))
        .mount(&server)
        .await;

    let profile = client_for(&server)
        .await
        .fetch_profile(&user("42"))
        .await
        .unwrap();
    assert_eq!(profile.goal, Some(Goal::FatLoss));
    assert_eq!(profile.weight_kg, Some(72.5));
    assert_eq!(profile.diet_type.as_deref(), Some("veg"));
    assert!(profile.sex.is_none());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let err = HttpBackendClient::with_base_url(&uri)
        .unwrap()
        .current_plan(&user("42"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NetworkError);
}
