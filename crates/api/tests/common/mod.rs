//! Common test utilities for integration tests.
//!
//! The router runs against the in-memory gateway, so these tests need no
//! database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use domain::models::FinalizedUser;
use domain::services::InMemoryGateway;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use referralboard_api::app::{router, AppState};
use referralboard_api::config::Config;
use serde_json::{json, Value};

/// Configuration for tests, built without reading config files.
pub fn test_config() -> Config {
    Config::load_for_test(&[("database.url", "postgres://unused")])
        .expect("Failed to build test config")
}

/// Router over a seeded in-memory gateway (Company A..D, years of experience).
pub fn create_test_app() -> (Router, InMemoryGateway) {
    create_test_app_with(InMemoryGateway::seeded())
}

pub fn create_test_app_with(gateway: InMemoryGateway) -> (Router, InMemoryGateway) {
    let state = AppState::with_gateway(test_config(), gateway.clone());
    (router(state), gateway)
}

/// Registration payload shaped like the web client's submission.
pub fn candidate_body(email: &str, company_name: &str) -> Value {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    json!({
        "firstName": first_name,
        "lastName": last_name,
        "currentLocation": "Mumbai",
        "currentCompanyName": company_name,
        "currentPosition": "Software Engineer",
        "school": "University of Mumbai",
        "yearsOfExperienceId": 1,
        "email": email,
        "password": "root",
    })
}

/// POST `body` as JSON to `uri` with the given content type.
pub fn post_json(uri: &str, body: &Value, content_type: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// POST a registration the way the web client does (form content type).
pub fn register_request(body: &Value) -> Request<Body> {
    post_json(
        "/api/users/newuser",
        body,
        "application/x-www-form-urlencoded",
    )
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Parse response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Inserts an already-registered user directly into the gateway.
pub async fn insert_existing_user(gateway: &InMemoryGateway, email: &str) {
    let user = FinalizedUser {
        first_name: "Shashank".to_string(),
        last_name: "Kumar".to_string(),
        email: email.to_string(),
        password: "root".to_string(),
        current_location: "Florida".to_string(),
        current_company_id: 1,
        current_company_name: "Company A".to_string(),
        current_position: "Intern".to_string(),
        school: "UF".to_string(),
        years_of_experience_id: 1,
    };
    gateway
        .insert_user(user, true)
        .await
        .expect("Failed to insert existing user");
}
