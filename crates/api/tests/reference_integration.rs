//! Integration tests for reference data, health and request tracing.

mod common;

use axum::http::StatusCode;
use common::{create_test_app, get_request, parse_response_body};
use tower::ServiceExt;

#[tokio::test]
async fn test_list_companies() {
    let (app, _) = create_test_app();

    let response = app.oneshot(get_request("/api/companies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = parse_response_body(response).await;
    let companies = json.as_array().unwrap();
    assert_eq!(companies.len(), 4);
    assert_eq!(companies[0]["id"], 1);
    assert_eq!(companies[0]["name"], "Company A");
    assert_eq!(companies[0]["domain"], "companya.com");
}

#[tokio::test]
async fn test_list_years_of_experience() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(get_request("/api/years-of-experience"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = parse_response_body(response).await;
    let years = json.as_array().unwrap();
    assert_eq!(years.len(), 7);
    assert_eq!(years[0]["description"], "0 Years/Student/Intern");
    assert_eq!(years[6]["description"], "10+ Years");
}

#[tokio::test]
async fn test_health_in_memory() {
    let (app, _) = create_test_app();

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = parse_response_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"]["backend"], "memory");
}

#[tokio::test]
async fn test_ready_and_live() {
    let (app, _) = create_test_app();

    let ready = app
        .clone()
        .oneshot(get_request("/api/health/ready"))
        .await
        .unwrap();
    assert_eq!(ready.status(), StatusCode::OK);

    let live = app.oneshot(get_request("/api/health/live")).await.unwrap();
    assert_eq!(live.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (app, _) = create_test_app();

    let response = app.oneshot(get_request("/api/companies")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
