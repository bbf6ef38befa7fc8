mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_returns_api_info() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "Welcome to Fitness Studio Booking API");
    assert_eq!(body["health_check"], "/health");
}

#[tokio::test]
async fn test_health_check_reports_healthy() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/health")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fitness-booking-api");
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_book_rejects_malformed_payload() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/book")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"class_id": "not-a-number"}).to_string())).unwrap()
    ).await.unwrap();

    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn test_bookings_requires_email_param() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/bookings")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert!(res.status().is_client_error());
}
