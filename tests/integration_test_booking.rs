mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::Value;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_successful_booking_decrements_slots() {
    let app = TestApp::new().await;
    let class = app.insert_class("Morning Yoga", Utc::now() + Duration::days(1), 5).await;

    let res = app.book(class.id, "Jane Doe", "jane@example.com").await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["class_id"], class.id);
    assert_eq!(body["client_name"], "Jane Doe");
    assert_eq!(body["client_email"], "jane@example.com");
    assert_eq!(body["status"], "confirmed");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["fitness_class"]["available_slots"], 4);
    assert_eq!(body["fitness_class"]["total_slots"], 5);
}

#[tokio::test]
async fn test_capacity_drains_to_zero_then_rejects() {
    let app = TestApp::new().await;
    let class = app.insert_class("Spin", Utc::now() + Duration::days(1), 2).await;

    // 1. First booking takes a slot
    let res = app.book(class.id, "Alice", "a@x.com").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["fitness_class"]["available_slots"], 1);

    // 2. Second booking takes the last slot
    let res = app.book(class.id, "Bob", "b@x.com").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["fitness_class"]["available_slots"], 0);

    // 3. Third booking finds the class full
    let res = app.book(class.id, "Carol", "c@x.com").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = parse_body(res).await;
    assert_eq!(body["error"], "No available slots for this class");

    let current = app.state.class_repo.find_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(current.available_slots, 0);
}

#[tokio::test]
async fn test_duplicate_booking_rejected_and_slot_kept() {
    let app = TestApp::new().await;
    let class = app.insert_class("Pilates", Utc::now() + Duration::days(2), 10).await;

    let res = app.book(class.id, "Jane", "jane@x.com").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.book(class.id, "Jane", "jane@x.com").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = parse_body(res).await;
    assert_eq!(body["error"], "You have already booked this class");

    // Only the first booking consumed a slot
    let current = app.state.class_repo.find_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(current.available_slots, 9);

    let found = app.state.booking_repo.find_confirmed(class.id, "jane@x.com").await.unwrap();
    assert_eq!(found.unwrap().status, "confirmed");
}

#[tokio::test]
async fn test_duplicate_check_ignores_email_case() {
    let app = TestApp::new().await;
    let class = app.insert_class("HIIT", Utc::now() + Duration::days(1), 10).await;

    let res = app.book(class.id, "Jane", "Jane@Example.com").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.book(class.id, "Jane", "JANE@EXAMPLE.COM").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(parse_body(res).await["error"], "You have already booked this class");
}

#[tokio::test]
async fn test_same_client_can_book_different_classes() {
    let app = TestApp::new().await;
    let first = app.insert_class("Yoga", Utc::now() + Duration::days(1), 5).await;
    let second = app.insert_class("Zumba", Utc::now() + Duration::days(2), 5).await;

    let res = app.book(first.id, "Jane", "jane@x.com").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.book(second.id, "Jane", "jane@x.com").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_booking_unknown_class_returns_not_found() {
    let app = TestApp::new().await;

    let res = app.book(9999, "Jane", "jane@x.com").await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_body(res).await["error"], "Class not found");
}

#[tokio::test]
async fn test_booking_past_class_rejected() {
    let app = TestApp::new().await;
    let class = app.insert_class("Yesterday Yoga", Utc::now() - Duration::hours(2), 5).await;

    let res = app.book(class.id, "Jane", "jane@x.com").await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["error"], "Cannot book classes in the past");

    let current = app.state.class_repo.find_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(current.available_slots, 5);
}

#[tokio::test]
async fn test_short_name_rejected_before_any_mutation() {
    let app = TestApp::new().await;
    let class = app.insert_class("Crossfit", Utc::now() + Duration::days(1), 5).await;

    let res = app.book(class.id, "", "jane@x.com").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["error"], "Client name must be at least 2 characters long");

    let res = app.book(class.id, " J ", "jane@x.com").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let current = app.state.class_repo.find_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(current.available_slots, 5);

    let bookings = app.state.booking_repo.list_by_email("jane@x.com").await.unwrap();
    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_one_accented_character_name_rejected() {
    let app = TestApp::new().await;
    let class = app.insert_class("Aerial Silk", Utc::now() + Duration::days(1), 5).await;

    // "é" is two bytes but one character, still below the minimum.
    let res = app.book(class.id, "é", "jane@x.com").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["error"], "Client name must be at least 2 characters long");

    let current = app.state.class_repo.find_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(current.available_slots, 5);

    let bookings = app.state.booking_repo.list_by_email("jane@x.com").await.unwrap();
    assert!(bookings.is_empty());

    // Two accented characters clear the minimum.
    let res = app.book(class.id, "Zoë", "zoe@x.com").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_email_rejected_before_any_mutation() {
    let app = TestApp::new().await;
    let class = app.insert_class("Barre", Utc::now() + Duration::days(1), 5).await;

    for bad_email in ["not-an-email", "jane@", "@x.com", "jane@nodot"] {
        let res = app.book(class.id, "Jane", bad_email).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "email {} should be rejected", bad_email);
        assert_eq!(parse_body(res).await["error"], "Valid email address is required");
    }

    let current = app.state.class_repo.find_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(current.available_slots, 5);
}

#[tokio::test]
async fn test_booking_stores_normalized_email() {
    let app = TestApp::new().await;
    let class = app.insert_class("Stretch", Utc::now() + Duration::days(1), 5).await;

    let res = app.book(class.id, "  Jane Doe  ", "  Jane@Example.COM ").await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["client_name"], "Jane Doe");
    assert_eq!(body["client_email"], "jane@example.com");
}
