use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to Fitness Studio Booking API",
        "version": "1.0.0",
        "health_check": "/health"
    }))
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "service": "fitness-booking-api"
    }))
}
