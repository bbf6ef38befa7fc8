use axum::{extract::{Query, State}, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::BookingRequest;
use crate::api::dtos::responses::{BookingListResponse, BookingResponse};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct BookingsQuery {
    pub email: String,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (booking, class) = state
        .ledger
        .book(payload.class_id, &payload.client_name, &payload.client_email)
        .await?;

    Ok(Json(BookingResponse::new(booking, &class)))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    info!("Fetching bookings for email: {}", params.email);

    let joined = state.ledger.bookings_for_email(&params.email).await?;

    let bookings: Vec<BookingResponse> = joined
        .into_iter()
        .map(|(booking, class)| BookingResponse::new(booking, &class))
        .collect();

    let total_count = bookings.len();
    Ok(Json(BookingListResponse { bookings, total_count }))
}
