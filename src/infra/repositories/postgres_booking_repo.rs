use crate::domain::{models::booking::{Booking, NewBooking, STATUS_CONFIRMED}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn insert(&self, booking: &NewBooking, booking_time: DateTime<Utc>) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("INSERT INTO booking (class_id, client_name, client_email, booking_time, status) VALUES ($1, $2, $3, $4, $5) RETURNING *").bind(booking.class_id).bind(&booking.client_name).bind(&booking.client_email).bind(booking_time).bind(STATUS_CONFIRMED).fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_confirmed(&self, class_id: i64, client_email: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM booking WHERE class_id = $1 AND client_email = $2 AND status = $3").bind(class_id).bind(client_email).bind(STATUS_CONFIRMED).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_email(&self, client_email: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM booking WHERE LOWER(client_email) = LOWER($1) ORDER BY booking_time ASC, id ASC").bind(client_email).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
