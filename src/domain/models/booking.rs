use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// The only status the admission protocol produces. The schema reserves
/// room for a future `cancelled` value, but no operation emits it.
pub const STATUS_CONFIRMED: &str = "confirmed";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: i64,
    pub class_id: i64,
    pub client_name: String,
    pub client_email: String,
    pub booking_time: DateTime<Utc>,
    pub status: String,
}

/// Admission request after validation: name trimmed, email normalized to
/// lowercase so the confirmed-booking unique index matches exactly.
pub struct NewBooking {
    pub class_id: i64,
    pub client_name: String,
    pub client_email: String,
}
