use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::domain::models::{booking::Booking, class::FitnessClass};

/// Class with `start_time` projected into the zone the caller asked
/// for. `created_at` stays in UTC.
#[derive(Serialize)]
pub struct ClassResponse {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub start_time: DateTime<FixedOffset>,
    pub total_slots: i32,
    pub available_slots: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ClassResponse {
    pub fn in_zone(class: &FitnessClass, tz: Tz) -> Self {
        Self {
            id: class.id,
            name: class.name.clone(),
            instructor: class.instructor.clone(),
            start_time: class.start_time_utc.with_timezone(&tz).fixed_offset(),
            total_slots: class.total_slots,
            available_slots: class.available_slots,
            description: class.description.clone(),
            created_at: class.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub class_id: i64,
    pub client_name: String,
    pub client_email: String,
    pub booking_time: DateTime<Utc>,
    pub status: String,
    pub fitness_class: ClassResponse,
}

impl BookingResponse {
    pub fn new(booking: Booking, class: &FitnessClass) -> Self {
        Self {
            id: booking.id,
            class_id: booking.class_id,
            client_name: booking.client_name,
            client_email: booking.client_email,
            booking_time: booking.booking_time,
            status: booking.status,
            fitness_class: ClassResponse::in_zone(class, chrono_tz::UTC),
        }
    }
}

#[derive(Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingResponse>,
    pub total_count: usize,
}
