use crate::domain::models::{
    booking::{Booking, NewBooking},
    class::{FitnessClass, NewFitnessClass},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage access for the schedule catalog. `reserve_slot` and
/// `release_slot` are the only writers of `available_slots`; both are
/// conditional single-row updates and report whether a row changed.
#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn insert(&self, class: &NewFitnessClass) -> Result<FitnessClass, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<FitnessClass>, AppError>;
    async fn list_from(&self, reference: DateTime<Utc>) -> Result<Vec<FitnessClass>, AppError>;
    async fn reserve_slot(&self, id: i64) -> Result<bool, AppError>;
    async fn release_slot(&self, id: i64) -> Result<bool, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(&self, booking: &NewBooking, booking_time: DateTime<Utc>) -> Result<Booking, AppError>;
    async fn find_confirmed(&self, class_id: i64, client_email: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_email(&self, client_email: &str) -> Result<Vec<Booking>, AppError>;
}
