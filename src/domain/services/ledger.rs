use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::domain::models::booking::{Booking, NewBooking};
use crate::domain::models::class::FitnessClass;
use crate::domain::ports::BookingRepository;
use crate::domain::services::catalog::ScheduleCatalog;
use crate::error::{is_unique_violation, AppError};

/// Booking records plus the admission protocol that creates them.
pub struct BookingLedger {
    catalog: Arc<ScheduleCatalog>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingLedger {
    pub fn new(catalog: Arc<ScheduleCatalog>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { catalog, bookings }
    }

    /// Runs the admission protocol: validate, check the class, reject
    /// duplicates, claim a slot, then write the booking record. A failed
    /// record write releases the claimed slot before the error surfaces,
    /// so a slot is never lost to a downstream fault.
    pub async fn book(
        &self,
        class_id: i64,
        client_name: &str,
        client_email: &str,
    ) -> Result<(Booking, FitnessClass), AppError> {
        let client_name = validate_client_name(client_name)?;
        let client_email = normalize_client_email(client_email)?;

        info!("Processing booking request for class {} by {}", class_id, client_email);

        let class = self.catalog.get_by_id(class_id).await?;

        if class.start_time_utc < Utc::now() {
            warn!("Attempted to book past class {}", class_id);
            return Err(AppError::Validation(
                "Cannot book classes in the past".to_string(),
            ));
        }

        // Duplicate check runs before capacity is touched so a repeat
        // request from the same client never burns a slot. The partial
        // unique index on (class_id, client_email) backstops the race
        // where two identical requests both pass this check.
        if self
            .bookings
            .find_confirmed(class_id, &client_email)
            .await?
            .is_some()
        {
            warn!("Duplicate booking attempt for class {} by {}", class_id, client_email);
            return Err(AppError::DuplicateBooking(
                "You have already booked this class".to_string(),
            ));
        }

        self.catalog.try_reserve_slot(class_id).await?;

        let new_booking = NewBooking {
            class_id,
            client_name,
            client_email: client_email.clone(),
        };

        let booking = match self.bookings.insert(&new_booking, Utc::now()).await {
            Ok(booking) => booking,
            Err(err) => {
                // The slot was already claimed; give it back before
                // reporting the failure.
                if let Err(release_err) = self.catalog.release_slot(class_id).await {
                    error!(
                        "Failed to release slot for class {} after booking insert failed: {}",
                        class_id, release_err
                    );
                }
                if let AppError::Database(db_err) = &err {
                    if is_unique_violation(db_err) {
                        warn!(
                            "Concurrent duplicate booking for class {} by {}",
                            class_id, client_email
                        );
                        return Err(AppError::DuplicateBooking(
                            "You have already booked this class".to_string(),
                        ));
                    }
                }
                return Err(err);
            }
        };

        // Re-read so the response carries the decremented slot count.
        let class = match self.catalog.get_by_id(class_id).await {
            Ok(class) => class,
            Err(AppError::NotFound(_)) => {
                error!("Class {} vanished after booking {} was created", class_id, booking.id);
                return Err(AppError::Internal);
            }
            Err(err) => return Err(err),
        };

        info!(
            "Created booking {} for class {} ({} slots left)",
            booking.id, class_id, class.available_slots
        );

        Ok((booking, class))
    }

    /// All bookings for an email address, any status, oldest first,
    /// each paired with the current snapshot of its class.
    pub async fn bookings_for_email(
        &self,
        email: &str,
    ) -> Result<Vec<(Booking, FitnessClass)>, AppError> {
        let email = normalize_client_email(email)?;

        let bookings = self.bookings.list_by_email(&email).await?;

        // Fetch each referenced class once, then join in memory.
        let mut classes: HashMap<i64, FitnessClass> = HashMap::new();
        for booking in &bookings {
            if classes.contains_key(&booking.class_id) {
                continue;
            }
            let class = match self.catalog.get_by_id(booking.class_id).await {
                Ok(class) => class,
                Err(AppError::NotFound(_)) => {
                    error!("Booking {} references missing class {}", booking.id, booking.class_id);
                    return Err(AppError::Internal);
                }
                Err(err) => return Err(err),
            };
            classes.insert(booking.class_id, class);
        }

        let joined = bookings
            .into_iter()
            .map(|booking| {
                let class = classes[&booking.class_id].clone();
                (booking, class)
            })
            .collect();

        Ok(joined)
    }
}

fn validate_client_name(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();
    // Character count, not byte length.
    if name.chars().count() < 2 {
        return Err(AppError::Validation(
            "Client name must be at least 2 characters long".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// Trims, checks the shape and lowercases so the same address always
/// compares equal regardless of how the client typed it.
fn normalize_client_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim();
    if !is_valid_email(email) {
        return Err(AppError::Validation(
            "Valid email address is required".to_string(),
        ));
    }
    Ok(email.to_lowercase())
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.split('.').any(|label| label.is_empty())
}
