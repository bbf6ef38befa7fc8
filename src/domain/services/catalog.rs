use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::models::class::FitnessClass;
use crate::domain::ports::ClassRepository;
use crate::domain::services::timezone;
use crate::error::AppError;

/// Read side of the schedule plus the slot counter operations. All
/// capacity changes go through `try_reserve_slot` / `release_slot` so
/// the conditional updates in the repository stay the single authority
/// on `available_slots`.
pub struct ScheduleCatalog {
    classes: Arc<dyn ClassRepository>,
    default_zone: Tz,
}

impl ScheduleCatalog {
    pub fn new(classes: Arc<dyn ClassRepository>, config: &Config) -> Self {
        Self {
            classes,
            default_zone: timezone::parse_default(&config.default_timezone),
        }
    }

    /// Upcoming classes (start at or after `reference`), oldest first,
    /// together with the zone their times should be rendered in.
    pub async fn list_upcoming(
        &self,
        reference: DateTime<Utc>,
        requested_zone: Option<&str>,
    ) -> Result<(Tz, Vec<FitnessClass>), AppError> {
        let tz = timezone::resolve(requested_zone, self.default_zone);
        let classes = self.classes.list_from(reference).await?;
        debug!("Listed {} upcoming classes in zone {}", classes.len(), tz);
        Ok((tz, classes))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<FitnessClass, AppError> {
        self.classes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))
    }

    /// Claims one slot. The repository decrement only succeeds while
    /// `available_slots > 0`, so a miss is re-read to tell a missing
    /// class apart from a full one.
    pub async fn try_reserve_slot(&self, id: i64) -> Result<(), AppError> {
        if self.classes.reserve_slot(id).await? {
            return Ok(());
        }
        match self.classes.find_by_id(id).await? {
            None => Err(AppError::NotFound("Class not found".to_string())),
            Some(_) => Err(AppError::NoAvailability(
                "No available slots for this class".to_string(),
            )),
        }
    }

    /// Returns a previously claimed slot. Guarded so a stray release
    /// can never push `available_slots` past `total_slots`.
    pub async fn release_slot(&self, id: i64) -> Result<(), AppError> {
        if !self.classes.release_slot(id).await? {
            warn!("Slot release for class {} changed no rows", id);
        }
        Ok(())
    }
}
