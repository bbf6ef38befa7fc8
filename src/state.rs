use std::sync::Arc;
use crate::domain::ports::{BookingRepository, ClassRepository};
use crate::domain::services::{catalog::ScheduleCatalog, ledger::BookingLedger};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub class_repo: Arc<dyn ClassRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub catalog: Arc<ScheduleCatalog>,
    pub ledger: Arc<BookingLedger>,
}
