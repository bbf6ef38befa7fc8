use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct FitnessClass {
    pub id: i64,
    pub name: String,
    pub instructor: String,
    pub start_time_utc: DateTime<Utc>,
    pub total_slots: i32,
    pub available_slots: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewFitnessClass {
    pub name: String,
    pub instructor: String,
    pub start_time_utc: DateTime<Utc>,
    pub total_slots: i32,
    pub description: Option<String>,
}
