use crate::domain::{models::class::{FitnessClass, NewFitnessClass}, ports::ClassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

pub struct PostgresClassRepo {
    pool: PgPool,
}

impl PostgresClassRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for PostgresClassRepo {
    async fn insert(&self, class: &NewFitnessClass) -> Result<FitnessClass, AppError> {
        sqlx::query_as::<_, FitnessClass>("INSERT INTO fitness_class (name, instructor, start_time_utc, total_slots, available_slots, description, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *").bind(&class.name).bind(&class.instructor).bind(class.start_time_utc).bind(class.total_slots).bind(class.total_slots).bind(&class.description).bind(Utc::now()).fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: i64) -> Result<Option<FitnessClass>, AppError> {
        sqlx::query_as::<_, FitnessClass>("SELECT * FROM fitness_class WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_from(&self, reference: DateTime<Utc>) -> Result<Vec<FitnessClass>, AppError> {
        sqlx::query_as::<_, FitnessClass>("SELECT * FROM fitness_class WHERE start_time_utc >= $1 ORDER BY start_time_utc ASC, id ASC").bind(reference).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn reserve_slot(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE fitness_class SET available_slots = available_slots - 1 WHERE id = $1 AND available_slots > 0").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }
    async fn release_slot(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE fitness_class SET available_slots = available_slots + 1 WHERE id = $1 AND available_slots < total_slots").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }
    async fn count(&self) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM fitness_class").fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }
}
