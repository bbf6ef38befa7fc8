use fitness_booking::{
    api::router::create_router,
    config::Config,
    domain::models::class::{FitnessClass, NewFitnessClass},
    domain::ports::{BookingRepository, ClassRepository},
    domain::services::{catalog::ScheduleCatalog, ledger::BookingLedger},
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_class_repo::SqliteClassRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            default_timezone: "Asia/Kolkata".to_string(),
        };

        let class_repo: Arc<dyn ClassRepository> = Arc::new(SqliteClassRepo::new(pool.clone()));
        let booking_repo: Arc<dyn BookingRepository> = Arc::new(SqliteBookingRepo::new(pool.clone()));
        let catalog = Arc::new(ScheduleCatalog::new(class_repo.clone(), &config));
        let ledger = Arc::new(BookingLedger::new(catalog.clone(), booking_repo.clone()));

        let state = Arc::new(AppState {
            config,
            class_repo,
            booking_repo,
            catalog,
            ledger,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    #[allow(dead_code)]
    pub async fn insert_class(
        &self,
        name: &str,
        start_time_utc: DateTime<Utc>,
        total_slots: i32,
    ) -> FitnessClass {
        self.state
            .class_repo
            .insert(&NewFitnessClass {
                name: name.to_string(),
                instructor: "Test Instructor".to_string(),
                start_time_utc,
                total_slots,
                description: None,
            })
            .await
            .expect("Failed to insert class")
    }

    #[allow(dead_code)]
    pub async fn book(&self, class_id: i64, name: &str, email: &str) -> axum::response::Response {
        let payload = json!({
            "class_id": class_id,
            "client_name": name,
            "client_email": email
        });

        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/book")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
