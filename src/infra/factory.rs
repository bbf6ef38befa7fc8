use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::{BookingRepository, ClassRepository};
use crate::domain::services::{catalog::ScheduleCatalog, ledger::BookingLedger};
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_class_repo::PostgresClassRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_class_repo::SqliteClassRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        build_state(
            config,
            Arc::new(PostgresClassRepo::new(pool.clone())),
            Arc::new(PostgresBookingRepo::new(pool.clone())),
        )
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        build_state(
            config,
            Arc::new(SqliteClassRepo::new(pool.clone())),
            Arc::new(SqliteBookingRepo::new(pool.clone())),
        )
    }
}

fn build_state(
    config: &Config,
    class_repo: Arc<dyn ClassRepository>,
    booking_repo: Arc<dyn BookingRepository>,
) -> AppState {
    let catalog = Arc::new(ScheduleCatalog::new(class_repo.clone(), config));
    let ledger = Arc::new(BookingLedger::new(catalog.clone(), booking_repo.clone()));

    AppState {
        config: config.clone(),
        class_repo,
        booking_repo,
        catalog,
        ledger,
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
