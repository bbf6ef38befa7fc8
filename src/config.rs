use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub default_timezone: String, // IANA zone name used when a request omits or misspells one
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://fitness_booking.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().expect("PORT must be a number"),
            default_timezone: env::var("TIMEZONE").unwrap_or_else(|_| "Asia/Kolkata".to_string()),
        }
    }
}
