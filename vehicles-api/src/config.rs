use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// SeaORM connection string; defaults to a process-local SQLite database
    pub database_url: String,
    /// Base URL of the pricing service
    pub pricing_url: String,
    /// Base URL of the maps (reverse geocoding) service
    pub maps_url: String,
    /// Upper bound for a single price lookup
    pub price_timeout: Duration,
    /// Upper bound for a single address lookup
    pub address_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite::memory:".to_string()),
            pricing_url: env::var("PRICING_URL")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
            maps_url: env::var("MAPS_URL").unwrap_or_else(|_| "http://localhost:9191".to_string()),
            price_timeout: millis_from_env("PRICE_TIMEOUT_MS", 2000),
            address_timeout: millis_from_env("ADDRESS_TIMEOUT_MS", 2000),
        }
    }
}

fn millis_from_env(key: &str, default: u64) -> Duration {
    let millis = env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default);
    Duration::from_millis(millis)
}
