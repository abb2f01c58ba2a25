//! Pricing Service
//!
//! Serves a price quote per vehicle id for the Vehicles API. The price table
//! is generated at startup and kept in memory.

mod error;
mod handlers;
mod pricing;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pricing::{PriceTable, PRICED_VEHICLES};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pricing_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let table = PriceTable::generate(PRICED_VEHICLES, &mut rand::thread_rng());
    tracing::info!("Generated {} vehicle prices", table.count());

    let app = handlers::router(Arc::new(table));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8082);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
