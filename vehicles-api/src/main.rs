//! Vehicles API Server
//!
//! A vehicle catalog that serves stored vehicles together with a price from
//! the pricing service and an address from the maps service. Either remote
//! service may be down without failing a request.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{HttpLocationClient, HttpPriceClient, SqliteVehicleRepository};
use app::{EnrichmentTimeouts, VehicleService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub vehicle_service: Arc<VehicleService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router for the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/vehicles",
            get(handlers::list_vehicles).post(handlers::create_vehicle),
        )
        .route(
            "/vehicles/:id",
            get(handlers::get_vehicle)
                .put(handlers::update_vehicle)
                .delete(handlers::delete_vehicle),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vehicles_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vehicles API...");

    let config = Config::from_env();

    tracing::info!("Opening vehicle store at {}", config.database_url);
    let db = adapters::connect(&config.database_url)
        .await
        .context("Failed to open vehicle store")?;

    // Create adapters
    let vehicle_repo = Arc::new(SqliteVehicleRepository::new(db));
    let price_client = Arc::new(
        HttpPriceClient::new(config.pricing_url.clone(), config.price_timeout)
            .context("Failed to build pricing client")?,
    );
    let location_client = Arc::new(
        HttpLocationClient::new(config.maps_url.clone(), config.address_timeout)
            .context("Failed to build maps client")?,
    );
    tracing::info!(
        pricing_url = %config.pricing_url,
        maps_url = %config.maps_url,
        "Remote sources configured"
    );

    // Create application services
    let vehicle_service = Arc::new(VehicleService::new(
        vehicle_repo,
        price_client,
        location_client,
        EnrichmentTimeouts {
            price: config.price_timeout,
            address: config.address_timeout,
        },
    ));

    let app = router(AppState { vehicle_service });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
