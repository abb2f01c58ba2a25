//! HTTP handlers for the pricing service

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::error::PricingError;
use crate::pricing::{Price, PriceTable};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuery {
    pub vehicle_id: i64,
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

/// GET /services/price?vehicleId={id}
pub async fn get_price(
    State(table): State<Arc<PriceTable>>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<Price>, PricingError> {
    let price = table.get(query.vehicle_id)?;
    Ok(Json(price.clone()))
}

pub fn router(table: Arc<PriceTable>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/services/price", get(get_price))
        .route("/price", get(get_price))
        .layer(TraceLayer::new_for_http())
        .with_state(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rust_decimal::Decimal;
    use serde_json::Value;
    use std::str::FromStr;

    fn server() -> TestServer {
        let table =
            PriceTable::default().with_price(1, "USD", Decimal::from_str("13779.96").unwrap());
        TestServer::new(router(Arc::new(table))).unwrap()
    }

    #[tokio::test]
    async fn get_vehicle_price() {
        let response = server().get("/services/price?vehicleId=1").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["vehicleId"], 1);
        assert_eq!(body["currency"], "USD");
        assert_eq!(body["price"], "13779.96");
    }

    #[tokio::test]
    async fn short_path_serves_same_price() {
        let response = server().get("/price?vehicleId=1").await;

        response.assert_status_ok();
        let price: Price = response.json();
        assert_eq!(price.price, Decimal::from_str("13779.96").unwrap());
    }

    #[tokio::test]
    async fn unknown_vehicle_returns_404() {
        let response = server().get("/services/price?vehicleId=99").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["error"], "Cannot find price for Vehicle 99");
    }

    #[tokio::test]
    async fn missing_vehicle_id_returns_400() {
        let response = server().get("/services/price").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = server().get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ok");
    }
}
