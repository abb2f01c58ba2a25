//! Error types for the pricing service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Cannot find price for Vehicle {0}")]
    PriceNotFound(i64),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let status = match &self {
            PricingError::PriceNotFound(id) => {
                tracing::debug!(vehicle_id = id, "No price on record");
                StatusCode::NOT_FOUND
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
