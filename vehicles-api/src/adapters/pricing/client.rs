//! Pricing service HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::entities::{PriceInfo, VehicleId};
use crate::domain::ports::PriceClient;
use crate::error::ClientError;

/// Implementation of the pricing service client
pub struct HttpPriceClient {
    http: Client,
    base_url: String,
}

impl HttpPriceClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::PriceUnavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn price_url(&self) -> String {
        format!("{}/services/price", self.base_url)
    }
}

/// Response body of `GET /services/price`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceResponse {
    vehicle_id: i64,
    currency: String,
    price: Decimal,
}

#[async_trait]
impl PriceClient for HttpPriceClient {
    async fn get_price(&self, vehicle_id: VehicleId) -> Result<PriceInfo, ClientError> {
        let response = self
            .http
            .get(self.price_url())
            .query(&[("vehicleId", vehicle_id.0)])
            .send()
            .await
            .map_err(|e| ClientError::PriceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::PriceUnavailable(format!(
                "pricing service returned {}: {}",
                status.as_u16(),
                message
            )));
        }

        let body: PriceResponse = response
            .json()
            .await
            .map_err(|e| ClientError::PriceUnavailable(e.to_string()))?;

        if body.vehicle_id != vehicle_id.0 {
            return Err(ClientError::PriceUnavailable(format!(
                "asked for vehicle {} but got a price for {}",
                vehicle_id, body.vehicle_id
            )));
        }

        Ok(PriceInfo::new(vehicle_id, body.currency, body.price))
    }
}
