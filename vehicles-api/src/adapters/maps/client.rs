//! Maps service HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{AddressInfo, Location};
use crate::domain::ports::LocationClient;
use crate::error::ClientError;

/// Reverse geocoding client for the maps service
pub struct HttpLocationClient {
    http: Client,
    base_url: String,
}

impl HttpLocationClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::AddressUnavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Response body of `GET /maps`
#[derive(Deserialize)]
struct AddressResponse {
    address: String,
    city: String,
    state: String,
    zip: String,
}

#[async_trait]
impl LocationClient for HttpLocationClient {
    async fn get_address(&self, location: Location) -> Result<AddressInfo, ClientError> {
        let response = self
            .http
            .get(format!("{}/maps", self.base_url))
            .query(&[("lat", location.lat), ("lon", location.lon)])
            .send()
            .await
            .map_err(|e| ClientError::AddressUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::AddressUnavailable(format!(
                "maps service returned {}",
                status.as_u16()
            )));
        }

        let body: AddressResponse = response
            .json()
            .await
            .map_err(|e| ClientError::AddressUnavailable(e.to_string()))?;

        Ok(AddressInfo {
            address: body.address,
            city: body.city,
            state: body.state,
            zip: body.zip,
        })
    }
}
