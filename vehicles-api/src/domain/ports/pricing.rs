//! Pricing client port trait
//!
//! Defines the interface for the remote pricing service.

use async_trait::async_trait;

use crate::domain::entities::{PriceInfo, VehicleId};
use crate::error::ClientError;

/// Port trait for price lookups
///
/// Implementations report every failure (transport, status, decoding) as
/// `ClientError::PriceUnavailable`. Callers own any retry policy.
#[async_trait]
pub trait PriceClient: Send + Sync {
    async fn get_price(&self, vehicle_id: VehicleId) -> Result<PriceInfo, ClientError>;
}
