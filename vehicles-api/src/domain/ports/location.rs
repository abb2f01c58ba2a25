//! Location client port trait
//!
//! Defines the interface for the remote maps service that turns coordinates
//! into a street address.

use async_trait::async_trait;

use crate::domain::entities::{AddressInfo, Location};
use crate::error::ClientError;

/// Port trait for reverse geocoding
#[async_trait]
pub trait LocationClient: Send + Sync {
    /// Resolve coordinates to an address, or `ClientError::AddressUnavailable`
    async fn get_address(&self, location: Location) -> Result<AddressInfo, ClientError>;
}
