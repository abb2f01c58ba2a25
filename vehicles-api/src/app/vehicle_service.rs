//! Vehicle service
//!
//! Aggregates stored vehicle records with prices and addresses from the
//! remote pricing and maps services.
//!
//! Only a missing vehicle (or a broken store) fails a request. Price and
//! address lookups run concurrently, each bounded by its own timeout, and a
//! lookup that errors or times out leaves a `Enrichment::Failed` in the view
//! instead of an error. Nothing fetched remotely is written back to the store.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::time::timeout;

use crate::domain::entities::{
    AddressInfo, Enrichment, NewVehicle, PriceInfo, Vehicle, VehicleId, VehicleView,
};
use crate::domain::ports::{LocationClient, PriceClient, VehicleRepository};
use crate::error::{AppError, DomainError};

/// Per-source time limits for enrichment calls
#[derive(Debug, Clone, Copy)]
pub struct EnrichmentTimeouts {
    pub price: Duration,
    pub address: Duration,
}

impl Default for EnrichmentTimeouts {
    fn default() -> Self {
        Self {
            price: Duration::from_secs(2),
            address: Duration::from_secs(2),
        }
    }
}

/// Service that serves vehicle records enriched with price and address
pub struct VehicleService {
    vehicles: Arc<dyn VehicleRepository>,
    prices: Arc<dyn PriceClient>,
    locations: Arc<dyn LocationClient>,
    timeouts: EnrichmentTimeouts,
}

impl VehicleService {
    pub fn new(
        vehicles: Arc<dyn VehicleRepository>,
        prices: Arc<dyn PriceClient>,
        locations: Arc<dyn LocationClient>,
        timeouts: EnrichmentTimeouts,
    ) -> Self {
        Self {
            vehicles,
            prices,
            locations,
            timeouts,
        }
    }

    /// Find a vehicle and enrich it
    pub async fn find_by_id(&self, id: VehicleId) -> Result<VehicleView, AppError> {
        let vehicle = self.load(id).await?;
        Ok(self.enrich(vehicle).await)
    }

    /// List every stored vehicle, each enriched independently
    pub async fn list(&self) -> Result<Vec<VehicleView>, AppError> {
        let vehicles = self.vehicles.list().await?;
        Ok(join_all(vehicles.into_iter().map(|v| self.enrich(v))).await)
    }

    /// Create a vehicle (no id) or replace an existing one, then enrich it
    ///
    /// Input is validated before the store sees it. Updating an unknown id is
    /// `NotFound`; ids are never chosen by the caller.
    pub async fn save(
        &self,
        id: Option<VehicleId>,
        vehicle: NewVehicle,
    ) -> Result<VehicleView, AppError> {
        vehicle.validate()?;

        let stored = match id {
            None => {
                let created = self.vehicles.create(&vehicle).await?;
                tracing::info!(vehicle_id = %created.id, "Vehicle created");
                created
            }
            Some(id) => {
                let updated = self
                    .vehicles
                    .update(id, &vehicle)
                    .await?
                    .ok_or_else(|| not_found(id))?;
                tracing::info!(vehicle_id = %id, "Vehicle updated");
                updated
            }
        };

        Ok(self.enrich(stored).await)
    }

    /// Delete a vehicle
    pub async fn delete(&self, id: VehicleId) -> Result<(), AppError> {
        if !self.vehicles.delete(id).await? {
            return Err(not_found(id).into());
        }
        tracing::info!(vehicle_id = %id, "Vehicle deleted");
        Ok(())
    }

    async fn load(&self, id: VehicleId) -> Result<Vehicle, DomainError> {
        self.vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Run both lookups and wait for both outcomes
    async fn enrich(&self, vehicle: Vehicle) -> VehicleView {
        let (price, address) = tokio::join!(
            self.fetch_price(vehicle.id),
            self.fetch_address(&vehicle)
        );

        VehicleView {
            vehicle,
            price,
            address,
        }
    }

    async fn fetch_price(&self, id: VehicleId) -> Enrichment<PriceInfo> {
        match timeout(self.timeouts.price, self.prices.get_price(id)).await {
            Ok(Ok(price)) => Enrichment::Succeeded(price),
            Ok(Err(e)) => {
                tracing::warn!(vehicle_id = %id, error = %e, "Price lookup failed");
                Enrichment::Failed
            }
            Err(_) => {
                tracing::warn!(
                    vehicle_id = %id,
                    timeout_ms = self.timeouts.price.as_millis() as u64,
                    "Price lookup timed out"
                );
                Enrichment::Failed
            }
        }
    }

    async fn fetch_address(&self, vehicle: &Vehicle) -> Enrichment<AddressInfo> {
        let lookup = self.locations.get_address(vehicle.location);

        match timeout(self.timeouts.address, lookup).await {
            Ok(Ok(address)) => Enrichment::Succeeded(address),
            Ok(Err(e)) => {
                tracing::warn!(vehicle_id = %vehicle.id, error = %e, "Address lookup failed");
                Enrichment::Failed
            }
            Err(_) => {
                tracing::warn!(
                    vehicle_id = %vehicle.id,
                    timeout_ms = self.timeouts.address.as_millis() as u64,
                    "Address lookup timed out"
                );
                Enrichment::Failed
            }
        }
    }
}

fn not_found(id: VehicleId) -> DomainError {
    DomainError::NotFound(format!("Vehicle {} not found", id))
}
