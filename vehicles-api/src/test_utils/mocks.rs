//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::{AddressInfo, Location, NewVehicle, PriceInfo, Vehicle, VehicleId};
use crate::domain::ports::{LocationClient, PriceClient, VehicleRepository};
use crate::error::{ClientError, DomainError};

// ============================================================================
// In-Memory Vehicle Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Arc<RwLock<BTreeMap<VehicleId, Vehicle>>>,
    last_id: AtomicI64,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a vehicle synchronously, for test setup
    pub fn insert(&self, new_vehicle: NewVehicle) -> Vehicle {
        let id = VehicleId(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let now = Utc::now();
        let vehicle = Vehicle {
            id,
            created_at: now,
            modified_at: now,
            condition: new_vehicle.condition,
            location: new_vehicle.location,
            details: new_vehicle.details,
        };

        self.vehicles.write().unwrap().insert(id, vehicle.clone());
        vehicle
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, DomainError> {
        Ok(self.insert(vehicle.clone()))
    }

    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, DomainError> {
        let vehicles = self.vehicles.read().unwrap();
        Ok(vehicles.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Vehicle>, DomainError> {
        let vehicles = self.vehicles.read().unwrap();
        Ok(vehicles.values().cloned().collect())
    }

    async fn update(
        &self,
        id: VehicleId,
        vehicle: &NewVehicle,
    ) -> Result<Option<Vehicle>, DomainError> {
        let mut vehicles = self.vehicles.write().unwrap();
        let Some(existing) = vehicles.get_mut(&id) else {
            return Ok(None);
        };

        existing.condition = vehicle.condition;
        existing.location = vehicle.location;
        existing.details = vehicle.details.clone();
        existing.modified_at = Utc::now();

        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: VehicleId) -> Result<bool, DomainError> {
        let mut vehicles = self.vehicles.write().unwrap();
        Ok(vehicles.remove(&id).is_some())
    }
}

// ============================================================================
// Mock Price Client
// ============================================================================

/// A price client that answers from a configured table
#[derive(Default)]
pub struct MockPriceClient {
    prices: Arc<RwLock<BTreeMap<VehicleId, PriceInfo>>>,
    default_price: Option<(String, Decimal)>,
    pub should_fail: Arc<RwLock<bool>>,
    delay: Option<Duration>,
    /// Number of lookups received
    pub calls: Arc<RwLock<usize>>,
}

impl MockPriceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every lookup fails, like an unreachable service
    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Configure the price for one vehicle
    pub fn with_price(self, id: VehicleId, currency: &str, amount: Decimal) -> Self {
        self.prices
            .write()
            .unwrap()
            .insert(id, PriceInfo::new(id, currency, amount));
        self
    }

    /// Configure a price for every vehicle without an explicit one
    pub fn with_default_price(mut self, currency: &str, amount: Decimal) -> Self {
        self.default_price = Some((currency.to_string(), amount));
        self
    }

    /// Delay every answer
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PriceClient for MockPriceClient {
    async fn get_price(&self, vehicle_id: VehicleId) -> Result<PriceInfo, ClientError> {
        *self.calls.write().unwrap() += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if *self.should_fail.read().unwrap() {
            return Err(ClientError::PriceUnavailable(
                "connection refused".to_string(),
            ));
        }

        if let Some(price) = self.prices.read().unwrap().get(&vehicle_id) {
            return Ok(price.clone());
        }

        match &self.default_price {
            Some((currency, amount)) => Ok(PriceInfo::new(vehicle_id, currency.clone(), *amount)),
            None => Err(ClientError::PriceUnavailable(format!(
                "Cannot find price for Vehicle {}",
                vehicle_id
            ))),
        }
    }
}

// ============================================================================
// Mock Location Client
// ============================================================================

/// A location client that returns one configured address for any coordinates
#[derive(Default)]
pub struct MockLocationClient {
    address: Option<AddressInfo>,
    pub should_fail: Arc<RwLock<bool>>,
    delay: Option<Duration>,
    /// Coordinates of every lookup received
    pub requested: Arc<RwLock<Vec<Location>>>,
}

impl MockLocationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: AddressInfo) -> Self {
        self.address = Some(address);
        self
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl LocationClient for MockLocationClient {
    async fn get_address(&self, location: Location) -> Result<AddressInfo, ClientError> {
        self.requested.write().unwrap().push(location);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if *self.should_fail.read().unwrap() {
            return Err(ClientError::AddressUnavailable(
                "connection refused".to_string(),
            ));
        }

        self.address
            .clone()
            .ok_or_else(|| ClientError::AddressUnavailable("no address configured".to_string()))
    }
}
