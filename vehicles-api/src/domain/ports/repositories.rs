//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SQLite).

use async_trait::async_trait;

use crate::domain::entities::{NewVehicle, Vehicle, VehicleId};
use crate::error::DomainError;

/// Repository for Vehicle records
///
/// Id assignment and uniqueness belong to the implementation. Ids are never
/// reused, even after a delete.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Store a new vehicle and assign it an id
    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, DomainError>;

    /// Find a vehicle by ID
    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, DomainError>;

    /// List all vehicles ordered by id
    async fn list(&self) -> Result<Vec<Vehicle>, DomainError>;

    /// Replace condition, location and details of an existing vehicle
    ///
    /// Returns `None` when no vehicle has this id.
    async fn update(
        &self,
        id: VehicleId,
        vehicle: &NewVehicle,
    ) -> Result<Option<Vehicle>, DomainError>;

    /// Delete a vehicle, returning whether it existed
    async fn delete(&self, id: VehicleId) -> Result<bool, DomainError>;
}
