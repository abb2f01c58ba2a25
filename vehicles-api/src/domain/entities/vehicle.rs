//! Vehicle domain entity
//!
//! Represents a vehicle record as owned by the vehicle store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned identifier for a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VehicleId(pub i64);

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Condition of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    New,
    Used,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::New => write!(f, "NEW"),
            Condition::Used => write!(f, "USED"),
        }
    }
}

impl std::str::FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NEW" => Ok(Condition::New),
            "USED" => Ok(Condition::Used),
            _ => Err(format!("Unknown condition: {}", s)),
        }
    }
}

/// Geographic position of a vehicle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Check that both coordinates are finite and within range
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(DomainError::Validation(format!(
                "latitude {} is outside [-90, 90]",
                self.lat
            )));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(DomainError::Validation(format!(
                "longitude {} is outside [-180, 180]",
                self.lon
            )));
        }
        Ok(())
    }
}

/// Vehicle manufacturer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manufacturer {
    pub code: i32,
    pub name: String,
}

/// Descriptive details of a vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct Details {
    pub manufacturer: Manufacturer,
    pub body: String,
    pub model: String,
    pub number_of_doors: i32,
    pub fuel_type: String,
    pub engine: String,
    pub mileage: i32,
    pub model_year: i32,
    pub production_year: i32,
    pub external_color: String,
}

/// A vehicle record held by the store
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub condition: Condition,
    pub location: Location,
    pub details: Details,
}

/// Data needed to create or replace a vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub condition: Condition,
    pub location: Location,
    pub details: Details,
}

impl NewVehicle {
    /// Reject records the store must never see
    pub fn validate(&self) -> Result<(), DomainError> {
        self.location.validate()?;

        let details = &self.details;
        if details.model.trim().is_empty() {
            return Err(DomainError::Validation("model must not be blank".into()));
        }
        if details.body.trim().is_empty() {
            return Err(DomainError::Validation("body must not be blank".into()));
        }
        if details.manufacturer.name.trim().is_empty() {
            return Err(DomainError::Validation(
                "manufacturer name must not be blank".into(),
            ));
        }
        if details.number_of_doors < 1 {
            return Err(DomainError::Validation(
                "numberOfDoors must be at least 1".into(),
            ));
        }
        if details.mileage < 0 {
            return Err(DomainError::Validation("mileage must not be negative".into()));
        }
        Ok(())
    }
}
