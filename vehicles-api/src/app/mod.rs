//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod vehicle_service;

pub use vehicle_service::{EnrichmentTimeouts, VehicleService};
