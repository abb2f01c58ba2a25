//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod extract;
pub mod vehicles;

pub use vehicles::{create_vehicle, delete_vehicle, get_vehicle, list_vehicles, update_vehicle};
