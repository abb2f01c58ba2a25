//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod maps;
pub mod pricing;
pub mod sqlite;

pub use maps::HttpLocationClient;
pub use pricing::HttpPriceClient;
pub use sqlite::{connect, SqliteVehicleRepository};
