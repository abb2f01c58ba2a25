//! SQLite adapters
//!
//! Implementations of repository traits using SeaORM and SQLite.

pub mod vehicle_repo;


pub use vehicle_repo::{connect, SqliteVehicleRepository};
