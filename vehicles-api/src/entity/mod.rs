//! SeaORM entities
//!
//! Table definitions for the vehicle store. Domain conversions live in the
//! SQLite adapter.

pub mod vehicles;
