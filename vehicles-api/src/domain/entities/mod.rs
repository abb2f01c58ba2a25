//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod address;
pub mod enrichment;
pub mod price;
pub mod vehicle;

pub use address::AddressInfo;
pub use enrichment::{Enrichment, VehicleView};
pub use price::{PriceInfo, PRICE_UNAVAILABLE};
pub use vehicle::{Condition, Details, Location, Manufacturer, NewVehicle, Vehicle, VehicleId};
