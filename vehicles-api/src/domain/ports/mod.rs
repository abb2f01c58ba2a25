//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod location;
pub mod pricing;
pub mod repositories;

pub use location::LocationClient;
pub use pricing::PriceClient;
pub use repositories::VehicleRepository;
