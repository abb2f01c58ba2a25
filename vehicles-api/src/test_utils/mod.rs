//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks are plain structs with builder methods (`failing()`, `slow()`,
//! `with_price()`) and public call recorders, so tests read as setup,
//! call, assert. They plug into `VehicleService` and the HTTP router through
//! the same `Arc<dyn ...>` ports the real adapters use.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
